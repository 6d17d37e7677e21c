use iced::{
    widget::container::Style,
    Background, Border,
};

use super::{palette, Theme};
use crate::color;

pub fn simple(theme: &Theme) -> Style {
    card(&theme.colors.cards.simple)
}

pub fn invalid(theme: &Theme) -> Style {
    card(&theme.colors.cards.invalid)
}

fn card(p: &palette::ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: Border {
            radius: 25.0.into(),
            width: 1.0,
            color: p.border.unwrap_or(color::TRANSPARENT),
        },
        ..Default::default()
    }
}
