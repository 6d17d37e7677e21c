use iced::{
    widget::container::Style,
    Background, Border,
};

use super::Theme;
use crate::color;

pub fn warning(theme: &Theme) -> Style {
    let p = &theme.colors.notifications.warning;
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
