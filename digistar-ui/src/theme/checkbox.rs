use iced::{
    widget::checkbox::{Catalog, Status, Style, StyleFn},
    Background, Border,
};

use super::Theme;
use crate::color;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(checkbox)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn checkbox(theme: &Theme, status: Status) -> Style {
    let p = &theme.colors.checkboxes;
    match status {
        Status::Active { is_checked } => Style {
            background: Background::Color(if is_checked {
                p.background
            } else {
                color::TRANSPARENT
            }),
            icon_color: p.icon,
            text_color: Some(p.text),
            border: Border {
                radius: 4.0.into(),
                width: 1.0,
                color: p.border.unwrap_or(color::TRANSPARENT),
            },
        },
        Status::Hovered { is_checked: _ } => Style {
            background: Background::Color(p.background),
            icon_color: p.icon,
            text_color: Some(p.text),
            border: Border {
                radius: 4.0.into(),
                width: 1.0,
                color: p.icon,
            },
        },
        Status::Disabled { is_checked } => Style {
            background: Background::Color(if is_checked {
                p.background
            } else {
                color::TRANSPARENT
            }),
            icon_color: p.icon,
            text_color: Some(theme.colors.text.secondary),
            border: Border {
                radius: 4.0.into(),
                width: 1.0,
                color: p.border.unwrap_or(color::TRANSPARENT),
            },
        },
    }
}
