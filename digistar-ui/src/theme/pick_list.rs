use iced::{
    widget::pick_list::{Catalog, Status, Style, StyleFn},
    Background, Border,
};

use super::Theme;
use crate::color;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> <Self as Catalog>::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &<Self as Catalog>::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    let p = &theme.colors.buttons.secondary;
    match status {
        Status::Active => Style {
            background: Background::Color(p.active.background),
            text_color: p.active.text,
            placeholder_color: theme.colors.text.secondary,
            handle_color: theme.colors.text.secondary,
            border: Border {
                radius: 25.0.into(),
                width: 1.0,
                color: p.active.border.unwrap_or(color::TRANSPARENT),
            },
        },
        Status::Hovered | Status::Opened => Style {
            background: Background::Color(p.hovered.background),
            text_color: p.hovered.text,
            placeholder_color: theme.colors.text.secondary,
            handle_color: theme.colors.text.primary,
            border: Border {
                radius: 25.0.into(),
                width: 1.0,
                color: p.hovered.border.unwrap_or(color::TRANSPARENT),
            },
        },
    }
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    Style {
        border: Border {
            radius: 25.0.into(),
            width: 1.0,
            color: theme.colors.text.error,
        },
        ..primary(theme, status)
    }
}
