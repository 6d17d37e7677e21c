use iced::{
    widget::container,
    widget::scrollable::{Catalog, Rail, Scroller, Status, Style, StyleFn},
    Background, Border,
};

use super::Theme;
use crate::color;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, _status: Status) -> Style {
    let rail = Rail {
        background: None,
        border: Border::default(),
        scroller: Scroller {
            color: theme.colors.general.scrollable,
            border: Border {
                radius: 25.0.into(),
                width: 0.0,
                color: color::TRANSPARENT,
            },
        },
    };
    Style {
        container: container::Style::default(),
        vertical_rail: rail,
        horizontal_rail: rail,
        gap: Some(Background::Color(color::TRANSPARENT)),
    }
}
