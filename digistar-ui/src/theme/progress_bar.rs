use iced::{
    widget::progress_bar::{Catalog, Style, StyleFn},
    Background, Border,
};

use super::Theme;
use crate::color;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

pub fn primary(theme: &Theme) -> Style {
    bar(theme, theme.colors.progress_bars.bar)
}

pub fn weak(theme: &Theme) -> Style {
    bar(theme, theme.colors.text.error)
}

pub fn fair(theme: &Theme) -> Style {
    bar(theme, theme.colors.text.warning)
}

pub fn strong(theme: &Theme) -> Style {
    bar(theme, theme.colors.text.success)
}

fn bar(theme: &Theme, fill: iced::Color) -> Style {
    Style {
        background: Background::Color(theme.colors.progress_bars.background),
        bar: Background::Color(fill),
        border: Border {
            radius: 8.0.into(),
            width: 0.0,
            color: theme.colors.progress_bars.border.unwrap_or(color::TRANSPARENT),
        },
    }
}
