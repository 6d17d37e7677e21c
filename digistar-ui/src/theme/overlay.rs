use iced::{
    widget::overlay::menu::{Catalog, Style, StyleFn},
    Background, Border,
};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> StyleFn<'a, Self> {
        Box::new(menu)
    }

    fn style(&self, class: &StyleFn<'_, Self>) -> Style {
        class(self)
    }
}

pub fn menu(theme: &Theme) -> Style {
    Style {
        text_color: theme.colors.text.primary,
        background: Background::Color(theme.colors.general.foreground),
        border: Border {
            radius: 10.0.into(),
            width: 1.0,
            color: theme.colors.general.background,
        },
        selected_text_color: theme.colors.buttons.primary.active.text,
        selected_background: Background::Color(theme.colors.buttons.primary.active.background),
    }
}
