use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border,
};

use super::{palette, Theme};

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    text_input(&theme.colors.text_inputs.primary, status)
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    text_input(&theme.colors.text_inputs.invalid, status)
}

fn text_input(p: &palette::TextInput, status: Status) -> Style {
    match status {
        Status::Active | Status::Hovered | Status::Focused => Style {
            background: Background::Color(p.active.background),
            border: if let Some(color) = p.active.border {
                Border {
                    radius: 25.0.into(),
                    width: 1.0,
                    color,
                }
            } else {
                Border {
                    radius: 25.0.into(),
                    ..Default::default()
                }
            },
            icon: p.active.icon,
            placeholder: p.active.placeholder,
            value: p.active.value,
            selection: p.active.selection,
        },
        Status::Disabled => Style {
            background: Background::Color(p.disabled.background),
            border: if let Some(color) = p.disabled.border {
                Border {
                    radius: 25.0.into(),
                    width: 1.0,
                    color,
                }
            } else {
                Border {
                    radius: 25.0.into(),
                    ..Default::default()
                }
            },
            icon: p.disabled.icon,
            placeholder: p.disabled.placeholder,
            value: p.disabled.value,
            selection: p.disabled.selection,
        },
    }
}
