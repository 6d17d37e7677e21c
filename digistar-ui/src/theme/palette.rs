use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub checkboxes: Checkboxes,
    pub progress_bars: ProgressBars,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub transparent: Button,
    pub link: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub invalid: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub warning: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Checkboxes {
    pub icon: iced::Color,
    pub text: iced::Color,
    pub background: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProgressBars {
    pub background: iced::Color,
    pub bar: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::NIGHT,
                foreground: color::CHARCOAL,
                scrollable: color::GREY_4,
            },
            text: Text {
                primary: color::GREY_1,
                secondary: color::GREY_3,
                warning: color::ORANGE,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::RED,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::DARK_RED,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::DARK_RED,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_6,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::CHARCOAL,
                        text: color::GREY_1,
                        border: color::GREY_4.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::CHARCOAL,
                        text: color::WHITE,
                        border: color::RED.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_6,
                        text: color::WHITE,
                        border: color::RED.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::CHARCOAL,
                        text: color::GREY_3,
                        border: color::GREY_5.into(),
                    }),
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_2,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::BLUE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::CHARCOAL,
                    text: None,
                    border: Some(color::TRANSPARENT),
                },
                invalid: ContainerPalette {
                    background: color::CHARCOAL,
                    text: color::RED.into(),
                    border: color::RED.into(),
                },
            },
            notifications: Notifications {
                warning: ContainerPalette {
                    background: color::ORANGE,
                    text: color::BLACK.into(),
                    border: None,
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::CHARCOAL,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_1,
                        selection: color::TRANSPARENT_RED,
                        border: Some(color::GREY_4),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_3,
                        selection: color::TRANSPARENT_RED,
                        border: Some(color::GREY_5),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::CHARCOAL,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_1,
                        selection: color::TRANSPARENT_RED,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_3,
                        selection: color::TRANSPARENT_RED,
                        border: Some(color::RED),
                    },
                },
            },
            checkboxes: Checkboxes {
                icon: color::RED,
                text: color::GREY_1,
                background: color::CHARCOAL,
                border: Some(color::GREY_4),
            },
            progress_bars: ProgressBars {
                background: color::GREY_6,
                bar: color::RED,
                border: None,
            },
        }
    }
}
