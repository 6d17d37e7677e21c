use iced::{
    widget::{scrollable, Space},
    Alignment, Length, Subscription, Task,
};

use digistar_ui::{
    component::{button, text::*},
    theme,
    widget::*,
};

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    CreateAccount,
    ResetPassword,
}

/// The home screen, a menu of the two flows the portal offers.
pub struct Launcher {}

impl Launcher {
    pub fn new() -> (Self, Task<Message>) {
        (Self {}, Task::none())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::none()
    }

    pub fn update(&mut self, _message: Message) -> Task<Message> {
        // Both menu choices are handled by the shell, which swaps the
        // launcher out for the chosen flow.
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        Into::<Element<ViewMessage>>::into(scrollable(
            Column::new()
                .push(Space::with_height(Length::Fixed(100.0)))
                .push(
                    Container::new(
                        Column::new()
                            .align_x(Alignment::Center)
                            .spacing(30)
                            .push(text("Digistar Club").size(50).bold())
                            .push(
                                p1_regular("The Telkom Indonesia digital talent community")
                                    .style(theme::text::secondary),
                            )
                            .push(menu())
                            .align_x(Alignment::Center),
                    )
                    .center_x(Length::Fill),
                )
                .push(Space::with_height(Length::Fixed(100.0))),
        ))
        .map(Message::View)
    }
}

fn menu<'a>() -> Element<'a, ViewMessage> {
    Row::new()
        .align_y(Alignment::End)
        .spacing(20)
        .push(
            Container::new(
                Column::new()
                    .spacing(20)
                    .align_x(Alignment::Center)
                    .push(h4_bold("New member"))
                    .push(
                        p1_regular("Register and verify your email address")
                            .style(theme::text::secondary),
                    )
                    .push(
                        button::primary(None, "Create an account")
                            .width(Length::Fixed(250.0))
                            .on_press(ViewMessage::CreateAccount),
                    )
                    .align_x(Alignment::Center),
            )
            .padding(20),
        )
        .push(
            Container::new(
                Column::new()
                    .spacing(20)
                    .align_x(Alignment::Center)
                    .push(h4_bold("Existing member"))
                    .push(
                        p1_regular("Recover access with a new password")
                            .style(theme::text::secondary),
                    )
                    .push(
                        button::secondary(None, "Reset your password")
                            .width(Length::Fixed(250.0))
                            .on_press(ViewMessage::ResetPassword),
                    )
                    .align_x(Alignment::Center),
            )
            .padding(20),
        )
        .into()
}
