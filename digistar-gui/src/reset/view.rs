use iced::widget::{scrollable, Space};
use iced::{Alignment, Length};

use digistar_ui::{
    component::{
        button, form, notification, progress,
        text::{self, h2, p1_regular, text},
    },
    theme,
    widget::*,
};

use crate::otp::OtpTimer;
use crate::services::portal::client::PortalError;

use super::{ResetStep, ViewMessage};

pub fn reset_password<'a>(
    email: &form::Value<String>,
    step: &ResetStep,
    timer: &OtpTimer,
    processing: bool,
    warning: Option<&PortalError>,
) -> Element<'a, ViewMessage> {
    let content = match step {
        ResetStep::EnterEmail => enter_email(email, processing),
        ResetStep::EnterOtp { otp } => enter_otp(&email.value, otp, timer, processing),
        ResetStep::NewPassword {
            password,
            confirm,
            strength,
            ..
        } => new_password(password, confirm, *strength, processing),
        ResetStep::Done => done(),
    };
    layout(warning, content)
}

fn enter_email<'a>(email: &form::Value<String>, processing: bool) -> Column<'a, ViewMessage> {
    Column::new()
        .spacing(20)
        .push(p1_regular(
            "Enter the email address associated with your account. \
             We will send it a verification code.",
        ))
        .push(
            form::Form::new_trimmed("Email", email, ViewMessage::EmailEdited)
                .warning("Enter a valid email address")
                .size(text::P1_SIZE)
                .padding(10),
        )
        .push(
            button::primary(None, "Send verification code")
                .width(Length::Fixed(240.0))
                .on_press_maybe(if processing || !email.valid {
                    None
                } else {
                    Some(ViewMessage::SendOtp)
                }),
        )
}

fn enter_otp<'a>(
    email: &str,
    otp: &form::Value<String>,
    timer: &OtpTimer,
    processing: bool,
) -> Column<'a, ViewMessage> {
    Column::new()
        .spacing(20)
        .push(text(format!(
            "A 6-digit verification code was emailed to {}",
            email
        )))
        .push(
            form::Form::new_trimmed("Verification code", otp, ViewMessage::OtpEdited)
                .warning("The code could not be verified")
                .size(text::P1_SIZE)
                .padding(10),
        )
        .push(
            Row::new()
                .spacing(10)
                .align_y(Alignment::Center)
                .push(button::secondary(None, "Change email").on_press(ViewMessage::EditEmail))
                .push(
                    button::secondary(None, "Resend code")
                        .width(Length::Fixed(200.0))
                        .on_press_maybe(if processing || timer.is_running() {
                            None
                        } else {
                            Some(ViewMessage::SendOtp)
                        }),
                )
                .push_maybe(if timer.is_running() {
                    Some(
                        text(format!("You can request a new code in {}", timer))
                            .style(theme::text::secondary),
                    )
                } else {
                    None
                }),
        )
}

fn new_password<'a>(
    password: &form::Value<String>,
    confirm: &form::Value<String>,
    strength: u8,
    processing: bool,
) -> Column<'a, ViewMessage> {
    let ready = !password.value.is_empty() && confirm.value == password.value;
    Column::new()
        .spacing(20)
        .push(p1_regular("Choose a new password for your account."))
        .push(
            form::Form::new_password("New password", password, ViewMessage::PasswordEdited)
                .size(text::P1_SIZE)
                .padding(10),
        )
        .push(progress::strength_meter(strength))
        .push(
            form::Form::new_password(
                "Confirm password",
                confirm,
                ViewMessage::ConfirmPasswordEdited,
            )
            .warning("Passwords do not match")
            .size(text::P1_SIZE)
            .padding(10),
        )
        .push(
            button::primary(None, "Change password")
                .width(Length::Fixed(200.0))
                .on_press_maybe(if processing || !ready {
                    None
                } else {
                    Some(ViewMessage::Submit)
                }),
        )
}

fn done<'a>() -> Column<'a, ViewMessage> {
    Column::new()
        .spacing(30)
        .align_x(Alignment::Center)
        .push(h2("Password changed"))
        .push(p1_regular(
            "You can now sign in to the member portal with your new password.",
        ))
        .push(
            button::primary(None, "Back to home")
                .width(Length::Fixed(200.0))
                .on_press(ViewMessage::BackToLauncher),
        )
}

fn layout<'a>(
    warning: Option<&PortalError>,
    content: Column<'a, ViewMessage>,
) -> Element<'a, ViewMessage> {
    Container::new(scrollable(
        Column::new()
            .width(Length::Fill)
            .push(Space::with_height(Length::Fixed(50.0)))
            .push(
                Row::new()
                    .align_y(Alignment::Center)
                    .push(
                        Container::new(
                            button::transparent(None, "Back")
                                .on_press(ViewMessage::BackToLauncher),
                        )
                        .center_x(Length::FillPortion(2)),
                    )
                    .push(
                        Container::new(h2("Reset your password")).width(Length::FillPortion(8)),
                    )
                    .push(Space::with_width(Length::FillPortion(2))),
            )
            .push(
                Row::new()
                    .push(Space::with_width(Length::FillPortion(2)))
                    .push(
                        Container::new(
                            Column::new()
                                .max_width(500)
                                .spacing(30)
                                .push(Space::with_height(Length::Fixed(30.0)))
                                .push_maybe(warning.map(|e| {
                                    notification::warning(
                                        "The portal refused the request".to_string(),
                                        e.to_string(),
                                    )
                                }))
                                .push(content)
                                .push(Space::with_height(Length::Fixed(50.0))),
                        )
                        .width(Length::FillPortion(8)),
                    )
                    .push(Space::with_width(Length::FillPortion(2))),
            ),
    ))
    .center_x(Length::Fill)
    .height(Length::Fill)
    .width(Length::Fill)
    .style(theme::container::background)
    .into()
}
