pub mod view;

use iced::{Subscription, Task};

use digistar_ui::component::form;
use digistar_ui::widget::Element;

use crate::{
    otp::OtpTimer,
    register::{form::password_strength, OTP_LENGTH},
    services::portal::{
        api::OtpKind,
        client::{PortalClient, PortalError},
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    Tick,
    // Commands messages
    OtpSent(Result<(), PortalError>),
    OtpVerified(Result<String, PortalError>),
    PasswordChanged(Result<(), PortalError>),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    EmailEdited(String),
    EditEmail,
    SendOtp,
    OtpEdited(String),
    PasswordEdited(String),
    ConfirmPasswordEdited(String),
    Submit,
    BackToLauncher,
}

/// Where the password reset stands. Each variant owns the inputs that only
/// exist at that point, so a completion landing after the user moved on is
/// simply dropped by the step match.
pub enum ResetStep {
    EnterEmail,
    EnterOtp {
        otp: form::Value<String>,
    },
    NewPassword {
        // Verified OTP, sent again along with the new password.
        token: String,
        password: form::Value<String>,
        confirm: form::Value<String>,
        strength: u8,
    },
    Done,
}

pub struct ResetPassword {
    client: PortalClient,
    email: form::Value<String>,
    step: ResetStep,
    timer: OtpTimer,
    processing: bool,
    warning: Option<PortalError>,
}

impl ResetPassword {
    pub fn new(client: PortalClient) -> (Self, Task<Message>) {
        (
            Self {
                client,
                email: form::Value::default(),
                step: ResetStep::EnterEmail,
                timer: OtpTimer::default(),
                processing: false,
                warning: None,
            },
            Task::none(),
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.timer.subscription(|| Message::Tick)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::Tick = message {
            self.timer.tick();
            return Task::none();
        }
        match &mut self.step {
            ResetStep::EnterEmail => match message {
                Message::View(ViewMessage::EmailEdited(value)) => {
                    self.email.valid = value.is_empty()
                        || email_address::EmailAddress::parse_with_options(
                            &value,
                            email_address::Options::default().with_required_tld(),
                        )
                        .is_ok();
                    self.email.value = value;
                }
                Message::View(ViewMessage::SendOtp) => {
                    if self.email.value.is_empty() {
                        self.email.valid = false;
                    } else if self.email.valid && !self.processing {
                        self.processing = true;
                        self.warning = None;
                        let client = self.client.clone();
                        let email = self.email.value.clone();
                        return Task::perform(
                            async move { client.send_otp(&email, OtpKind::ResetPassword).await },
                            Message::OtpSent,
                        );
                    }
                }
                Message::OtpSent(res) => {
                    self.processing = false;
                    match res {
                        Ok(()) => {
                            // The cooldown only starts once the portal
                            // confirms a code went out.
                            self.timer.start();
                            self.step = ResetStep::EnterOtp {
                                otp: form::Value::default(),
                            };
                        }
                        Err(e) => {
                            tracing::warn!("{}", e);
                            self.warning = Some(e);
                        }
                    }
                }
                _ => {}
            },
            ResetStep::EnterOtp { otp } => match message {
                Message::View(ViewMessage::EditEmail) => {
                    self.timer.reset();
                    self.warning = None;
                    self.step = ResetStep::EnterEmail;
                }
                Message::View(ViewMessage::SendOtp) => {
                    if !self.processing && !self.timer.is_running() {
                        *otp = form::Value::default();
                        self.processing = true;
                        self.warning = None;
                        let client = self.client.clone();
                        let email = self.email.value.clone();
                        return Task::perform(
                            async move { client.send_otp(&email, OtpKind::ResetPassword).await },
                            Message::OtpSent,
                        );
                    }
                }
                Message::OtpSent(res) => {
                    self.processing = false;
                    match res {
                        Ok(()) => self.timer.start(),
                        Err(e) => {
                            tracing::warn!("{}", e);
                            self.warning = Some(e);
                        }
                    }
                }
                Message::View(ViewMessage::OtpEdited(value)) => {
                    otp.value = value.trim().to_string();
                    otp.valid = true;
                    if otp.value.len() == OTP_LENGTH && !self.processing {
                        self.processing = true;
                        self.warning = None;
                        let client = self.client.clone();
                        let email = self.email.value.clone();
                        let token = otp.value.clone();
                        return Task::perform(
                            async move {
                                client
                                    .verify_otp(&email, &token, OtpKind::ResetPassword)
                                    .await
                                    .map(|()| token)
                            },
                            Message::OtpVerified,
                        );
                    }
                }
                Message::OtpVerified(res) => {
                    self.processing = false;
                    match res {
                        Ok(token) => {
                            self.timer.reset();
                            self.step = ResetStep::NewPassword {
                                token,
                                password: form::Value::default(),
                                confirm: form::Value::default(),
                                strength: 0,
                            };
                        }
                        Err(e) => {
                            tracing::warn!("{}", e);
                            otp.valid = false;
                            self.warning = Some(e);
                        }
                    }
                }
                _ => {}
            },
            ResetStep::NewPassword {
                token,
                password,
                confirm,
                strength,
            } => match message {
                Message::View(ViewMessage::PasswordEdited(value)) => {
                    *strength = password_strength(&value);
                    password.value = value;
                    confirm.valid = confirm.value.is_empty() || confirm.value == password.value;
                }
                Message::View(ViewMessage::ConfirmPasswordEdited(value)) => {
                    confirm.valid = value.is_empty() || value == password.value;
                    confirm.value = value;
                }
                Message::View(ViewMessage::Submit) => {
                    if !self.processing
                        && !password.value.is_empty()
                        && password.value == confirm.value
                    {
                        self.processing = true;
                        self.warning = None;
                        let client = self.client.clone();
                        let email = self.email.value.clone();
                        let token = token.clone();
                        let new_password = password.value.clone();
                        return Task::perform(
                            async move {
                                client.reset_password(&email, &token, &new_password).await
                            },
                            Message::PasswordChanged,
                        );
                    }
                }
                Message::PasswordChanged(res) => {
                    self.processing = false;
                    match res {
                        Ok(()) => {
                            self.step = ResetStep::Done;
                        }
                        Err(e) => {
                            tracing::warn!("{}", e);
                            self.warning = Some(e);
                        }
                    }
                }
                _ => {}
            },
            ResetStep::Done => {}
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        view::reset_password(
            &self.email,
            &self.step,
            &self.timer,
            self.processing,
            self.warning.as_ref(),
        )
        .map(Message::View)
    }
}
