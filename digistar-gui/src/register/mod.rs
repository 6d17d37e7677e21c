pub mod catalog;
pub mod form;
pub mod message;
pub mod step;
pub mod view;

use iced::{Subscription, Task};

use digistar_ui::widget::Element;

use crate::{
    otp::OtpTimer,
    services::portal::{
        api::{OtpKind, RegisterPayload},
        client::{otp_already_sent_to_verified_email, PortalClient, PortalError},
    },
};

pub use form::{Action, Field, FormState};
pub use message::{Message, ViewMessage};
pub use step::Step;

pub const OTP_LENGTH: usize = 6;

const STEP_INCOMPLETE: &str = "Please complete all required fields correctly.";

/// One flag per request the wizard can have on the wire. Each completion
/// message clears its own flag, success or not.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    pub send_otp: bool,
    pub verify_otp: bool,
    pub submit: bool,
}

/// The registration wizard. Owns the accumulated form state, the current
/// step and the resend cooldown; talks to the portal through `client`.
pub struct Register {
    client: PortalClient,
    form: FormState,
    current: Step,
    timer: OtpTimer,
    in_flight: InFlight,
    warning: Option<PortalError>,
    step_error: Option<&'static str>,
    // Advisory input feedback, never a navigation gate on its own.
    email_valid: bool,
    otp_valid: bool,
    birthday_valid: bool,
    registered: bool,
}

impl Register {
    pub fn new(client: PortalClient) -> (Self, Task<Message>) {
        (
            Self {
                client,
                form: FormState::default(),
                current: Step::FIRST,
                timer: OtpTimer::default(),
                in_flight: InFlight::default(),
                warning: None,
                step_error: None,
                email_valid: true,
                otp_valid: true,
                birthday_valid: true,
                registered: false,
            },
            Task::none(),
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.timer.subscription(|| Message::Tick)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.timer.tick();
                Task::none()
            }
            Message::View(message) => self.on_view_message(message),
            Message::OtpRequested(res) => {
                self.in_flight.send_otp = false;
                match res {
                    Ok(()) => {
                        self.form.apply(Action::SetOtpSent(true));
                    }
                    // The portal refuses to send a code to an address it has
                    // already verified. That refusal is a success for us.
                    Err(e) if otp_already_sent_to_verified_email(&e) => {
                        self.form.apply(Action::EmailVerified);
                        self.timer.reset();
                    }
                    Err(e) => {
                        tracing::warn!("{}", e);
                        self.warning = Some(e);
                    }
                }
                Task::none()
            }
            Message::OtpVerified(res) => {
                self.in_flight.verify_otp = false;
                match res {
                    Ok(()) => {
                        self.form.apply(Action::EmailVerified);
                        self.timer.reset();
                    }
                    Err(e) => {
                        tracing::warn!("{}", e);
                        self.otp_valid = false;
                        self.warning = Some(e);
                    }
                }
                Task::none()
            }
            Message::Registered(res) => {
                self.in_flight.submit = false;
                match res {
                    Ok(()) => {
                        self.form.apply(Action::Reset);
                        self.current = Step::FIRST;
                        self.timer.reset();
                        self.registered = true;
                    }
                    // The entered data is kept so the user can fix whatever
                    // the portal complained about and submit again.
                    Err(e) => {
                        tracing::warn!("{}", e);
                        self.warning = Some(e);
                    }
                }
                Task::none()
            }
        }
    }

    fn on_view_message(&mut self, message: ViewMessage) -> Task<Message> {
        self.step_error = None;
        match message {
            ViewMessage::EmailEdited(value) => {
                self.email_valid = value.is_empty()
                    || email_address::EmailAddress::parse_with_options(
                        &value,
                        email_address::Options::default().with_required_tld(),
                    )
                    .is_ok();
                // Any edit drops a previous verification, even one writing
                // back the exact same address.
                self.form.apply(Action::ResetEmail(value));
                self.timer.reset();
                Task::none()
            }
            ViewMessage::EditEmail => {
                let email = self.form.form_data.email.clone();
                self.form.apply(Action::ResetEmail(email));
                self.timer.reset();
                self.otp_valid = true;
                Task::none()
            }
            ViewMessage::RequestOtp => {
                if self.in_flight.send_otp
                    || self.timer.is_running()
                    || self.form.form_data.email.is_empty()
                    || !self.email_valid
                {
                    return Task::none();
                }
                self.form.apply(Action::SetOtp(String::new()));
                self.otp_valid = true;
                self.in_flight.send_otp = true;
                self.warning = None;
                // The cooldown starts when the request leaves, not when the
                // portal acknowledges it.
                self.timer.start();
                let client = self.client.clone();
                let email = self.form.form_data.email.clone();
                Task::perform(
                    async move { client.send_otp(&email, OtpKind::Register).await },
                    Message::OtpRequested,
                )
            }
            ViewMessage::OtpEdited(value) => {
                let value = value.trim().to_string();
                self.otp_valid = true;
                self.form.apply(Action::SetOtp(value.clone()));
                if value.len() == OTP_LENGTH && !self.in_flight.verify_otp {
                    self.in_flight.verify_otp = true;
                    self.warning = None;
                    let client = self.client.clone();
                    let email = self.form.form_data.email.clone();
                    return Task::perform(
                        async move { client.verify_otp(&email, &value, OtpKind::Register).await },
                        Message::OtpVerified,
                    );
                }
                Task::none()
            }
            ViewMessage::PasswordEdited(value) => {
                self.form.apply(Action::SetPassword(value));
                Task::none()
            }
            ViewMessage::ConfirmPasswordEdited(value) => {
                self.form.apply(Action::SetConfirmPassword(value));
                Task::none()
            }
            ViewMessage::FieldEdited(field, value) => {
                if field == Field::Birthday {
                    self.birthday_valid = value.is_empty()
                        || chrono::NaiveDate::parse_from_str(&value, "%Y-%m-%d").is_ok();
                }
                self.form.apply(Action::Set(field, value));
                Task::none()
            }
            ViewMessage::TermsToggled(accepted) => {
                self.form.apply(Action::SetTerms(accepted));
                Task::none()
            }
            ViewMessage::Next => {
                if self.form.is_step_valid(self.current) {
                    if let Some(next) = self.current.next() {
                        self.current = next;
                    }
                } else {
                    self.step_error = Some(STEP_INCOMPLETE);
                }
                Task::none()
            }
            ViewMessage::Previous => {
                if let Some(previous) = self.current.previous() {
                    self.current = previous;
                }
                Task::none()
            }
            ViewMessage::Submit => self.on_submit(),
            // Handled by the shell above us.
            ViewMessage::BackToLauncher => Task::none(),
        }
    }

    fn on_submit(&mut self) -> Task<Message> {
        if self.in_flight.submit {
            return Task::none();
        }
        // Earlier steps may have been invalidated since they were passed,
        // e.g. by re-editing the email address from the confirmation screen.
        // Nothing leaves the machine before all of them check out again.
        if let Some(step) = Step::ALL.into_iter().find(|s| !self.form.is_step_valid(*s)) {
            self.current = step;
            self.step_error = Some(STEP_INCOMPLETE);
            return Task::none();
        }
        self.in_flight.submit = true;
        self.warning = None;
        let client = self.client.clone();
        let payload = RegisterPayload::from_form(&self.form.form_data, &self.form.password);
        Task::perform(
            async move { client.register(&payload).await },
            Message::Registered,
        )
    }

    pub fn view(&self) -> Element<Message> {
        view::register(
            self.current,
            &self.form,
            self.email_valid,
            self.otp_valid,
            self.birthday_valid,
            &self.timer,
            &self.in_flight,
            self.warning.as_ref(),
            self.step_error,
            self.registered,
        )
        .map(Message::View)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register() -> Register {
        Register::new(PortalClient::new("http://127.0.0.1:1234".to_string())).0
    }

    fn view(register: &mut Register, message: ViewMessage) {
        let _ = register.update(Message::View(message));
    }

    fn portal_error(message: &str) -> PortalError {
        PortalError {
            http_status: Some(400),
            message: message.to_string(),
        }
    }

    fn walk_to_confirm(register: &mut Register) {
        view(register, ViewMessage::EmailEdited("a@b.com".to_string()));
        view(register, ViewMessage::RequestOtp);
        let _ = register.update(Message::OtpRequested(Ok(())));
        view(register, ViewMessage::OtpEdited("123456".to_string()));
        let _ = register.update(Message::OtpVerified(Ok(())));
        view(register, ViewMessage::PasswordEdited("Abcdefg1!".to_string()));
        view(
            register,
            ViewMessage::ConfirmPasswordEdited("Abcdefg1!".to_string()),
        );
        view(register, ViewMessage::Next);

        view(
            register,
            ViewMessage::FieldEdited(Field::Name, "Tiara Putri".to_string()),
        );
        view(
            register,
            ViewMessage::FieldEdited(Field::Phone, "081234567890".to_string()),
        );
        view(
            register,
            ViewMessage::FieldEdited(Field::Birthday, "2001-04-17".to_string()),
        );
        view(
            register,
            ViewMessage::FieldEdited(Field::Gender, "female".to_string()),
        );
        view(
            register,
            ViewMessage::FieldEdited(Field::DomisiliId, "31".to_string()),
        );
        view(register, ViewMessage::Next);

        view(
            register,
            ViewMessage::FieldEdited(Field::Status, "student".to_string()),
        );
        view(
            register,
            ViewMessage::FieldEdited(Field::StudentCampusId, "tel-u".to_string()),
        );
        view(
            register,
            ViewMessage::FieldEdited(Field::MajorCampusId, "informatics".to_string()),
        );
        view(register, ViewMessage::Next);
    }

    #[test]
    fn full_wizard_walk_ends_on_the_success_screen() {
        let mut r = register();

        view(&mut r, ViewMessage::EmailEdited("a@b.com".to_string()));
        assert_eq!(r.form.form_data.email, "a@b.com");
        assert!(r.email_valid);

        view(&mut r, ViewMessage::RequestOtp);
        assert!(r.in_flight.send_otp);
        assert!(r.timer.is_running());

        let _ = r.update(Message::OtpRequested(Ok(())));
        assert!(!r.in_flight.send_otp);
        assert!(r.form.otp_sent);

        view(&mut r, ViewMessage::OtpEdited("123456".to_string()));
        assert!(r.in_flight.verify_otp);

        let _ = r.update(Message::OtpVerified(Ok(())));
        assert!(r.form.is_email_verified);
        assert!(r.form.otp.is_empty());
        assert!(!r.timer.is_running());

        view(&mut r, ViewMessage::PasswordEdited("Abcdefg1!".to_string()));
        assert_eq!(r.form.password_strength, 4);
        view(
            &mut r,
            ViewMessage::ConfirmPasswordEdited("Abcdefg1!".to_string()),
        );

        view(&mut r, ViewMessage::Next);
        assert_eq!(r.current, Step::Profile);

        view(
            &mut r,
            ViewMessage::FieldEdited(Field::Name, "Tiara Putri".to_string()),
        );
        view(
            &mut r,
            ViewMessage::FieldEdited(Field::Phone, "081234567890".to_string()),
        );
        view(
            &mut r,
            ViewMessage::FieldEdited(Field::Birthday, "2001-04-17".to_string()),
        );
        view(
            &mut r,
            ViewMessage::FieldEdited(Field::Gender, "female".to_string()),
        );
        view(
            &mut r,
            ViewMessage::FieldEdited(Field::DomisiliId, "31".to_string()),
        );
        view(&mut r, ViewMessage::Next);
        assert_eq!(r.current, Step::Affiliation);

        view(
            &mut r,
            ViewMessage::FieldEdited(Field::Status, "student".to_string()),
        );
        view(
            &mut r,
            ViewMessage::FieldEdited(Field::StudentCampusId, "tel-u".to_string()),
        );
        view(
            &mut r,
            ViewMessage::FieldEdited(Field::MajorCampusId, "informatics".to_string()),
        );
        view(&mut r, ViewMessage::Next);
        assert_eq!(r.current, Step::Confirm);

        view(&mut r, ViewMessage::TermsToggled(true));
        view(&mut r, ViewMessage::Submit);
        assert!(r.in_flight.submit);
        assert!(r.step_error.is_none());

        let _ = r.update(Message::Registered(Ok(())));
        assert!(r.registered);
        assert_eq!(r.form, FormState::default());
        assert_eq!(r.current, Step::FIRST);
        assert!(!r.timer.is_running());
    }

    #[test]
    fn already_verified_refusal_counts_as_verification() {
        let mut r = register();
        view(&mut r, ViewMessage::EmailEdited("a@b.com".to_string()));
        view(&mut r, ViewMessage::RequestOtp);

        let _ = r.update(Message::OtpRequested(Err(portal_error(
            "Email already verified",
        ))));
        assert!(r.form.is_email_verified);
        assert!(!r.form.otp_sent);
        assert!(r.warning.is_none());
        assert!(!r.timer.is_running());
    }

    #[test]
    fn failed_send_keeps_the_form_and_the_cooldown() {
        let mut r = register();
        view(&mut r, ViewMessage::EmailEdited("a@b.com".to_string()));
        view(&mut r, ViewMessage::PasswordEdited("Abcdefg1!".to_string()));
        view(&mut r, ViewMessage::RequestOtp);

        let _ = r.update(Message::OtpRequested(Err(portal_error(
            "Too many requests",
        ))));
        assert!(r.warning.is_some());
        assert!(!r.form.otp_sent);
        assert!(!r.form.is_email_verified);
        // Nothing entered so far is lost, and the cooldown keeps running.
        assert_eq!(r.form.form_data.email, "a@b.com");
        assert_eq!(r.form.password, "Abcdefg1!");
        assert!(r.timer.is_running());
    }

    #[test]
    fn otp_request_waits_for_the_cooldown() {
        let mut r = register();
        view(&mut r, ViewMessage::EmailEdited("a@b.com".to_string()));
        view(&mut r, ViewMessage::RequestOtp);
        let _ = r.update(Message::OtpRequested(Ok(())));

        // A second request during the cooldown does nothing.
        view(&mut r, ViewMessage::RequestOtp);
        assert!(!r.in_flight.send_otp);

        for _ in 0..crate::otp::OTP_RESEND_COOLDOWN {
            let _ = r.update(Message::Tick);
        }
        assert!(!r.timer.is_running());
        view(&mut r, ViewMessage::RequestOtp);
        assert!(r.in_flight.send_otp);
    }

    #[test]
    fn otp_request_refused_while_one_is_in_flight() {
        let mut r = register();
        view(&mut r, ViewMessage::EmailEdited("a@b.com".to_string()));
        r.in_flight.send_otp = true;

        view(&mut r, ViewMessage::RequestOtp);
        assert!(!r.timer.is_running());
    }

    #[test]
    fn otp_request_requires_a_plausible_address() {
        let mut r = register();
        view(&mut r, ViewMessage::RequestOtp);
        assert!(!r.in_flight.send_otp);

        view(&mut r, ViewMessage::EmailEdited("not-an-email".to_string()));
        assert!(!r.email_valid);
        view(&mut r, ViewMessage::RequestOtp);
        assert!(!r.in_flight.send_otp);
        assert!(!r.timer.is_running());
    }

    #[test]
    fn failed_verification_marks_the_code_invalid() {
        let mut r = register();
        view(&mut r, ViewMessage::EmailEdited("a@b.com".to_string()));
        view(&mut r, ViewMessage::RequestOtp);
        let _ = r.update(Message::OtpRequested(Ok(())));
        view(&mut r, ViewMessage::OtpEdited("123456".to_string()));

        let _ = r.update(Message::OtpVerified(Err(portal_error("Invalid token"))));
        assert!(!r.form.is_email_verified);
        assert!(!r.otp_valid);
        assert!(r.warning.is_some());

        // Typing a fresh code clears the marker and retries.
        view(&mut r, ViewMessage::OtpEdited("654321".to_string()));
        assert!(r.otp_valid);
        assert!(r.in_flight.verify_otp);
    }

    #[test]
    fn next_is_refused_on_an_incomplete_step() {
        let mut r = register();
        view(&mut r, ViewMessage::Next);
        assert_eq!(r.current, Step::Account);
        assert_eq!(r.step_error, Some(STEP_INCOMPLETE));

        // Any other interaction clears the refusal message.
        view(&mut r, ViewMessage::EmailEdited("a@b.com".to_string()));
        assert!(r.step_error.is_none());
    }

    #[test]
    fn refused_next_leaves_the_missing_selections_flagged() {
        let mut r = register();
        view(&mut r, ViewMessage::EmailEdited("a@b.com".to_string()));
        view(&mut r, ViewMessage::RequestOtp);
        let _ = r.update(Message::OtpRequested(Ok(())));
        view(&mut r, ViewMessage::OtpEdited("123456".to_string()));
        let _ = r.update(Message::OtpVerified(Ok(())));
        view(&mut r, ViewMessage::PasswordEdited("Abcdefg1!".to_string()));
        view(
            &mut r,
            ViewMessage::ConfirmPasswordEdited("Abcdefg1!".to_string()),
        );
        view(&mut r, ViewMessage::Next);
        assert_eq!(r.current, Step::Profile);

        view(
            &mut r,
            ViewMessage::FieldEdited(Field::Name, "Tiara Putri".to_string()),
        );
        view(
            &mut r,
            ViewMessage::FieldEdited(Field::Phone, "081234567890".to_string()),
        );
        view(
            &mut r,
            ViewMessage::FieldEdited(Field::Birthday, "2001-04-17".to_string()),
        );
        view(&mut r, ViewMessage::Next);
        // The refusal leaves the untouched selectors flagged for the view.
        assert_eq!(r.current, Step::Profile);
        assert_eq!(r.step_error, Some(STEP_INCOMPLETE));
        assert!(r.form.form_data.gender.is_empty());
        assert!(r.form.form_data.domisili_id.is_empty());

        view(
            &mut r,
            ViewMessage::FieldEdited(Field::Gender, "female".to_string()),
        );
        assert!(r.step_error.is_none());
        view(
            &mut r,
            ViewMessage::FieldEdited(Field::DomisiliId, "31".to_string()),
        );
        view(&mut r, ViewMessage::Next);
        assert_eq!(r.current, Step::Affiliation);
    }

    #[test]
    fn submit_rechecks_every_step() {
        let mut r = register();
        walk_to_confirm(&mut r);
        assert_eq!(r.current, Step::Confirm);
        view(&mut r, ViewMessage::TermsToggled(true));

        // Sabotage an earlier step after it was passed.
        view(&mut r, ViewMessage::FieldEdited(Field::Name, String::new()));
        view(&mut r, ViewMessage::Submit);
        assert!(!r.in_flight.submit);
        assert_eq!(r.current, Step::Profile);
        assert_eq!(r.step_error, Some(STEP_INCOMPLETE));

        view(
            &mut r,
            ViewMessage::FieldEdited(Field::Name, "Tiara Putri".to_string()),
        );
        view(&mut r, ViewMessage::Next);
        view(&mut r, ViewMessage::Next);
        view(&mut r, ViewMessage::Submit);
        assert!(r.in_flight.submit);
    }

    #[test]
    fn editing_the_email_reopens_the_account_step() {
        let mut r = register();
        walk_to_confirm(&mut r);
        view(&mut r, ViewMessage::TermsToggled(true));

        // Writing back the very same address still drops the verification.
        view(&mut r, ViewMessage::EmailEdited("a@b.com".to_string()));
        assert!(!r.form.is_email_verified);

        view(&mut r, ViewMessage::Submit);
        assert!(!r.in_flight.submit);
        assert_eq!(r.current, Step::Account);
    }

    #[test]
    fn failed_submission_keeps_the_entered_data() {
        let mut r = register();
        walk_to_confirm(&mut r);
        view(&mut r, ViewMessage::TermsToggled(true));
        view(&mut r, ViewMessage::Submit);

        let _ = r.update(Message::Registered(Err(portal_error(
            "Phone number already registered",
        ))));
        assert!(!r.in_flight.submit);
        assert!(!r.registered);
        assert!(r.warning.is_some());
        assert_eq!(r.form.form_data.name, "Tiara Putri");
        assert_eq!(r.current, Step::Confirm);
    }
}
