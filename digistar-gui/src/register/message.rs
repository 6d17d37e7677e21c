use super::form::Field;
use crate::services::portal::client::PortalError;

/// Everything the registration wizard reacts to.
#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    // One second of the resend cooldown elapsed.
    Tick,
    // Commands messages
    OtpRequested(Result<(), PortalError>),
    OtpVerified(Result<(), PortalError>),
    Registered(Result<(), PortalError>),
}

/// Messages emitted by the wizard screens themselves.
#[derive(Debug, Clone)]
pub enum ViewMessage {
    // account step
    EmailEdited(String),
    EditEmail,
    RequestOtp,
    OtpEdited(String),
    PasswordEdited(String),
    ConfirmPasswordEdited(String),
    // later steps
    FieldEdited(Field, String),
    TermsToggled(bool),
    // navigation
    Next,
    Previous,
    Submit,
    BackToLauncher,
}
