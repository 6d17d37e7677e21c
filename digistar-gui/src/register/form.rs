/// A string-valued registration form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Name,
    Phone,
    Birthday,
    Gender,
    DomisiliId,
    DomisiliName,
    StudentCampusId,
    StudentCampusName,
    MajorCampusId,
    MajorCampusName,
    ProgramAlumniId,
    StudentChapterId,
    Status,
    Linkedin,
    Instagram,
    Telegram,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub birthday: String,
    pub gender: String,
    pub domisili_id: String,
    pub domisili_name: String,
    pub student_campus_id: String,
    pub student_campus_name: String,
    pub major_campus_id: String,
    pub major_campus_name: String,
    pub program_alumni_id: String,
    pub student_chapter_id: String,
    pub status: String,
    pub linkedin: String,
    pub instagram: String,
    pub telegram: String,
    pub terms: bool,
}

impl FormData {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Birthday => self.birthday = value,
            Field::Gender => self.gender = value,
            Field::DomisiliId => self.domisili_id = value,
            Field::DomisiliName => self.domisili_name = value,
            Field::StudentCampusId => self.student_campus_id = value,
            Field::StudentCampusName => self.student_campus_name = value,
            Field::MajorCampusId => self.major_campus_id = value,
            Field::MajorCampusName => self.major_campus_name = value,
            Field::ProgramAlumniId => self.program_alumni_id = value,
            Field::StudentChapterId => self.student_chapter_id = value,
            Field::Status => self.status = value,
            Field::Linkedin => self.linkedin = value,
            Field::Instagram => self.instagram = value,
            Field::Telegram => self.telegram = value,
        }
    }
}

/// Everything the wizard accumulates before the final submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub form_data: FormData,
    pub password: String,
    pub confirm_password: String,
    pub password_strength: u8,
    pub otp: String,
    pub otp_sent: bool,
    pub is_email_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Set(Field, String),
    SetTerms(bool),
    SetPassword(String),
    SetConfirmPassword(String),
    SetOtp(String),
    SetOtpSent(bool),
    ResetEmail(String),
    EmailVerified,
    Reset,
}

impl FormState {
    /// Applies one state transition. Pure, synchronous, no I/O.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Set(field, value) => self.form_data.set(field, value),
            Action::SetTerms(accepted) => self.form_data.terms = accepted,
            Action::SetPassword(password) => {
                // The strength score is derived state, recomputed on every
                // password write and nowhere else.
                self.password_strength = password_strength(&password);
                self.password = password;
            }
            Action::SetConfirmPassword(password) => self.confirm_password = password,
            Action::SetOtp(otp) => self.otp = otp,
            Action::SetOtpSent(sent) => self.otp_sent = sent,
            Action::ResetEmail(email) => {
                // Editing the address invalidates any prior verification,
                // even when the new value equals the old one.
                self.form_data.email = email;
                self.is_email_verified = false;
                self.otp_sent = false;
                self.otp.clear();
            }
            Action::EmailVerified => {
                self.is_email_verified = true;
                self.otp_sent = false;
                self.otp.clear();
            }
            Action::Reset => *self = FormState::default(),
        }
    }
}

/// Character-class rubric scoring a password 0..=4, not an entropy
/// estimator: one point each for length 8+, an ASCII uppercase letter, an
/// ASCII digit, and a character outside `[A-Za-z0-9]`.
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_rubric_cases() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abcdefgh"), 1);
        assert_eq!(password_strength("Abcdefgh"), 2);
        assert_eq!(password_strength("Abcdefg1"), 3);
        assert_eq!(password_strength("Abcdefg1!"), 4);
    }

    #[test]
    fn strength_counts_classes_not_length_alone() {
        // Short but mixed: no length point.
        assert_eq!(password_strength("A1!"), 3);
        // Only digits, long enough.
        assert_eq!(password_strength("12345678"), 2);
        // Whitespace counts as a special character.
        assert_eq!(password_strength("abcd efgh"), 2);
    }

    #[test]
    fn set_password_recomputes_strength() {
        let mut state = FormState::default();
        state.apply(Action::SetPassword("Abcdefg1!".to_string()));
        assert_eq!(state.password_strength, 4);
        state.apply(Action::SetPassword("abc".to_string()));
        assert_eq!(state.password_strength, 0);
    }

    #[test]
    fn set_touches_exactly_one_field() {
        let mut state = FormState::default();
        state.apply(Action::Set(Field::Name, "Tiara".to_string()));
        assert_eq!(
            state.form_data,
            FormData {
                name: "Tiara".to_string(),
                ..Default::default()
            }
        );
        state.apply(Action::Set(Field::Gender, "female".to_string()));
        assert_eq!(state.form_data.name, "Tiara");
        assert_eq!(state.form_data.gender, "female");
    }

    #[test]
    fn reset_email_clears_verification_for_same_email() {
        let mut state = FormState::default();
        state.apply(Action::Set(Field::Email, "a@b.com".to_string()));
        state.apply(Action::SetOtpSent(true));
        state.apply(Action::SetOtp("123456".to_string()));
        state.apply(Action::EmailVerified);
        assert!(state.is_email_verified);

        // Same address as before: prior verification still drops.
        state.apply(Action::ResetEmail("a@b.com".to_string()));
        assert_eq!(state.form_data.email, "a@b.com");
        assert!(!state.is_email_verified);
        assert!(!state.otp_sent);
        assert!(state.otp.is_empty());

        // And applying it again is a no-op.
        let before = state.clone();
        state.apply(Action::ResetEmail("a@b.com".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn email_verified_clears_otp_state() {
        let mut state = FormState::default();
        state.apply(Action::SetOtpSent(true));
        state.apply(Action::SetOtp("654321".to_string()));
        state.apply(Action::EmailVerified);
        assert!(state.is_email_verified);
        assert!(!state.otp_sent);
        assert!(state.otp.is_empty());
    }

    #[test]
    fn reset_restores_pristine_state() {
        let mut state = FormState::default();
        state.apply(Action::Set(Field::Email, "a@b.com".to_string()));
        state.apply(Action::Set(Field::Name, "Tiara".to_string()));
        state.apply(Action::Set(Field::DomisiliId, "other".to_string()));
        state.apply(Action::Set(Field::DomisiliName, "Depok".to_string()));
        state.apply(Action::SetPassword("Abcdefg1!".to_string()));
        state.apply(Action::SetConfirmPassword("Abcdefg1!".to_string()));
        state.apply(Action::SetTerms(true));
        state.apply(Action::SetOtpSent(true));
        state.apply(Action::SetOtp("123456".to_string()));
        state.apply(Action::EmailVerified);

        state.apply(Action::Reset);
        assert_eq!(state, FormState::default());
    }
}
