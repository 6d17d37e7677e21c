use super::catalog::OTHER_ID;
use super::form::FormState;

/// The four wizard screens, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Account,
    Profile,
    Affiliation,
    Confirm,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::Account,
        Step::Profile,
        Step::Affiliation,
        Step::Confirm,
    ];
    pub const FIRST: Step = Step::Account;
    pub const LAST: Step = Step::Confirm;
    pub const COUNT: usize = Self::ALL.len();

    /// 1-based position, for the "step N of M" progress display.
    pub fn index(&self) -> usize {
        match self {
            Step::Account => 1,
            Step::Profile => 2,
            Step::Affiliation => 3,
            Step::Confirm => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Account => "Account",
            Step::Profile => "Personal details",
            Step::Affiliation => "Campus & community",
            Step::Confirm => "Confirmation",
        }
    }

    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Account => Some(Step::Profile),
            Step::Profile => Some(Step::Affiliation),
            Step::Affiliation => Some(Step::Confirm),
            Step::Confirm => None,
        }
    }

    pub fn previous(&self) -> Option<Step> {
        match self {
            Step::Account => None,
            Step::Profile => Some(Step::Account),
            Step::Affiliation => Some(Step::Profile),
            Step::Confirm => Some(Step::Affiliation),
        }
    }
}

impl FormState {
    /// Whether `step` holds everything it needs. Pure and cheap, evaluated
    /// on every render and again over all steps before submission.
    pub fn is_step_valid(&self, step: Step) -> bool {
        match step {
            // Password strength is advisory feedback, not a gate.
            Step::Account => {
                self.is_email_verified
                    && !self.password.is_empty()
                    && !self.confirm_password.is_empty()
                    && self.password == self.confirm_password
            }
            Step::Profile => {
                let data = &self.form_data;
                !data.name.is_empty()
                    && !data.phone.is_empty()
                    && !data.birthday.is_empty()
                    && !data.gender.is_empty()
                    && !data.domisili_id.is_empty()
                    && (data.domisili_id != OTHER_ID || !data.domisili_name.is_empty())
            }
            Step::Affiliation => {
                let data = &self.form_data;
                !data.status.is_empty()
                    && !data.student_campus_id.is_empty()
                    && (data.student_campus_id != OTHER_ID || !data.student_campus_name.is_empty())
                    && !data.major_campus_id.is_empty()
                    && (data.major_campus_id != OTHER_ID || !data.major_campus_name.is_empty())
            }
            Step::Confirm => self.form_data.terms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::form::{Action, Field};

    fn verified_account() -> FormState {
        let mut state = FormState::default();
        state.apply(Action::Set(Field::Email, "a@b.com".to_string()));
        state.apply(Action::EmailVerified);
        state.apply(Action::SetPassword("Abcdefg1!".to_string()));
        state.apply(Action::SetConfirmPassword("Abcdefg1!".to_string()));
        state
    }

    #[test]
    fn step_order_round_trips() {
        assert_eq!(Step::FIRST.previous(), None);
        assert_eq!(Step::LAST.next(), None);
        for step in Step::ALL {
            if let Some(next) = step.next() {
                assert_eq!(next.previous(), Some(step));
            }
        }
        assert_eq!(Step::COUNT, 4);
    }

    #[test]
    fn account_step_requires_verification_and_matching_passwords() {
        let state = verified_account();
        assert!(state.is_step_valid(Step::Account));

        // A confirm edit that breaks the match flips the gate.
        let mut mismatched = state.clone();
        mismatched.apply(Action::SetConfirmPassword("Abcdefg1".to_string()));
        assert!(!mismatched.is_step_valid(Step::Account));

        // Weak passwords pass as long as they match: strength is advisory.
        let mut weak = verified_account();
        weak.apply(Action::SetPassword("weak".to_string()));
        weak.apply(Action::SetConfirmPassword("weak".to_string()));
        assert!(weak.is_step_valid(Step::Account));

        // Losing verification closes the step again.
        let mut edited = state;
        edited.apply(Action::ResetEmail("a@b.com".to_string()));
        assert!(!edited.is_step_valid(Step::Account));
    }

    #[test]
    fn empty_passwords_do_not_pass_by_matching() {
        let mut state = FormState::default();
        state.apply(Action::EmailVerified);
        assert!(!state.is_step_valid(Step::Account));
    }

    #[test]
    fn profile_step_requires_name_for_other_domisili() {
        let mut state = FormState::default();
        state.apply(Action::Set(Field::Name, "Tiara".to_string()));
        state.apply(Action::Set(Field::Phone, "0812".to_string()));
        state.apply(Action::Set(Field::Birthday, "2001-04-17".to_string()));
        state.apply(Action::Set(Field::Gender, "female".to_string()));
        state.apply(Action::Set(Field::DomisiliId, OTHER_ID.to_string()));
        assert!(!state.is_step_valid(Step::Profile));

        state.apply(Action::Set(Field::DomisiliName, "Depok".to_string()));
        assert!(state.is_step_valid(Step::Profile));

        // A catalog region does not need the free-typed name.
        state.apply(Action::Set(Field::DomisiliId, "31".to_string()));
        state.apply(Action::Set(Field::DomisiliName, String::new()));
        assert!(state.is_step_valid(Step::Profile));
    }

    #[test]
    fn affiliation_step_applies_other_rule_to_both_groups() {
        let mut state = FormState::default();
        state.apply(Action::Set(Field::Status, "student".to_string()));
        state.apply(Action::Set(Field::StudentCampusId, "tel-u".to_string()));
        state.apply(Action::Set(Field::MajorCampusId, OTHER_ID.to_string()));
        assert!(!state.is_step_valid(Step::Affiliation));

        state.apply(Action::Set(Field::MajorCampusName, "Data Science".to_string()));
        assert!(state.is_step_valid(Step::Affiliation));

        state.apply(Action::Set(Field::StudentCampusId, OTHER_ID.to_string()));
        assert!(!state.is_step_valid(Step::Affiliation));
        state.apply(Action::Set(
            Field::StudentCampusName,
            "Politeknik Negeri Jakarta".to_string(),
        ));
        assert!(state.is_step_valid(Step::Affiliation));
    }

    #[test]
    fn confirm_step_gates_on_terms() {
        let mut state = FormState::default();
        assert!(!state.is_step_valid(Step::Confirm));
        state.apply(Action::SetTerms(true));
        assert!(state.is_step_valid(Step::Confirm));
        state.apply(Action::SetTerms(false));
        assert!(!state.is_step_valid(Step::Confirm));
    }
}
