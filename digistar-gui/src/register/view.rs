use iced::widget::{checkbox, pick_list, scrollable, Space};
use iced::{Alignment, Length};

use digistar_ui::{
    component::{
        button, card, form, notification, progress,
        text::{self, h2, h3, p1_bold, p1_regular, p2_regular, text},
    },
    theme,
    widget::*,
};

use crate::otp::OtpTimer;
use crate::services::portal::client::PortalError;

use super::{
    catalog::{self, CatalogEntry},
    form::{Field, FormState},
    message::ViewMessage,
    step::Step,
    InFlight,
};

pub fn register<'a>(
    current: Step,
    state: &'a FormState,
    email_valid: bool,
    otp_valid: bool,
    birthday_valid: bool,
    timer: &'a OtpTimer,
    in_flight: &'a InFlight,
    warning: Option<&'a PortalError>,
    step_error: Option<&'a str>,
    registered: bool,
) -> Element<'a, ViewMessage> {
    if registered {
        return success();
    }
    // A refused Next or Submit marks the required selections still missing.
    let flagged = step_error.is_some();
    let content = match current {
        Step::Account => account(state, email_valid, otp_valid, timer, in_flight),
        Step::Profile => profile(state, birthday_valid, flagged),
        Step::Affiliation => affiliation(state, flagged),
        Step::Confirm => confirm(state),
    };
    layout(current, warning, step_error, in_flight, content)
}

fn account<'a>(
    state: &'a FormState,
    email_valid: bool,
    otp_valid: bool,
    timer: &'a OtpTimer,
    in_flight: &'a InFlight,
) -> Column<'a, ViewMessage> {
    let email = form::Value {
        value: state.form_data.email.clone(),
        valid: email_valid,
    };
    let can_send =
        !in_flight.send_otp && !timer.is_running() && !email.value.is_empty() && email_valid;

    let mut col = Column::new().spacing(20).push(p1_bold("Email address"));

    if state.is_email_verified {
        col = col
            .push(
                form::Form::new_disabled("Email", &email)
                    .size(text::P1_SIZE)
                    .padding(10),
            )
            .push(
                Row::new()
                    .spacing(10)
                    .align_y(Alignment::Center)
                    .push(text("Email verified").style(theme::text::success))
                    .push(button::link(None, "Change email").on_press(ViewMessage::EditEmail)),
            );
    } else if state.otp_sent {
        let otp = form::Value {
            value: state.otp.clone(),
            valid: otp_valid,
        };
        col = col
            .push(
                form::Form::new_disabled("Email", &email)
                    .size(text::P1_SIZE)
                    .padding(10),
            )
            .push(text(format!(
                "A 6-digit verification code was emailed to {}",
                state.form_data.email
            )))
            .push(
                form::Form::new_trimmed("Verification code", &otp, ViewMessage::OtpEdited)
                    .warning("The code could not be verified")
                    .size(text::P1_SIZE)
                    .padding(10),
            )
            .push(
                Row::new()
                    .spacing(10)
                    .align_y(Alignment::Center)
                    .push(
                        button::secondary(None, "Change email").on_press(ViewMessage::EditEmail),
                    )
                    .push(send_code_row(can_send, true, timer)),
            );
    } else {
        col = col
            .push(
                form::Form::new_trimmed("Email", &email, ViewMessage::EmailEdited)
                    .warning("Enter a valid email address")
                    .size(text::P1_SIZE)
                    .padding(10),
            )
            .push(send_code_row(can_send, false, timer));
    }

    let password = form::Value {
        value: state.password.clone(),
        valid: true,
    };
    let confirm = form::Value {
        value: state.confirm_password.clone(),
        valid: state.confirm_password.is_empty() || state.confirm_password == state.password,
    };

    col.push(p1_bold("Password"))
        .push(
            form::Form::new_password("Password", &password, ViewMessage::PasswordEdited)
                .size(text::P1_SIZE)
                .padding(10),
        )
        .push(progress::strength_meter(state.password_strength))
        .push(
            form::Form::new_password(
                "Confirm password",
                &confirm,
                ViewMessage::ConfirmPasswordEdited,
            )
            .warning("Passwords do not match")
            .size(text::P1_SIZE)
            .padding(10),
        )
}

fn send_code_row<'a>(can_send: bool, resend: bool, timer: &OtpTimer) -> Row<'a, ViewMessage> {
    let label = if resend {
        "Resend code"
    } else {
        "Send verification code"
    };
    Row::new()
        .spacing(10)
        .align_y(Alignment::Center)
        .push(
            button::secondary(None, label)
                .width(Length::Fixed(240.0))
                .on_press_maybe(if can_send {
                    Some(ViewMessage::RequestOtp)
                } else {
                    None
                }),
        )
        .push_maybe(if timer.is_running() {
            Some(
                text(format!("You can request a new code in {}", timer))
                    .style(theme::text::secondary),
            )
        } else {
            None
        })
}

fn profile<'a>(
    state: &'a FormState,
    birthday_valid: bool,
    flagged: bool,
) -> Column<'a, ViewMessage> {
    let name = form::Value {
        value: state.form_data.name.clone(),
        valid: true,
    };
    let phone = form::Value {
        value: state.form_data.phone.clone(),
        valid: true,
    };
    let birthday = form::Value {
        value: state.form_data.birthday.clone(),
        valid: birthday_valid,
    };

    Column::new()
        .spacing(20)
        .push(labeled(
            "Full name",
            form::Form::new("Full name", &name, |value| {
                ViewMessage::FieldEdited(Field::Name, value)
            }),
        ))
        .push(labeled(
            "Phone number",
            form::Form::new_trimmed("08xxxxxxxxxx", &phone, |value| {
                ViewMessage::FieldEdited(Field::Phone, value)
            }),
        ))
        .push(labeled(
            "Date of birth",
            form::Form::new_trimmed("YYYY-MM-DD", &birthday, |value| {
                ViewMessage::FieldEdited(Field::Birthday, value)
            })
            .warning("Use the YYYY-MM-DD format"),
        ))
        .push(selector(
            "Gender",
            &catalog::GENDERS,
            &state.form_data.gender,
            Field::Gender,
            flagged && state.form_data.gender.is_empty(),
        ))
        .push(selector(
            "Region of residence",
            &catalog::REGIONS,
            &state.form_data.domisili_id,
            Field::DomisiliId,
            flagged && state.form_data.domisili_id.is_empty(),
        ))
        .push_maybe(other_field(
            &state.form_data.domisili_id,
            "Name your region",
            &state.form_data.domisili_name,
            Field::DomisiliName,
        ))
}

fn affiliation<'a>(state: &'a FormState, flagged: bool) -> Column<'a, ViewMessage> {
    let linkedin = form::Value {
        value: state.form_data.linkedin.clone(),
        valid: true,
    };
    let instagram = form::Value {
        value: state.form_data.instagram.clone(),
        valid: true,
    };
    let telegram = form::Value {
        value: state.form_data.telegram.clone(),
        valid: true,
    };

    Column::new()
        .spacing(20)
        .push(selector(
            "Membership status",
            &catalog::STATUSES,
            &state.form_data.status,
            Field::Status,
            flagged && state.form_data.status.is_empty(),
        ))
        .push(selector(
            "Campus",
            &catalog::CAMPUSES,
            &state.form_data.student_campus_id,
            Field::StudentCampusId,
            flagged && state.form_data.student_campus_id.is_empty(),
        ))
        .push_maybe(other_field(
            &state.form_data.student_campus_id,
            "Name your campus",
            &state.form_data.student_campus_name,
            Field::StudentCampusName,
        ))
        .push(selector(
            "Field of study",
            &catalog::MAJORS,
            &state.form_data.major_campus_id,
            Field::MajorCampusId,
            flagged && state.form_data.major_campus_id.is_empty(),
        ))
        .push_maybe(other_field(
            &state.form_data.major_campus_id,
            "Name your field of study",
            &state.form_data.major_campus_name,
            Field::MajorCampusName,
        ))
        .push(selector(
            "Student chapter (optional)",
            &catalog::CHAPTERS,
            &state.form_data.student_chapter_id,
            Field::StudentChapterId,
            false,
        ))
        .push(selector(
            "Alumni program (optional)",
            &catalog::ALUMNI_PROGRAMS,
            &state.form_data.program_alumni_id,
            Field::ProgramAlumniId,
            false,
        ))
        .push(p1_bold("Social media (optional)"))
        .push(
            form::Form::new_trimmed("LinkedIn profile", &linkedin, |value| {
                ViewMessage::FieldEdited(Field::Linkedin, value)
            })
            .size(text::P1_SIZE)
            .padding(10),
        )
        .push(
            form::Form::new_trimmed("Instagram handle", &instagram, |value| {
                ViewMessage::FieldEdited(Field::Instagram, value)
            })
            .size(text::P1_SIZE)
            .padding(10),
        )
        .push(
            form::Form::new_trimmed("Telegram handle", &telegram, |value| {
                ViewMessage::FieldEdited(Field::Telegram, value)
            })
            .size(text::P1_SIZE)
            .padding(10),
        )
}

fn confirm<'a>(state: &'a FormState) -> Column<'a, ViewMessage> {
    let summary = Column::new()
        .spacing(10)
        .push(summary_row("Email", state.form_data.email.clone()))
        .push(summary_row("Name", state.form_data.name.clone()))
        .push(summary_row("Phone", state.form_data.phone.clone()))
        .push(summary_row("Birthday", state.form_data.birthday.clone()))
        .push(summary_row(
            "Gender",
            catalog_label(&catalog::GENDERS, &state.form_data.gender, ""),
        ))
        .push(summary_row(
            "Region",
            catalog_label(
                &catalog::REGIONS,
                &state.form_data.domisili_id,
                &state.form_data.domisili_name,
            ),
        ))
        .push(summary_row(
            "Status",
            catalog_label(&catalog::STATUSES, &state.form_data.status, ""),
        ))
        .push(summary_row(
            "Campus",
            catalog_label(
                &catalog::CAMPUSES,
                &state.form_data.student_campus_id,
                &state.form_data.student_campus_name,
            ),
        ))
        .push(summary_row(
            "Field of study",
            catalog_label(
                &catalog::MAJORS,
                &state.form_data.major_campus_id,
                &state.form_data.major_campus_name,
            ),
        ));

    Column::new()
        .spacing(20)
        .push(p1_regular(
            "Check the details below, then accept the terms to create your account.",
        ))
        .push(card::simple(summary))
        .push(
            checkbox(
                "I agree to the Digistar Club terms of service and privacy policy",
                state.form_data.terms,
            )
            .on_toggle(ViewMessage::TermsToggled),
        )
}

fn labeled<'a>(label: &'static str, input: form::Form<'a, ViewMessage>) -> Column<'a, ViewMessage> {
    Column::new()
        .spacing(5)
        .push(p1_bold(label))
        .push(input.size(text::P1_SIZE).padding(10))
}

fn selector<'a>(
    label: &'static str,
    entries: &'static [CatalogEntry],
    selected: &str,
    field: Field,
    invalid: bool,
) -> Column<'a, ViewMessage> {
    let mut input = pick_list(entries, catalog::find(entries, selected), move |entry| {
        ViewMessage::FieldEdited(field, entry.id.to_string())
    })
    .placeholder("Select...")
    .width(Length::Fill)
    .padding(10);
    if invalid {
        input = input.style(theme::pick_list::invalid);
    }
    Column::new().spacing(5).push(p1_bold(label)).push(input)
}

fn other_field<'a>(
    selected: &str,
    placeholder: &'static str,
    value: &str,
    field: Field,
) -> Option<Column<'a, ViewMessage>> {
    if selected != catalog::OTHER_ID {
        return None;
    }
    let value = form::Value {
        value: value.to_string(),
        valid: true,
    };
    Some(labeled(
        placeholder,
        form::Form::new(placeholder, &value, move |value| {
            ViewMessage::FieldEdited(field, value)
        }),
    ))
}

fn summary_row<'a>(label: &'static str, value: String) -> Row<'a, ViewMessage> {
    Row::new()
        .spacing(10)
        .push(
            p2_regular(label)
                .style(theme::text::secondary)
                .width(Length::Fixed(150.0)),
        )
        .push(p2_regular(value))
}

fn catalog_label(entries: &'static [CatalogEntry], id: &str, other_name: &str) -> String {
    if id == catalog::OTHER_ID {
        other_name.to_string()
    } else {
        catalog::find(entries, id)
            .map(|entry| entry.label.to_string())
            .unwrap_or_default()
    }
}

fn layout<'a>(
    current: Step,
    warning: Option<&'a PortalError>,
    step_error: Option<&'a str>,
    in_flight: &'a InFlight,
    content: Column<'a, ViewMessage>,
) -> Element<'a, ViewMessage> {
    let previous_message = if current.previous().is_some() {
        ViewMessage::Previous
    } else {
        ViewMessage::BackToLauncher
    };
    let next_button = if current == Step::LAST {
        button::primary(None, "Create my account")
            .width(Length::Fixed(240.0))
            .on_press_maybe(if in_flight.submit {
                None
            } else {
                Some(ViewMessage::Submit)
            })
    } else {
        button::primary(None, "Next")
            .width(Length::Fixed(200.0))
            .on_press(ViewMessage::Next)
    };

    Container::new(scrollable(
        Column::new()
            .width(Length::Fill)
            .push(Space::with_height(Length::Fixed(50.0)))
            .push(
                Row::new()
                    .align_y(Alignment::Center)
                    .push(
                        Container::new(
                            button::transparent(None, "Previous").on_press(previous_message),
                        )
                        .center_x(Length::FillPortion(2)),
                    )
                    .push(Container::new(h3(current.title())).width(Length::FillPortion(8)))
                    .push(
                        Container::new(text(format!("{} | {}", current.index(), Step::COUNT)))
                            .center_x(Length::FillPortion(2)),
                    ),
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
                                .push_maybe(
                                    step_error
                                        .map(|e| card::invalid(text(e).style(theme::text::error))),
                                )
                                .push(next_button)
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

fn success<'a>() -> Element<'a, ViewMessage> {
    Container::new(
        card::simple(
            Column::new()
                .spacing(30)
                .align_x(Alignment::Center)
                .push(h2("Welcome to Digistar Club!"))
                .push(p1_regular(
                    "Your account was created. You can now sign in to the member portal \
                     with your email address and password.",
                ))
                .push(
                    button::primary(None, "Back to home")
                        .width(Length::Fixed(200.0))
                        .on_press(ViewMessage::BackToLauncher),
                ),
        )
        .padding(50)
        .max_width(600),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .height(Length::Fill)
    .width(Length::Fill)
    .style(theme::container::background)
    .into()
}
