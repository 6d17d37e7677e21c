use serde::{Deserialize, Serialize};

use crate::register::catalog::OTHER_ID;
use crate::register::form::FormData;

/// Which flow an OTP belongs to, `type` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpKind {
    Register,
    ResetPassword,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendOtpRequest<'a> {
    pub email: &'a str,
    #[serde(rename = "type")]
    pub kind: OtpKind,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyOtpRequest<'a, 'b> {
    pub email: &'a str,
    pub token: &'b str,
    #[serde(rename = "type")]
    pub kind: OtpKind,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetPasswordRequest<'a, 'b, 'c> {
    pub email: &'a str,
    pub token: &'b str,
    pub password: &'c str,
}

/// Envelope of the portal responses. Error bodies use the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialMedia {
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub telegram: Option<String>,
}

/// Body of `POST /users/register`.
///
/// The shaping rules follow the portal contract: social handles fold into
/// the nested `social_media` object (absent handles are sent as null),
/// "other" selections send the free-typed `_name` with a null `_id` while
/// catalog selections send only the `_id`, and the optional relational ids
/// disappear from the body entirely when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub birthday: String,
    pub gender: String,
    pub status: String,
    pub domisili_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domisili_name: Option<String>,
    pub student_campus_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_campus_name: Option<String>,
    pub major_campus_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_campus_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_alumni_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_chapter_id: Option<String>,
    pub social_media: SocialMedia,
}

impl RegisterPayload {
    pub fn from_form(data: &FormData, password: &str) -> Self {
        let (domisili_id, domisili_name) = id_or_name(&data.domisili_id, &data.domisili_name);
        let (student_campus_id, student_campus_name) =
            id_or_name(&data.student_campus_id, &data.student_campus_name);
        let (major_campus_id, major_campus_name) =
            id_or_name(&data.major_campus_id, &data.major_campus_name);
        RegisterPayload {
            email: data.email.clone(),
            password: password.to_string(),
            name: data.name.clone(),
            phone: data.phone.clone(),
            birthday: data.birthday.clone(),
            gender: data.gender.clone(),
            status: data.status.clone(),
            domisili_id,
            domisili_name,
            student_campus_id,
            student_campus_name,
            major_campus_id,
            major_campus_name,
            program_alumni_id: non_empty(&data.program_alumni_id),
            student_chapter_id: non_empty(&data.student_chapter_id),
            social_media: SocialMedia {
                instagram: non_empty(&data.instagram),
                linkedin: non_empty(&data.linkedin),
                telegram: non_empty(&data.telegram),
            },
        }
    }
}

fn id_or_name(id: &str, name: &str) -> (Option<String>, Option<String>) {
    if id == OTHER_ID {
        (None, Some(name.to_string()))
    } else {
        (Some(id.to_string()), None)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_form() -> FormData {
        FormData {
            email: "a@b.com".to_string(),
            name: "Tiara Putri".to_string(),
            phone: "081234567890".to_string(),
            birthday: "2001-04-17".to_string(),
            gender: "female".to_string(),
            status: "student".to_string(),
            domisili_id: "31".to_string(),
            student_campus_id: "tel-u".to_string(),
            major_campus_id: "informatics".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn otp_kind_wire_values() {
        assert_eq!(
            serde_json::to_value(SendOtpRequest {
                email: "a@b.com",
                kind: OtpKind::Register,
            })
            .unwrap(),
            json!({"email": "a@b.com", "type": "register"})
        );
        assert_eq!(
            serde_json::to_value(VerifyOtpRequest {
                email: "a@b.com",
                token: "123456",
                kind: OtpKind::ResetPassword,
            })
            .unwrap(),
            json!({"email": "a@b.com", "token": "123456", "type": "reset_password"})
        );
    }

    #[test]
    fn reset_password_body_shape() {
        assert_eq!(
            serde_json::to_value(ResetPasswordRequest {
                email: "a@b.com",
                token: "123456",
                password: "N3w-secret!",
            })
            .unwrap(),
            json!({"email": "a@b.com", "token": "123456", "password": "N3w-secret!"})
        );
    }

    #[test]
    fn other_selection_sends_name_and_null_id() {
        let mut data = filled_form();
        data.domisili_id = OTHER_ID.to_string();
        data.domisili_name = "Jakarta".to_string();

        let value = serde_json::to_value(RegisterPayload::from_form(&data, "secret")).unwrap();
        assert_eq!(value["domisili_name"], json!("Jakarta"));
        assert_eq!(value["domisili_id"], serde_json::Value::Null);
    }

    #[test]
    fn catalog_selection_omits_the_name_key() {
        let data = filled_form();

        let value = serde_json::to_value(RegisterPayload::from_form(&data, "secret")).unwrap();
        assert_eq!(value["domisili_id"], json!("31"));
        assert!(value.as_object().unwrap().get("domisili_name").is_none());
        assert_eq!(value["student_campus_id"], json!("tel-u"));
        assert!(value
            .as_object()
            .unwrap()
            .get("student_campus_name")
            .is_none());
    }

    #[test]
    fn empty_optional_ids_are_absent() {
        let data = filled_form();

        let value = serde_json::to_value(RegisterPayload::from_form(&data, "secret")).unwrap();
        let root = value.as_object().unwrap();
        assert!(root.get("program_alumni_id").is_none());
        assert!(root.get("student_chapter_id").is_none());
    }

    #[test]
    fn present_optional_ids_are_sent() {
        let mut data = filled_form();
        data.program_alumni_id = "batch-3".to_string();

        let value = serde_json::to_value(RegisterPayload::from_form(&data, "secret")).unwrap();
        assert_eq!(value["program_alumni_id"], json!("batch-3"));
        assert!(value.as_object().unwrap().get("student_chapter_id").is_none());
    }

    #[test]
    fn social_handles_nest_with_nulls() {
        let mut data = filled_form();
        data.instagram = "@tiara".to_string();

        let value = serde_json::to_value(RegisterPayload::from_form(&data, "secret")).unwrap();
        assert_eq!(
            value["social_media"],
            json!({"instagram": "@tiara", "linkedin": null, "telegram": null})
        );
    }

    #[test]
    fn no_flat_social_or_terms_keys_at_root() {
        let mut data = filled_form();
        data.instagram = "@tiara".to_string();
        data.linkedin = "in/tiara".to_string();
        data.telegram = "@tiara_tg".to_string();
        data.terms = true;

        let value = serde_json::to_value(RegisterPayload::from_form(&data, "secret")).unwrap();
        let root = value.as_object().unwrap();
        assert!(root.get("instagram").is_none());
        assert!(root.get("linkedin").is_none());
        assert!(root.get("telegram").is_none());
        assert!(root.get("terms").is_none());
    }
}
