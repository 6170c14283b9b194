//! Form payloads and stored records for the intake endpoints.
//!
//! Forms are what the site posts; records are what the stores hand back once
//! an id and timestamp have been assigned. Wire names are camelCase to match
//! the frontend; unknown JSON fields are dropped on deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lead-capture submission, not tied to a specific course.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[serde(default)]
    #[validate(length(min = 2, message = "Full name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "Company/Organization name is required"))]
    pub organization: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "Job title is required"))]
    pub job_title: String,
}

/// Submission tied to a specific course offering.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentForm {
    #[serde(default)]
    #[validate(length(min = 2, message = "Full name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "Company/Organization name is required"))]
    pub organization: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "Job title is required"))]
    pub job_title: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "Course title is required"))]
    pub course_title: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub job_title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub job_title: String,
    pub course_title: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_registration() -> serde_json::Value {
        json!({
            "name": "Jo Lee",
            "email": "jo@x.com",
            "phone": "1234567890",
            "organization": "Acme",
            "jobTitle": "Eng"
        })
    }

    #[test]
    fn test_valid_registration_passes() {
        let form: RegistrationForm = serde_json::from_value(valid_registration()).unwrap();
        assert!(form.validate().is_ok());
        assert_eq!(form.job_title, "Eng");
    }

    #[test]
    fn test_extra_fields_are_dropped() {
        let mut payload = valid_registration();
        payload["role"] = json!("admin");
        let form: RegistrationForm = serde_json::from_value(payload).unwrap();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut payload = valid_registration();
        payload["name"] = json!("J");
        let form: RegistrationForm = serde_json::from_value(payload).unwrap();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut payload = valid_registration();
        payload["email"] = json!("not-an-email");
        let form: RegistrationForm = serde_json::from_value(payload).unwrap();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut payload = valid_registration();
        payload["phone"] = json!("12345");
        let form: RegistrationForm = serde_json::from_value(payload).unwrap();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_missing_field_defaults_to_empty_and_fails() {
        let payload = json!({
            "name": "Jo Lee",
            "email": "jo@x.com",
            "phone": "1234567890",
            "organization": "Acme"
        });
        let form: RegistrationForm = serde_json::from_value(payload).unwrap();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("job_title"));
    }

    #[test]
    fn test_enrollment_requires_course_title() {
        let mut payload = valid_registration();
        payload["courseTitle"] = json!("");
        let form: EnrollmentForm = serde_json::from_value(payload).unwrap();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("course_title"));
    }

    #[test]
    fn test_registration_serializes_camel_case() {
        let record = Registration {
            id: 1,
            name: "Jo Lee".to_string(),
            email: "jo@x.com".to_string(),
            phone: "1234567890".to_string(),
            organization: "Acme".to_string(),
            job_title: "Eng".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["jobTitle"], "Eng");
        assert!(value["createdAt"].is_string());
        assert!(value.get("job_title").is_none());
    }
}
