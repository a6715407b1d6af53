//! Student Record Types
//!
//! Wire types for student records. The backend serializes field names in
//! camelCase and may include bookkeeping fields (`userId`, `createdAt`,
//! `updatedAt`) that the client ignores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Server-assigned identifier
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: String,
    /// Optional contact number; empty or absent means "not provided"
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub enrollment_date: DateTime<Utc>,
}

impl Student {
    /// Phone value for display purposes, `None` when missing or blank
    pub fn display_phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.is_empty())
    }
}

/// Payload for creating a new student (no id yet)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub course: String,
    /// Sent as-is; the backend stores blank strings for omitted fields
    pub phone: String,
    pub address: String,
    pub enrollment_date: DateTime<Utc>,
}

/// Payload for updating an existing student
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentUpdate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: String,
    pub phone: String,
    pub address: String,
    pub enrollment_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 7,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "course": "Mathematics",
            "phone": "555-0100",
            "address": "12 Analytical Row",
            "enrollmentDate": "2024-09-01T08:30:00Z",
            "userId": 3,
            "createdAt": "2024-09-01T08:30:00Z"
        }"#
    }

    #[test]
    fn test_student_deserialization() {
        let student: Student = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(student.id, 7);
        assert_eq!(student.name, "Ada Lovelace");
        assert_eq!(student.course, "Mathematics");
        assert_eq!(student.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let json = r#"{
            "id": 1,
            "name": "Blank Fields",
            "email": "b@example.com",
            "course": "History",
            "enrollmentDate": "2024-01-15T00:00:00Z"
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert!(student.phone.is_none());
        assert!(student.address.is_none());
    }

    #[test]
    fn test_display_phone_filters_blank() {
        let mut student: Student = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(student.display_phone(), Some("555-0100"));

        student.phone = Some(String::new());
        assert_eq!(student.display_phone(), None);

        student.phone = None;
        assert_eq!(student.display_phone(), None);
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = StudentDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            course: "Mathematics".to_string(),
            phone: String::new(),
            address: String::new(),
            enrollment_date: Utc::now(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("enrollmentDate").is_some());
        assert!(json.get("enrollment_date").is_none());
    }
}
