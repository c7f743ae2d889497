//! Identity model returned by the session provider

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in principal as reported by the provider.
///
/// The application holds read-only copies of this; the provider remains the
/// source of truth and copies are refreshed only when a screen mounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub id: Uuid,
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

impl SessionIdentity {
    /// Display string for navigation chrome; falls back to the id when the
    /// provider has no email on record.
    pub fn display_label(&self) -> String {
        match &self.email {
            Some(email) => email.clone(),
            None => self.id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_prefers_email() {
        let identity = SessionIdentity {
            id: Uuid::new_v4(),
            email: Some("ops@example.com".into()),
            created_at: None,
            last_sign_in_at: None,
        };
        assert_eq!(identity.display_label(), "ops@example.com");
    }

    #[test]
    fn display_label_falls_back_to_id() {
        let id = Uuid::new_v4();
        let identity = SessionIdentity {
            id,
            email: None,
            created_at: None,
            last_sign_in_at: None,
        };
        assert_eq!(identity.display_label(), id.to_string());
    }

    #[test]
    fn deserializes_provider_user_payload() {
        let raw = r#"{
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "email": "ops@example.com",
            "created_at": "2026-01-12T09:30:00Z"
        }"#;
        let identity: SessionIdentity =
            serde_json::from_str(raw).expect("payload should deserialize");
        assert_eq!(identity.email.as_deref(), Some("ops@example.com"));
        assert!(identity.last_sign_in_at.is_none());
    }
}
