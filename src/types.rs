//! Core types for permitd

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder owner recorded on every permit until real user accounts exist
pub const PLACEHOLDER_USER_ID: &str = "demo_user";

/// Lifecycle stage assigned to every freshly submitted permit
pub const INITIAL_STAGE: &str = "application";

/// Client-supplied fields of a permit submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermitCreate {
    /// Issuing jurisdiction; not checked against any county registry
    pub county_id: i64,
    /// Free-form permit category, e.g. "roofing"
    #[serde(rename = "type")]
    pub permit_type: String,
}

/// Full permit record as stored and returned by the API
///
/// The client-supplied fields are flattened into the record, so the wire
/// shape stays flat: `{id, user_id, county_id, type, status, ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permit {
    pub id: String,
    pub user_id: String,
    #[serde(flatten)]
    pub submission: PermitCreate,
    pub status: String,
    pub current_step: String,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub offline_submission: bool,
}

impl Permit {
    /// Build a freshly submitted permit record from client input.
    ///
    /// The identifier and both timestamps are assigned here, not in the
    /// handler. The clock is read once: `submitted_at` and `updated_at`
    /// start out equal and nothing ever updates them afterwards.
    pub fn submitted(submission: PermitCreate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: PLACEHOLDER_USER_ID.to_string(),
            submission,
            status: INITIAL_STAGE.to_string(),
            current_step: INITIAL_STAGE.to_string(),
            submitted_at: now,
            updated_at: now,
            offline_submission: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roofing() -> PermitCreate {
        PermitCreate {
            county_id: 12,
            permit_type: "roofing".to_string(),
        }
    }

    #[test]
    fn test_submitted_fills_fixed_defaults() {
        let permit = Permit::submitted(roofing());

        assert!(!permit.id.is_empty());
        assert_eq!(permit.user_id, PLACEHOLDER_USER_ID);
        assert_eq!(permit.status, INITIAL_STAGE);
        assert_eq!(permit.current_step, INITIAL_STAGE);
        assert_eq!(permit.submitted_at, permit.updated_at);
        assert!(!permit.offline_submission);
        assert_eq!(permit.submission.county_id, 12);
        assert_eq!(permit.submission.permit_type, "roofing");
    }

    #[test]
    fn test_submitted_generates_distinct_ids() {
        let a = Permit::submitted(roofing());
        let b = Permit::submitted(roofing());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_permit_serializes_flat() {
        let permit = Permit::submitted(roofing());
        let value = serde_json::to_value(&permit).unwrap();

        // Flattened submission fields sit at the top level
        assert_eq!(value["county_id"], 12);
        assert_eq!(value["type"], "roofing");
        assert_eq!(value["status"], "application");
        assert_eq!(value["offline_submission"], false);
        assert!(value.get("submission").is_none());
    }
}
