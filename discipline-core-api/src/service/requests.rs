use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Severity, SignerRole};
use crate::error::{DomainError, DomainResult};

/// Run `validator` checks and map failures into the domain taxonomy.
pub fn validated<T: Validate>(request: &T) -> DomainResult<()> {
    request
        .validate()
        .map_err(|errors| DomainError::Validation(errors.to_string()))
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub severity: Severity,

    #[validate(range(min = 0))]
    pub default_points: i32,

    #[validate(length(max = 255))]
    pub description: Option<String>,

    pub display_order: Option<i32>,
}

/// Partial update; `None` fields retain their previous values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub severity: Option<Severity>,

    #[validate(range(min = 0))]
    pub default_points: Option<i32>,

    #[validate(length(max = 255))]
    pub description: Option<String>,

    pub display_order: Option<i32>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IssueActionRequest {
    pub employee_id: Uuid,

    pub category_id: Uuid,

    /// Date the infraction occurred, not the filing date.
    pub violation_date: DateTime<Utc>,

    /// Overrides the category's default point value when present.
    #[validate(range(min = 0))]
    pub points: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignActionRequest {
    pub action_id: Uuid,

    pub signer_role: SignerRole,

    pub signer_person_id: Uuid,

    /// Base64 image data URL captured by the signature pad.
    #[validate(length(min = 1))]
    pub signature_image: String,

    /// Employee free-text comments, stored verbatim on the parent action.
    #[validate(length(max = 500))]
    pub comments: Option<String>,

    /// Employee agreement flag; `None` is treated as acknowledged.
    pub acknowledged: Option<bool>,

    #[validate(length(max = 45))]
    pub source_ip: Option<String>,

    #[validate(length(max = 255))]
    pub device: Option<String>,
}

impl SignActionRequest {
    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VoidActionRequest {
    /// Mandatory justification kept on the voided record.
    #[validate(length(min = 10, max = 255))]
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordAdjustmentRequest {
    pub employee_id: Uuid,

    /// Signed point delta; negative deltas grant relief.
    pub delta: i32,

    pub effective_date: DateTime<Utc>,

    #[validate(length(max = 255))]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn void_reason_must_meet_minimum_length() {
        let short = VoidActionRequest {
            reason: "too short".to_string(),
        };
        assert!(matches!(
            validated(&short),
            Err(DomainError::Validation(_))
        ));

        let ok = VoidActionRequest {
            reason: "Filed in error".to_string(),
        };
        assert!(validated(&ok).is_ok());
    }

    #[test]
    fn negative_point_overrides_are_rejected() {
        let request = IssueActionRequest {
            employee_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            violation_date: Utc::now(),
            points: Some(-2),
        };
        assert!(matches!(
            validated(&request),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn acknowledged_defaults_to_true() {
        let request = SignActionRequest {
            action_id: Uuid::new_v4(),
            signer_role: SignerRole::Employee,
            signer_person_id: Uuid::new_v4(),
            signature_image: "data:image/png;base64,AA==".to_string(),
            comments: None,
            acknowledged: None,
            source_ip: None,
            device: None,
        };
        assert!(request.is_acknowledged());
    }
}
