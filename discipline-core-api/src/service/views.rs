use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{CorrectiveActionStatus, DisciplineLevel, Severity, SignerRole};

/// Catalog entry as presented to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryView {
    pub id: Uuid,
    pub name: String,
    pub severity: Severity,
    pub default_points: i32,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
}

/// Active categories grouped by severity for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityGroup {
    pub severity: Severity,
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionView {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub category_id: Uuid,
    pub violation_date: DateTime<Utc>,
    pub assigned_points: i32,
    pub adjusted_points: Option<i32>,
    /// The value counted toward standing: the adjusted override when present,
    /// else the assigned points.
    pub effective_points: i32,
    pub status: CorrectiveActionStatus,
    pub issued_by: Uuid,
    pub issued_at: DateTime<Utc>,
    pub employee_comments: Option<String>,
    pub void_reason: Option<String>,
    pub voided_by: Option<Uuid>,
    pub voided_at: Option<DateTime<Utc>>,
}

/// Signature metadata without the image payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureView {
    pub id: Uuid,
    pub corrective_action_id: Uuid,
    pub signer_role: SignerRole,
    pub signer_person_id: Uuid,
    pub signed_at: DateTime<Utc>,
    pub source_ip: Option<String>,
    pub device: Option<String>,
}

/// One row of the sign-off checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSignatureStatus {
    pub role: SignerRole,
    pub signed: bool,
    pub signature: Option<SignatureView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentView {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub delta: i32,
    pub effective_date: DateTime<Utc>,
    pub approved_by: Uuid,
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// A ledger contribution whose points fall out of the window within the
/// warning horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpiringContribution {
    pub action_id: Uuid,
    pub category_id: Uuid,
    pub effective_points: i32,
    pub violation_date: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub days_remaining: i64,
}

/// An employee's current standing under the rolling window.
///
/// `adjustments` and `adjustment_total` are reported alongside the ledger sum
/// and are never folded into `current_points`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsSummary {
    pub employee_id: Uuid,
    pub as_of: DateTime<Utc>,
    pub window_start: DateTime<Utc>,
    pub current_points: i32,
    pub level: DisciplineLevel,
    pub next_threshold: Option<i32>,
    pub points_to_next: Option<i32>,
    pub expiring_soon: Vec<ExpiringContribution>,
    pub adjustments: Vec<AdjustmentView>,
    pub adjustment_total: i32,
}
