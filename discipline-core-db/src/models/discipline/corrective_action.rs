use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use discipline_core_api::domain::{expires_at, CorrectiveActionStatus};

use crate::models::identifiable::Identifiable;

/// # Documentation
/// Database model for a corrective action: one disciplinary record tied to
/// an employee and a violation category.
///
/// Append-mostly: after issuance the only writes are the employee-signature
/// status transition (plus comments) and the terminal void. A voided action
/// stays on file for history but is excluded from every point sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectiveActionModel {
    pub id: Uuid,

    pub employee_id: Uuid,

    pub category_id: Uuid,

    /// Date the infraction occurred, NOT the filing date. Drives the
    /// rolling-window decay.
    pub violation_date: DateTime<Utc>,

    /// Copied from the category's default at issue time unless overridden.
    pub assigned_points: i32,

    /// Administrative override; when present it replaces `assigned_points`
    /// in every aggregation.
    pub adjusted_points: Option<i32>,

    pub status: CorrectiveActionStatus,

    pub issued_by: Uuid,

    pub issued_at: DateTime<Utc>,

    /// Employee free-text, attached verbatim when they sign.
    pub employee_comments: Option<HeaplessString<500>>,

    pub void_reason: Option<HeaplessString<255>>,

    pub voided_by: Option<Uuid>,

    pub voided_at: Option<DateTime<Utc>>,
}

impl CorrectiveActionModel {
    /// The point value counted toward the employee's standing.
    pub fn effective_points(&self) -> i32 {
        self.adjusted_points.unwrap_or(self.assigned_points)
    }

    /// Instant at which this action's points leave the rolling window.
    pub fn expires_at(&self) -> DateTime<Utc> {
        expires_at(self.violation_date)
    }

    pub fn is_voided(&self) -> bool {
        self.status == CorrectiveActionStatus::Voided
    }
}

impl Identifiable for CorrectiveActionModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
