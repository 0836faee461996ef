use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::audit::entity_type::{AuditAction, AuditEntityType};
use crate::models::identifiable::Identifiable;
use crate::utils::hash_as_i64;

/// # Documentation
/// - One audit trail row per mutating operation (issue, sign, void, catalog
///   edit, adjustment).
/// - Appended fire-and-forget after the primary mutation commits; an append
///   failure never rolls back the operation it describes.
/// - `details_hash` is an XxHash64 over the CBOR encoding of `details`,
///   giving cheap tamper evidence on the stored payload.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditTrailModel {
    pub id: Uuid,
    pub occurred_at: DateTime<Utc>,

    /// Person the session layer attributed the operation to.
    pub actor_person_id: Uuid,

    pub action: AuditAction,
    pub entity_type: AuditEntityType,
    pub entity_id: Uuid,

    /// Structured operation details, schema-free by design.
    pub details: serde_json::Value,

    pub details_hash: i64,
}

impl AuditTrailModel {
    /// Build a trail row for an operation that just happened.
    pub fn record(
        actor_person_id: Uuid,
        action: AuditAction,
        entity_type: AuditEntityType,
        entity_id: Uuid,
        details: serde_json::Value,
    ) -> Self {
        let details_hash = hash_as_i64(&details).unwrap_or_default();
        Self {
            id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            actor_person_id,
            action,
            entity_type,
            entity_id,
            details,
            details_hash,
        }
    }
}

impl Identifiable for AuditTrailModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
