use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for an administrative point adjustment.
///
/// An independent contribution layer next to the corrective-action ledger,
/// kept for corrections outside the normal violation flow. The aggregator
/// reports these alongside the ledger sum without merging them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointAdjustmentModel {
    pub id: Uuid,

    pub employee_id: Uuid,

    /// Signed delta; negative values grant relief.
    pub delta: i32,

    pub effective_date: DateTime<Utc>,

    pub approved_by: Uuid,

    pub note: Option<HeaplessString<255>>,

    pub recorded_at: DateTime<Utc>,
}

impl Identifiable for PointAdjustmentModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
