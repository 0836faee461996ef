use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use discipline_core_api::domain::Severity;

use crate::models::identifiable::Identifiable;

/// Database model for a violation category.
///
/// Reference data: read-only at runtime except through catalog
/// administration. The default point value seeds `assigned_points` on newly
/// issued corrective actions and may be overridden per action.
///
/// A category referenced by any corrective action is only ever deactivated
/// (`is_active = false`), never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationCategoryModel {
    pub id: Uuid,

    pub name: HeaplessString<100>,

    pub severity: Severity,

    /// Non-negative; copied onto actions at issue time.
    pub default_points: i32,

    pub description: Option<HeaplessString<255>>,

    /// Sort order within a severity group.
    pub display_order: i32,

    pub is_active: bool,
}

impl Identifiable for ViolationCategoryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
