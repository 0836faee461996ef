use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Minimal employee directory row.
///
/// The full HR profile lives outside this core; the ledger and aggregator
/// only need to confirm an employee exists before attributing points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeModel {
    pub id: Uuid,
    pub display_name: HeaplessString<100>,
    pub is_active: bool,
}

impl Identifiable for EmployeeModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
