use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use discipline_core_db::models::discipline::PointAdjustmentModel;

use crate::utils::{get_optional_heapless_string, TryFromRow};

pub(super) const COLUMNS: &str =
    "id, employee_id, delta, effective_date, approved_by, note, recorded_at";

pub struct PointAdjustmentRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl PointAdjustmentRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for PointAdjustmentModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PointAdjustmentModel {
            id: row.try_get("id")?,
            employee_id: row.try_get("employee_id")?,
            delta: row.try_get("delta")?,
            effective_date: row.try_get("effective_date")?,
            approved_by: row.try_get("approved_by")?,
            note: get_optional_heapless_string(row, "note")?,
            recorded_at: row.try_get("recorded_at")?,
        })
    }
}
