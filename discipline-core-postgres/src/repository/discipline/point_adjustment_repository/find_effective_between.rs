use std::error::Error;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use discipline_core_db::models::discipline::PointAdjustmentModel;
use discipline_core_db::repository::PointAdjustmentRepository;

use crate::utils::TryFromRow;

use super::repo_impl::{PointAdjustmentRepositoryImpl, COLUMNS};

#[async_trait]
impl PointAdjustmentRepository for PointAdjustmentRepositoryImpl {
    async fn find_effective_between(
        &self,
        employee_id: Uuid,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<PointAdjustmentModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM point_adjustment \
             WHERE employee_id = $1 AND effective_date >= $2 AND effective_date <= $3 \
             ORDER BY effective_date"
        ))
        .bind(employee_id)
        .bind(from)
        .bind(until)
        .fetch_all(&*self.pool)
        .await?;

        rows.iter().map(PointAdjustmentModel::try_from_row).collect()
    }
}
