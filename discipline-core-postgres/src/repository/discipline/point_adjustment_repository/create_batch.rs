use std::error::Error;

use async_trait::async_trait;

use discipline_core_db::models::discipline::PointAdjustmentModel;
use discipline_core_db::repository::CreateBatch;

use super::repo_impl::PointAdjustmentRepositoryImpl;

#[async_trait]
impl CreateBatch for PointAdjustmentRepositoryImpl {
    type Model = PointAdjustmentModel;

    async fn create_batch(
        &self,
        items: Vec<PointAdjustmentModel>,
    ) -> Result<Vec<PointAdjustmentModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO point_adjustment (
                    id, employee_id, delta, effective_date, approved_by,
                    note, recorded_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(item.id)
            .bind(item.employee_id)
            .bind(item.delta)
            .bind(item.effective_date)
            .bind(item.approved_by)
            .bind(item.note.as_ref().map(|n| n.as_str()))
            .bind(item.recorded_at)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(items)
    }
}
