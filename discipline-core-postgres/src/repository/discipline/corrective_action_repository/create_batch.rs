use std::error::Error;

use async_trait::async_trait;

use discipline_core_db::models::discipline::CorrectiveActionModel;
use discipline_core_db::repository::CreateBatch;

use super::repo_impl::CorrectiveActionRepositoryImpl;

#[async_trait]
impl CreateBatch for CorrectiveActionRepositoryImpl {
    type Model = CorrectiveActionModel;

    async fn create_batch(
        &self,
        items: Vec<CorrectiveActionModel>,
    ) -> Result<Vec<CorrectiveActionModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO corrective_action (
                    id, employee_id, category_id, violation_date,
                    assigned_points, adjusted_points, status, issued_by,
                    issued_at, employee_comments, void_reason, voided_by,
                    voided_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                "#,
            )
            .bind(item.id)
            .bind(item.employee_id)
            .bind(item.category_id)
            .bind(item.violation_date)
            .bind(item.assigned_points)
            .bind(item.adjusted_points)
            .bind(item.status)
            .bind(item.issued_by)
            .bind(item.issued_at)
            .bind(item.employee_comments.as_ref().map(|c| c.as_str()))
            .bind(item.void_reason.as_ref().map(|r| r.as_str()))
            .bind(item.voided_by)
            .bind(item.voided_at)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(items)
    }
}
