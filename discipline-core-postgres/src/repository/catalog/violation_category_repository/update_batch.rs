use std::error::Error;

use async_trait::async_trait;

use discipline_core_db::models::catalog::ViolationCategoryModel;
use discipline_core_db::repository::UpdateBatch;

use super::repo_impl::ViolationCategoryRepositoryImpl;

#[async_trait]
impl UpdateBatch for ViolationCategoryRepositoryImpl {
    type Model = ViolationCategoryModel;

    async fn update_batch(
        &self,
        items: Vec<ViolationCategoryModel>,
    ) -> Result<Vec<ViolationCategoryModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        for item in &items {
            let result = sqlx::query(
                r#"
                UPDATE violation_category
                SET name = $2, severity = $3, default_points = $4,
                    description = $5, display_order = $6, is_active = $7
                WHERE id = $1
                "#,
            )
            .bind(item.id)
            .bind(item.name.as_str())
            .bind(item.severity)
            .bind(item.default_points)
            .bind(item.description.as_ref().map(|d| d.as_str()))
            .bind(item.display_order)
            .bind(item.is_active)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(format!("no violation category {}", item.id).into());
            }
        }
        tx.commit().await?;

        Ok(items)
    }
}
