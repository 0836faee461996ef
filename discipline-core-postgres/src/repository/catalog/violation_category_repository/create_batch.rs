use std::error::Error;

use async_trait::async_trait;

use discipline_core_db::models::catalog::ViolationCategoryModel;
use discipline_core_db::repository::CreateBatch;

use super::repo_impl::ViolationCategoryRepositoryImpl;

#[async_trait]
impl CreateBatch for ViolationCategoryRepositoryImpl {
    type Model = ViolationCategoryModel;

    async fn create_batch(
        &self,
        items: Vec<ViolationCategoryModel>,
    ) -> Result<Vec<ViolationCategoryModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO violation_category (
                    id, name, severity, default_points, description,
                    display_order, is_active
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7)
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
        }
        tx.commit().await?;

        Ok(items)
    }
}
