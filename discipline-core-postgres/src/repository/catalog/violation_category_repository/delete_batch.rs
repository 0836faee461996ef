use std::error::Error;

use async_trait::async_trait;
use uuid::Uuid;

use discipline_core_db::repository::DeleteBatch;

use super::repo_impl::ViolationCategoryRepositoryImpl;

#[async_trait]
impl DeleteBatch for ViolationCategoryRepositoryImpl {
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query("DELETE FROM violation_category WHERE id = ANY($1)")
            .bind(ids)
            .execute(&*self.pool)
            .await?;

        Ok(result.rows_affected() as usize)
    }
}

#[cfg(test)]
mod tests {
    use discipline_core_db::repository::{CreateBatch, DeleteBatch, Load};
    use serial_test::serial;

    use crate::test_helper::{new_test_category, setup_test_context};

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance"]
    async fn test_delete_category() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.repos.categories;

        let model = new_test_category(4);
        repo.create_batch(vec![model.clone()]).await?;

        let deleted = repo.delete_batch(&[model.id]).await?;
        assert_eq!(deleted, 1);
        assert!(repo.load(model.id).await?.is_none());

        Ok(())
    }
}
