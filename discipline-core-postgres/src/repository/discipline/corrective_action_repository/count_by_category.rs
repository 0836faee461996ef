use std::error::Error;

use uuid::Uuid;

use super::repo_impl::CorrectiveActionRepositoryImpl;

impl CorrectiveActionRepositoryImpl {
    pub(super) async fn count_by_category_impl(
        repo: &CorrectiveActionRepositoryImpl,
        category_id: Uuid,
    ) -> Result<i64, Box<dyn Error + Send + Sync>> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM corrective_action WHERE category_id = $1")
                .bind(category_id)
                .fetch_one(&*repo.pool)
                .await?;
        Ok(count)
    }
}
