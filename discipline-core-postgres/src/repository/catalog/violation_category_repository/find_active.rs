use std::error::Error;

use async_trait::async_trait;

use discipline_core_db::models::catalog::ViolationCategoryModel;
use discipline_core_db::repository::ViolationCategoryRepository;

use crate::utils::TryFromRow;

use super::repo_impl::ViolationCategoryRepositoryImpl;

#[async_trait]
impl ViolationCategoryRepository for ViolationCategoryRepositoryImpl {
    async fn find_active(
        &self,
    ) -> Result<Vec<ViolationCategoryModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM violation_category WHERE is_active ORDER BY severity, display_order, name",
            Self::select_columns()
        ))
        .fetch_all(&*self.pool)
        .await?;

        rows.iter().map(ViolationCategoryModel::try_from_row).collect()
    }
}
