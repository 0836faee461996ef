use std::error::Error;

use uuid::Uuid;

use discipline_core_db::models::discipline::CorrectiveActionModel;

use crate::utils::TryFromRow;

use super::repo_impl::{CorrectiveActionRepositoryImpl, COLUMNS};

impl CorrectiveActionRepositoryImpl {
    pub(super) async fn find_by_employee_impl(
        repo: &CorrectiveActionRepositoryImpl,
        employee_id: Uuid,
    ) -> Result<Vec<CorrectiveActionModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM corrective_action \
             WHERE employee_id = $1 ORDER BY violation_date DESC"
        ))
        .bind(employee_id)
        .fetch_all(&*repo.pool)
        .await?;

        rows.iter().map(CorrectiveActionModel::try_from_row).collect()
    }
}
