use std::error::Error;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use discipline_core_api::domain::CorrectiveActionStatus;
use discipline_core_db::models::discipline::CorrectiveActionModel;

use crate::utils::TryFromRow;

use super::repo_impl::{CorrectiveActionRepositoryImpl, COLUMNS};

impl CorrectiveActionRepositoryImpl {
    pub(super) async fn find_countable_since_impl(
        repo: &CorrectiveActionRepositoryImpl,
        employee_id: Uuid,
        window_start: DateTime<Utc>,
    ) -> Result<Vec<CorrectiveActionModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM corrective_action \
             WHERE employee_id = $1 AND violation_date >= $2 AND status <> $3 \
             ORDER BY violation_date"
        ))
        .bind(employee_id)
        .bind(window_start)
        .bind(CorrectiveActionStatus::Voided)
        .fetch_all(&*repo.pool)
        .await?;

        rows.iter().map(CorrectiveActionModel::try_from_row).collect()
    }
}
