use std::error::Error;

use uuid::Uuid;

use discipline_core_api::domain::CorrectiveActionStatus;
use discipline_core_api::error::DomainError;
use discipline_core_db::models::discipline::CorrectiveActionModel;
use discipline_core_db::repository::Load;

use crate::utils::TryFromRow;

use super::repo_impl::{CorrectiveActionRepositoryImpl, COLUMNS};

impl CorrectiveActionRepositoryImpl {
    pub(super) async fn set_adjusted_points_impl(
        repo: &CorrectiveActionRepositoryImpl,
        action_id: Uuid,
        adjusted_points: Option<i32>,
    ) -> Result<CorrectiveActionModel, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(&format!(
            "UPDATE corrective_action SET adjusted_points = $2 \
             WHERE id = $1 AND status <> $3 \
             RETURNING {COLUMNS}"
        ))
        .bind(action_id)
        .bind(adjusted_points)
        .bind(CorrectiveActionStatus::Voided)
        .fetch_optional(&*repo.pool)
        .await?;

        match row {
            Some(row) => CorrectiveActionModel::try_from_row(&row),
            None => match repo.load(action_id).await? {
                Some(_) => Err(Box::new(DomainError::InvalidState(format!(
                    "corrective action {action_id} is voided"
                )))),
                None => Err(Box::new(DomainError::NotFound(format!(
                    "corrective action {action_id}"
                )))),
            },
        }
    }
}
