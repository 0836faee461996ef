use std::error::Error;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use discipline_core_api::domain::CorrectiveActionStatus;
use discipline_core_api::error::DomainError;
use discipline_core_db::models::discipline::CorrectiveActionModel;
use discipline_core_db::repository::Load;

use crate::utils::TryFromRow;

use super::repo_impl::{CorrectiveActionRepositoryImpl, COLUMNS};

impl CorrectiveActionRepositoryImpl {
    /// Guarded terminal transition: the status is re-checked inside the
    /// UPDATE, so whichever of two racing voids commits first wins and the
    /// loser sees zero rows.
    pub(super) async fn void_impl(
        repo: &CorrectiveActionRepositoryImpl,
        action_id: Uuid,
        reason: &str,
        voided_by: Uuid,
        voided_at: DateTime<Utc>,
    ) -> Result<CorrectiveActionModel, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(&format!(
            "UPDATE corrective_action \
             SET status = $2, void_reason = $3, voided_by = $4, voided_at = $5 \
             WHERE id = $1 AND status <> $2 \
             RETURNING {COLUMNS}"
        ))
        .bind(action_id)
        .bind(CorrectiveActionStatus::Voided)
        .bind(reason)
        .bind(voided_by)
        .bind(voided_at)
        .fetch_optional(&*repo.pool)
        .await?;

        match row {
            Some(row) => {
                tracing::debug!(action_id = %action_id, "void committed");
                CorrectiveActionModel::try_from_row(&row)
            }
            None => match repo.load(action_id).await? {
                Some(_) => Err(Box::new(DomainError::InvalidState(format!(
                    "corrective action {action_id} is already voided"
                )))),
                None => Err(Box::new(DomainError::NotFound(format!(
                    "corrective action {action_id}"
                )))),
            },
        }
    }
}
