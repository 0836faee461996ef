use std::error::Error;

use uuid::Uuid;

use discipline_core_db::models::discipline::ActionSignatureModel;

use crate::utils::TryFromRow;

use super::repo_impl::{ActionSignatureRepositoryImpl, COLUMNS};

impl ActionSignatureRepositoryImpl {
    pub(super) async fn find_by_action_impl(
        repo: &ActionSignatureRepositoryImpl,
        action_id: Uuid,
    ) -> Result<Vec<ActionSignatureModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM corrective_action_signature \
             WHERE corrective_action_id = $1 ORDER BY signed_at"
        ))
        .bind(action_id)
        .fetch_all(&*repo.pool)
        .await?;

        rows.iter().map(ActionSignatureModel::try_from_row).collect()
    }
}
