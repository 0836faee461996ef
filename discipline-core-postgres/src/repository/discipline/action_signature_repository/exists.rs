use std::error::Error;

use uuid::Uuid;

use discipline_core_api::domain::SignerRole;

use super::repo_impl::ActionSignatureRepositoryImpl;

impl ActionSignatureRepositoryImpl {
    pub(super) async fn exists_impl(
        repo: &ActionSignatureRepositoryImpl,
        action_id: Uuid,
        signer_role: SignerRole,
        signer_person_id: Uuid,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let found: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM corrective_action_signature
                WHERE corrective_action_id = $1
                  AND signer_role = $2
                  AND signer_person_id = $3
            )
            "#,
        )
        .bind(action_id)
        .bind(signer_role)
        .bind(signer_person_id)
        .fetch_one(&*repo.pool)
        .await?;

        Ok(found)
    }
}
