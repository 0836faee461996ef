use std::error::Error;

use discipline_core_db::models::audit::AuditTrailModel;

use super::repo_impl::AuditTrailRepositoryImpl;

impl AuditTrailRepositoryImpl {
    pub(super) async fn append_impl(
        repo: &AuditTrailRepositoryImpl,
        entry: AuditTrailModel,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        sqlx::query(
            r#"
            INSERT INTO audit_trail (
                id, occurred_at, actor_person_id, action, entity_type,
                entity_id, details, details_hash
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entry.id)
        .bind(entry.occurred_at)
        .bind(entry.actor_person_id)
        .bind(entry.action)
        .bind(entry.entity_type)
        .bind(entry.entity_id)
        .bind(&entry.details)
        .bind(entry.details_hash)
        .execute(&*repo.pool)
        .await?;

        Ok(())
    }
}
