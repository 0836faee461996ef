use std::error::Error;

use uuid::Uuid;

use discipline_core_db::models::audit::AuditTrailModel;

use super::repo_impl::AuditTrailRepositoryImpl;

impl AuditTrailRepositoryImpl {
    pub(super) async fn find_by_entity_impl(
        repo: &AuditTrailRepositoryImpl,
        entity_id: Uuid,
    ) -> Result<Vec<AuditTrailModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, AuditTrailModel>(
            r#"
            SELECT id, occurred_at, actor_person_id, action, entity_type,
                   entity_id, details, details_hash
            FROM audit_trail
            WHERE entity_id = $1
            ORDER BY occurred_at
            "#,
        )
        .bind(entity_id)
        .fetch_all(&*repo.pool)
        .await?;

        Ok(rows)
    }
}
