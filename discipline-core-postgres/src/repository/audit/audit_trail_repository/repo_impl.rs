use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use discipline_core_db::models::audit::AuditTrailModel;
use discipline_core_db::repository::AuditTrailRepository;

pub struct AuditTrailRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl AuditTrailRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditTrailRepository for AuditTrailRepositoryImpl {
    async fn append(
        &self,
        entry: AuditTrailModel,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::append_impl(self, entry).await
    }

    async fn find_by_entity(
        &self,
        entity_id: Uuid,
    ) -> Result<Vec<AuditTrailModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_entity_impl(self, entity_id).await
    }
}
