use async_trait::async_trait;
use uuid::Uuid;

use crate::models::audit::AuditTrailModel;

/// Append-only audit sink.
///
/// Appends are fire-and-forget from the services' perspective: a failure is
/// logged by the caller, never propagated.
#[async_trait]
pub trait AuditTrailRepository: Send + Sync {
    async fn append(
        &self,
        entry: AuditTrailModel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Trail rows for one entity, oldest first.
    async fn find_by_entity(
        &self,
        entity_id: Uuid,
    ) -> Result<Vec<AuditTrailModel>, Box<dyn std::error::Error + Send + Sync>>;
}
