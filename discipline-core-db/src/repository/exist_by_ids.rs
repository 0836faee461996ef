use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for checking existence of multiple entities.
///
/// Returns a vector of tuples mapping each UUID to whether a row exists.
#[async_trait]
pub trait ExistByIds: Send + Sync {
    /// Check existence of multiple entities by their unique identifiers
    ///
    /// # Arguments
    /// * `ids` - A slice of UUIDs to check
    async fn exist_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<(Uuid, bool)>, Box<dyn std::error::Error + Send + Sync>>;
}
