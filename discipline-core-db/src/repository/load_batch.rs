use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading multiple entities by their IDs.
///
/// Results come back in the same order as the provided IDs; missing entities
/// are `None` at their position.
#[async_trait]
pub trait LoadBatch: Send + Sync {
    type Model: Identifiable;

    /// Load multiple entities by their unique identifiers
    ///
    /// # Arguments
    /// * `ids` - A slice of UUIDs of the entities to load
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<Self::Model>>, Box<dyn std::error::Error + Send + Sync>>;
}
