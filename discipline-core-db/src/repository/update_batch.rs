use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating multiple entities in a batch.
///
/// All updates are performed within a single transaction for atomicity.
#[async_trait]
pub trait UpdateBatch: Send + Sync {
    type Model: Identifiable;

    /// Update multiple items in a single transaction
    ///
    /// # Arguments
    /// * `items` - A vector of entities to update; each must already exist
    async fn update_batch(
        &self,
        items: Vec<Self::Model>,
    ) -> Result<Vec<Self::Model>, Box<dyn std::error::Error + Send + Sync>>;
}
