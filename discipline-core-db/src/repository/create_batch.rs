use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple entities in a batch.
///
/// All creates are performed within a single transaction for atomicity.
/// Returns the saved items with any generated fields populated.
#[async_trait]
pub trait CreateBatch: Send + Sync {
    type Model: Identifiable;

    /// Save multiple items in a single transaction
    ///
    /// # Arguments
    /// * `items` - A vector of entities to create
    async fn create_batch(
        &self,
        items: Vec<Self::Model>,
    ) -> Result<Vec<Self::Model>, Box<dyn std::error::Error + Send + Sync>>;
}
