use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading a single entity by its ID.
///
/// Missing entities are `None`, not an error; callers decide whether absence
/// is a failure.
#[async_trait]
pub trait Load: Send + Sync {
    type Model: Identifiable;

    /// Load an entity by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(model))` - The entity exists
    /// * `Ok(None)` - No entity with this ID
    /// * `Err` - The query could not be executed
    async fn load(
        &self,
        id: Uuid,
    ) -> Result<Option<Self::Model>, Box<dyn std::error::Error + Send + Sync>>;
}
