use async_trait::async_trait;

use crate::models::catalog::ViolationCategoryModel;
use crate::repository::{CreateBatch, DeleteBatch, Load, LoadBatch, UpdateBatch};

/// Store operations for the violation catalog.
///
/// Hard deletion is only legal for unreferenced categories; the service layer
/// decides between `delete_batch` and an `is_active = false` update.
#[async_trait]
pub trait ViolationCategoryRepository:
    Load<Model = ViolationCategoryModel>
    + LoadBatch<Model = ViolationCategoryModel>
    + CreateBatch<Model = ViolationCategoryModel>
    + UpdateBatch<Model = ViolationCategoryModel>
    + DeleteBatch
{
    /// All categories with `is_active = true`, ordered by
    /// (severity, display_order, name).
    async fn find_active(
        &self,
    ) -> Result<Vec<ViolationCategoryModel>, Box<dyn std::error::Error + Send + Sync>>;
}
