use async_trait::async_trait;
use uuid::Uuid;

use crate::models::person::EmployeeModel;
use crate::repository::{ExistByIds, Load};

/// Narrow view of the externally-owned employee directory.
#[async_trait]
pub trait EmployeeDirectory: ExistByIds + Load<Model = EmployeeModel> {
    /// Whether a single employee exists.
    async fn exists(
        &self,
        employee_id: Uuid,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let checked = self.exist_by_ids(&[employee_id]).await?;
        Ok(checked.first().map(|(_, found)| *found).unwrap_or(false))
    }
}
