use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use discipline_core_db::models::person::EmployeeModel;
use discipline_core_db::repository::{EmployeeDirectory, Load};

use crate::utils::{get_heapless_string, TryFromRow};

pub struct EmployeeDirectoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl EmployeeDirectoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for EmployeeModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(EmployeeModel {
            id: row.try_get("id")?,
            display_name: get_heapless_string(row, "display_name")?,
            is_active: row.try_get("is_active")?,
        })
    }
}

#[async_trait]
impl Load for EmployeeDirectoryImpl {
    type Model = EmployeeModel;

    async fn load(
        &self,
        id: Uuid,
    ) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query("SELECT id, display_name, is_active FROM employee WHERE id = $1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        row.as_ref().map(EmployeeModel::try_from_row).transpose()
    }
}

impl EmployeeDirectory for EmployeeDirectoryImpl {}
