use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use discipline_core_db::models::catalog::ViolationCategoryModel;
use discipline_core_db::repository::{Load, LoadBatch};

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

const COLUMNS: &str =
    "id, name, severity, default_points, description, display_order, is_active";

pub struct ViolationCategoryRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ViolationCategoryRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub(super) fn select_columns() -> &'static str {
        COLUMNS
    }
}

impl TryFromRow<PgRow> for ViolationCategoryModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ViolationCategoryModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
            severity: row.try_get("severity")?,
            default_points: row.try_get("default_points")?,
            description: get_optional_heapless_string(row, "description")?,
            display_order: row.try_get("display_order")?,
            is_active: row.try_get("is_active")?,
        })
    }
}

#[async_trait]
impl Load for ViolationCategoryRepositoryImpl {
    type Model = ViolationCategoryModel;

    async fn load(
        &self,
        id: Uuid,
    ) -> Result<Option<ViolationCategoryModel>, Box<dyn Error + Send + Sync>> {
        let results = self.load_batch(&[id]).await?;
        Ok(results.into_iter().next().flatten())
    }
}

#[async_trait]
impl LoadBatch for ViolationCategoryRepositoryImpl {
    type Model = ViolationCategoryModel;

    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<ViolationCategoryModel>>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM violation_category WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&*self.pool)
        .await?;

        let mut by_id: HashMap<Uuid, ViolationCategoryModel> =
            HashMap::with_capacity(rows.len());
        for row in &rows {
            let model = ViolationCategoryModel::try_from_row(row)?;
            by_id.insert(model.id, model);
        }
        Ok(ids.iter().map(|id| by_id.remove(id)).collect())
    }
}
