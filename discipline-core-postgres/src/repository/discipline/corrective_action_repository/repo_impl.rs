use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use discipline_core_db::models::discipline::CorrectiveActionModel;
use discipline_core_db::repository::{CorrectiveActionRepository, Load};

use crate::utils::{get_optional_heapless_string, TryFromRow};

pub(super) const COLUMNS: &str = "id, employee_id, category_id, violation_date, \
     assigned_points, adjusted_points, status, issued_by, issued_at, \
     employee_comments, void_reason, voided_by, voided_at";

pub struct CorrectiveActionRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl CorrectiveActionRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for CorrectiveActionModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CorrectiveActionModel {
            id: row.try_get("id")?,
            employee_id: row.try_get("employee_id")?,
            category_id: row.try_get("category_id")?,
            violation_date: row.try_get("violation_date")?,
            assigned_points: row.try_get("assigned_points")?,
            adjusted_points: row.try_get("adjusted_points")?,
            status: row.try_get("status")?,
            issued_by: row.try_get("issued_by")?,
            issued_at: row.try_get("issued_at")?,
            employee_comments: get_optional_heapless_string(row, "employee_comments")?,
            void_reason: get_optional_heapless_string(row, "void_reason")?,
            voided_by: row.try_get("voided_by")?,
            voided_at: row.try_get("voided_at")?,
        })
    }
}

#[async_trait]
impl Load for CorrectiveActionRepositoryImpl {
    type Model = CorrectiveActionModel;

    async fn load(
        &self,
        id: Uuid,
    ) -> Result<Option<CorrectiveActionModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM corrective_action WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        row.as_ref().map(CorrectiveActionModel::try_from_row).transpose()
    }
}

#[async_trait]
impl CorrectiveActionRepository for CorrectiveActionRepositoryImpl {
    async fn find_by_employee(
        &self,
        employee_id: Uuid,
    ) -> Result<Vec<CorrectiveActionModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_employee_impl(self, employee_id).await
    }

    async fn find_countable_since(
        &self,
        employee_id: Uuid,
        window_start: DateTime<Utc>,
    ) -> Result<Vec<CorrectiveActionModel>, Box<dyn Error + Send + Sync>> {
        Self::find_countable_since_impl(self, employee_id, window_start).await
    }

    async fn count_by_category(
        &self,
        category_id: Uuid,
    ) -> Result<i64, Box<dyn Error + Send + Sync>> {
        Self::count_by_category_impl(self, category_id).await
    }

    async fn set_adjusted_points(
        &self,
        action_id: Uuid,
        adjusted_points: Option<i32>,
    ) -> Result<CorrectiveActionModel, Box<dyn Error + Send + Sync>> {
        Self::set_adjusted_points_impl(self, action_id, adjusted_points).await
    }

    async fn void(
        &self,
        action_id: Uuid,
        reason: &str,
        voided_by: Uuid,
        voided_at: DateTime<Utc>,
    ) -> Result<CorrectiveActionModel, Box<dyn Error + Send + Sync>> {
        Self::void_impl(self, action_id, reason, voided_by, voided_at).await
    }
}
