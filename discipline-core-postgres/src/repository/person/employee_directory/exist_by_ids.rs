use std::collections::HashSet;
use std::error::Error;

use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use discipline_core_db::repository::ExistByIds;

use super::repo_impl::EmployeeDirectoryImpl;

#[async_trait]
impl ExistByIds for EmployeeDirectoryImpl {
    async fn exist_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<(Uuid, bool)>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query("SELECT id FROM employee WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&*self.pool)
            .await?;

        let mut found = HashSet::with_capacity(rows.len());
        for row in &rows {
            found.insert(row.try_get::<Uuid, _>("id")?);
        }
        Ok(ids.iter().map(|id| (*id, found.contains(id))).collect())
    }
}
