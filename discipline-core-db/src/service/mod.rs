pub mod catalog;
pub mod convert;
pub mod ledger;
pub mod points;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::*;
pub use ledger::*;
pub use points::*;

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::models::audit::AuditTrailModel;
use crate::models::catalog::ViolationCategoryModel;
use crate::repository::AuditTrailRepository;

/// Read-through cache for violation categories.
///
/// Categories are reference data: read on every issuance, edited rarely.
/// One cache instance is shared by the catalog and ledger services so catalog
/// edits invalidate what issuance reads.
pub type CategoryCache = moka::future::Cache<Uuid, ViolationCategoryModel>;

pub fn category_cache() -> CategoryCache {
    moka::future::Cache::builder()
        .max_capacity(256)
        .time_to_live(Duration::from_secs(300))
        .build()
}

/// Append an audit trail row, best effort.
///
/// The sink is a side channel: a failed append is logged and swallowed so it
/// never rolls back or fails the mutation it describes.
pub(crate) async fn append_audit(sink: &Arc<dyn AuditTrailRepository>, entry: AuditTrailModel) {
    let entity_id = entry.entity_id;
    if let Err(err) = sink.append(entry).await {
        tracing::warn!(%entity_id, error = %err, "audit trail append failed");
    }
}
