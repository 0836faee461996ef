use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use discipline_core_api::domain::{CallerContext, Permission};
use discipline_core_api::error::{DomainError, DomainResult};
use discipline_core_api::service::{
    validated, CategoryView, CreateCategoryRequest, SeverityGroup, UpdateCategoryRequest,
    ViolationCatalog,
};

use crate::models::audit::{AuditAction, AuditEntityType, AuditTrailModel};
use crate::models::catalog::ViolationCategoryModel;
use crate::repository::{
    AuditTrailRepository, CorrectiveActionRepository, ViolationCategoryRepository,
};
use crate::service::{append_audit, CategoryCache};
use crate::utils::{bounded, bounded_opt};

/// Violation catalog administration and lookup.
pub struct CatalogService {
    categories: Arc<dyn ViolationCategoryRepository>,
    actions: Arc<dyn CorrectiveActionRepository>,
    audit: Arc<dyn AuditTrailRepository>,
    cache: CategoryCache,
}

impl CatalogService {
    pub fn new(
        categories: Arc<dyn ViolationCategoryRepository>,
        actions: Arc<dyn CorrectiveActionRepository>,
        audit: Arc<dyn AuditTrailRepository>,
        cache: CategoryCache,
    ) -> Self {
        Self {
            categories,
            actions,
            audit,
            cache,
        }
    }

    async fn load_required(&self, category_id: Uuid) -> DomainResult<ViolationCategoryModel> {
        self.categories
            .load(category_id)
            .await
            .map_err(DomainError::from_store)?
            .ok_or_else(|| DomainError::NotFound(format!("violation category {category_id}")))
    }
}

#[async_trait]
impl ViolationCatalog for CatalogService {
    async fn list_active(&self) -> DomainResult<Vec<SeverityGroup>> {
        let mut rows = self
            .categories
            .find_active()
            .await
            .map_err(DomainError::from_store)?;
        rows.sort_by(|a, b| {
            a.severity
                .cmp(&b.severity)
                .then(a.display_order.cmp(&b.display_order))
                .then(a.name.as_str().cmp(b.name.as_str()))
        });

        let mut groups: Vec<SeverityGroup> = Vec::new();
        for row in &rows {
            match groups.last_mut() {
                Some(group) if group.severity == row.severity => {
                    group.categories.push(row.into());
                }
                _ => groups.push(SeverityGroup {
                    severity: row.severity,
                    categories: vec![row.into()],
                }),
            }
        }
        Ok(groups)
    }

    async fn create(
        &self,
        ctx: &CallerContext,
        request: CreateCategoryRequest,
    ) -> DomainResult<CategoryView> {
        ctx.require(Permission::EditCatalog)?;
        validated(&request)?;

        let model = ViolationCategoryModel {
            id: Uuid::new_v4(),
            name: bounded::<100>(&request.name, "name")?,
            severity: request.severity,
            default_points: request.default_points,
            description: bounded_opt::<255>(request.description.as_deref(), "description")?,
            display_order: request.display_order.unwrap_or(0),
            is_active: true,
        };

        let mut saved = self
            .categories
            .create_batch(vec![model])
            .await
            .map_err(DomainError::from_store)?;
        let model = saved
            .pop()
            .ok_or_else(|| DomainError::Internal("create returned no rows".to_string()))?;

        self.cache.insert(model.id, model.clone()).await;
        append_audit(
            &self.audit,
            AuditTrailModel::record(
                ctx.person_id,
                AuditAction::Created,
                AuditEntityType::ViolationCategory,
                model.id,
                serde_json::json!({
                    "name": model.name.as_str(),
                    "severity": model.severity.to_string(),
                    "default_points": model.default_points,
                }),
            ),
        )
        .await;
        tracing::info!(category_id = %model.id, "violation category created");

        Ok((&model).into())
    }

    async fn update(
        &self,
        ctx: &CallerContext,
        category_id: Uuid,
        request: UpdateCategoryRequest,
    ) -> DomainResult<CategoryView> {
        ctx.require(Permission::EditCatalog)?;
        validated(&request)?;

        let mut model = self.load_required(category_id).await?;
        if let Some(name) = &request.name {
            model.name = bounded::<100>(name, "name")?;
        }
        if let Some(severity) = request.severity {
            model.severity = severity;
        }
        if let Some(points) = request.default_points {
            model.default_points = points;
        }
        if let Some(description) = &request.description {
            model.description = Some(bounded::<255>(description, "description")?);
        }
        if let Some(order) = request.display_order {
            model.display_order = order;
        }
        if let Some(active) = request.is_active {
            model.is_active = active;
        }

        let mut saved = self
            .categories
            .update_batch(vec![model])
            .await
            .map_err(DomainError::from_store)?;
        let model = saved
            .pop()
            .ok_or_else(|| DomainError::Internal("update returned no rows".to_string()))?;

        self.cache.insert(model.id, model.clone()).await;
        append_audit(
            &self.audit,
            AuditTrailModel::record(
                ctx.person_id,
                AuditAction::Updated,
                AuditEntityType::ViolationCategory,
                model.id,
                serde_json::json!({ "name": model.name.as_str() }),
            ),
        )
        .await;

        Ok((&model).into())
    }

    async fn delete(&self, ctx: &CallerContext, category_id: Uuid) -> DomainResult<()> {
        ctx.require(Permission::EditCatalog)?;

        let model = self.load_required(category_id).await?;
        let references = self
            .actions
            .count_by_category(category_id)
            .await
            .map_err(DomainError::from_store)?;

        if references > 0 {
            // Referenced by the ledger: deactivate instead of removing. The
            // caller cannot tell the two apart from the response.
            let mut model = model;
            model.is_active = false;
            self.categories
                .update_batch(vec![model])
                .await
                .map_err(DomainError::from_store)?;
            append_audit(
                &self.audit,
                AuditTrailModel::record(
                    ctx.person_id,
                    AuditAction::Deactivated,
                    AuditEntityType::ViolationCategory,
                    category_id,
                    serde_json::json!({ "references": references }),
                ),
            )
            .await;
        } else {
            self.categories
                .delete_batch(&[category_id])
                .await
                .map_err(DomainError::from_store)?;
            append_audit(
                &self.audit,
                AuditTrailModel::record(
                    ctx.person_id,
                    AuditAction::Deleted,
                    AuditEntityType::ViolationCategory,
                    category_id,
                    serde_json::json!({}),
                ),
            )
            .await;
        }

        self.cache.invalidate(&category_id).await;
        tracing::info!(category_id = %category_id, "violation category removed");
        Ok(())
    }
}
