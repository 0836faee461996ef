use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use discipline_core_api::domain::{
    ensure_signature_image, ActionEvent, CallerContext, CorrectiveActionStatus, Permission,
    SignerRole,
};
use discipline_core_api::error::{DomainError, DomainResult};
use discipline_core_api::service::{
    validated, ActionView, AdjustmentView, CorrectiveActionLedger, IssueActionRequest,
    RecordAdjustmentRequest, RoleSignatureStatus, SignActionRequest, SignatureView,
    VoidActionRequest,
};

use crate::models::audit::{AuditAction, AuditEntityType, AuditTrailModel};
use crate::models::catalog::ViolationCategoryModel;
use crate::models::discipline::{
    ActionSignatureModel, CorrectiveActionModel, PointAdjustmentModel,
};
use crate::repository::{
    ActionSignatureRepository, AuditTrailRepository, CorrectiveActionRepository,
    EmployeeDirectory, PointAdjustmentRepository, ViolationCategoryRepository,
};
use crate::service::{append_audit, CategoryCache};
use crate::utils::{bounded, bounded_opt};

/// The corrective-action ledger: issuance, sign-off collection, voiding.
pub struct LedgerService {
    actions: Arc<dyn CorrectiveActionRepository>,
    signatures: Arc<dyn ActionSignatureRepository>,
    adjustments: Arc<dyn PointAdjustmentRepository>,
    categories: Arc<dyn ViolationCategoryRepository>,
    employees: Arc<dyn EmployeeDirectory>,
    audit: Arc<dyn AuditTrailRepository>,
    cache: CategoryCache,
}

impl LedgerService {
    pub fn new(
        actions: Arc<dyn CorrectiveActionRepository>,
        signatures: Arc<dyn ActionSignatureRepository>,
        adjustments: Arc<dyn PointAdjustmentRepository>,
        categories: Arc<dyn ViolationCategoryRepository>,
        employees: Arc<dyn EmployeeDirectory>,
        audit: Arc<dyn AuditTrailRepository>,
        cache: CategoryCache,
    ) -> Self {
        Self {
            actions,
            signatures,
            adjustments,
            categories,
            employees,
            audit,
            cache,
        }
    }

    async fn category(&self, category_id: Uuid) -> DomainResult<ViolationCategoryModel> {
        if let Some(hit) = self.cache.get(&category_id).await {
            return Ok(hit);
        }
        let model = self
            .categories
            .load(category_id)
            .await
            .map_err(DomainError::from_store)?
            .ok_or_else(|| DomainError::NotFound(format!("violation category {category_id}")))?;
        self.cache.insert(category_id, model.clone()).await;
        Ok(model)
    }

    async fn require_employee(&self, employee_id: Uuid) -> DomainResult<()> {
        let found = self
            .employees
            .exists(employee_id)
            .await
            .map_err(DomainError::from_store)?;
        if found {
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("employee {employee_id}")))
        }
    }

    async fn load_action(&self, action_id: Uuid) -> DomainResult<CorrectiveActionModel> {
        self.actions
            .load(action_id)
            .await
            .map_err(DomainError::from_store)?
            .ok_or_else(|| DomainError::NotFound(format!("corrective action {action_id}")))
    }
}

#[async_trait]
impl CorrectiveActionLedger for LedgerService {
    async fn issue(
        &self,
        ctx: &CallerContext,
        request: IssueActionRequest,
    ) -> DomainResult<ActionView> {
        // Deliberately no capability check: any authenticated caller may
        // record a violation.
        validated(&request)?;
        self.require_employee(request.employee_id).await?;

        let category = self.category(request.category_id).await?;
        if !category.is_active {
            return Err(DomainError::NotFound(format!(
                "violation category {} is inactive",
                category.id
            )));
        }

        let model = CorrectiveActionModel {
            id: Uuid::new_v4(),
            employee_id: request.employee_id,
            category_id: category.id,
            violation_date: request.violation_date,
            assigned_points: request.points.unwrap_or(category.default_points),
            adjusted_points: None,
            status: CorrectiveActionStatus::PendingSignature,
            issued_by: ctx.person_id,
            issued_at: Utc::now(),
            employee_comments: None,
            void_reason: None,
            voided_by: None,
            voided_at: None,
        };

        let mut saved = self
            .actions
            .create_batch(vec![model])
            .await
            .map_err(DomainError::from_store)?;
        let model = saved
            .pop()
            .ok_or_else(|| DomainError::Internal("issue returned no rows".to_string()))?;

        append_audit(
            &self.audit,
            AuditTrailModel::record(
                ctx.person_id,
                AuditAction::Created,
                AuditEntityType::CorrectiveAction,
                model.id,
                serde_json::json!({
                    "employee_id": model.employee_id,
                    "category_id": model.category_id,
                    "assigned_points": model.assigned_points,
                }),
            ),
        )
        .await;
        tracing::info!(
            action_id = %model.id,
            employee_id = %model.employee_id,
            points = model.assigned_points,
            "corrective action issued"
        );

        Ok((&model).into())
    }

    async fn sign(
        &self,
        ctx: &CallerContext,
        request: SignActionRequest,
    ) -> DomainResult<SignatureView> {
        validated(&request)?;
        ensure_signature_image(&request.signature_image)?;

        let action = self.load_action(request.action_id).await?;

        // Only the employee's signature drives a status change; everyone
        // else just needs the action to still be live.
        let parent_update = match request.signer_role {
            SignerRole::Employee => {
                let next = action.status.apply(ActionEvent::EmployeeSigned {
                    acknowledged: request.is_acknowledged(),
                })?;
                let mut updated = action.clone();
                updated.status = next;
                if let Some(comments) = &request.comments {
                    updated.employee_comments = Some(bounded::<500>(comments, "comments")?);
                }
                Some(updated)
            }
            _ => {
                if !action.status.accepts_signatures() {
                    return Err(DomainError::InvalidState(format!(
                        "corrective action {} is voided",
                        action.id
                    )));
                }
                None
            }
        };

        if self
            .signatures
            .exists(request.action_id, request.signer_role, request.signer_person_id)
            .await
            .map_err(DomainError::from_store)?
        {
            return Err(DomainError::DuplicateSignature(format!(
                "{} already signed corrective action {} as {}",
                request.signer_person_id, request.action_id, request.signer_role
            )));
        }

        let signature = ActionSignatureModel {
            id: Uuid::new_v4(),
            corrective_action_id: request.action_id,
            signer_role: request.signer_role,
            signer_person_id: request.signer_person_id,
            signature_image: request.signature_image.clone(),
            source_ip: bounded_opt::<45>(request.source_ip.as_deref(), "source_ip")?,
            device: bounded_opt::<255>(request.device.as_deref(), "device")?,
            signed_at: Utc::now(),
        };

        let saved = self
            .signatures
            .record(signature, parent_update)
            .await
            .map_err(DomainError::from_store)?;

        append_audit(
            &self.audit,
            AuditTrailModel::record(
                ctx.person_id,
                AuditAction::Signed,
                AuditEntityType::CorrectiveActionSignature,
                saved.id,
                serde_json::json!({
                    "action_id": saved.corrective_action_id,
                    "signer_role": saved.signer_role.to_string(),
                    "signer_person_id": saved.signer_person_id,
                }),
            ),
        )
        .await;
        tracing::debug!(
            action_id = %saved.corrective_action_id,
            role = %saved.signer_role,
            "signature recorded"
        );

        Ok((&saved).into())
    }

    async fn void(
        &self,
        ctx: &CallerContext,
        action_id: Uuid,
        request: VoidActionRequest,
    ) -> DomainResult<ActionView> {
        ctx.require(Permission::VoidAction)?;
        validated(&request)?;

        let model = self
            .actions
            .void(action_id, &request.reason, ctx.person_id, Utc::now())
            .await
            .map_err(DomainError::from_store)?;

        append_audit(
            &self.audit,
            AuditTrailModel::record(
                ctx.person_id,
                AuditAction::Voided,
                AuditEntityType::CorrectiveAction,
                action_id,
                serde_json::json!({ "reason": request.reason }),
            ),
        )
        .await;
        tracing::info!(action_id = %action_id, "corrective action voided");

        Ok((&model).into())
    }

    async fn adjust_points(
        &self,
        ctx: &CallerContext,
        action_id: Uuid,
        adjusted_points: Option<i32>,
    ) -> DomainResult<ActionView> {
        ctx.require(Permission::RecordAdjustment)?;
        if let Some(points) = adjusted_points {
            if points < 0 {
                return Err(DomainError::Validation(
                    "adjusted points must be non-negative".to_string(),
                ));
            }
        }

        let model = self
            .actions
            .set_adjusted_points(action_id, adjusted_points)
            .await
            .map_err(DomainError::from_store)?;

        append_audit(
            &self.audit,
            AuditTrailModel::record(
                ctx.person_id,
                AuditAction::Updated,
                AuditEntityType::CorrectiveAction,
                action_id,
                serde_json::json!({ "adjusted_points": adjusted_points }),
            ),
        )
        .await;

        Ok((&model).into())
    }

    async fn signature_status(&self, action_id: Uuid) -> DomainResult<Vec<RoleSignatureStatus>> {
        self.load_action(action_id).await?;
        let signatures = self
            .signatures
            .find_by_action(action_id)
            .await
            .map_err(DomainError::from_store)?;

        Ok(SignerRole::ALL
            .iter()
            .map(|role| {
                let first = signatures
                    .iter()
                    .filter(|s| s.signer_role == *role)
                    .min_by_key(|s| s.signed_at);
                RoleSignatureStatus {
                    role: *role,
                    signed: first.is_some(),
                    signature: first.map(Into::into),
                }
            })
            .collect())
    }

    async fn history(&self, employee_id: Uuid) -> DomainResult<Vec<ActionView>> {
        self.require_employee(employee_id).await?;
        let rows = self
            .actions
            .find_by_employee(employee_id)
            .await
            .map_err(DomainError::from_store)?;
        Ok(rows.iter().map(Into::into).collect())
    }

    async fn record_adjustment(
        &self,
        ctx: &CallerContext,
        request: RecordAdjustmentRequest,
    ) -> DomainResult<AdjustmentView> {
        ctx.require(Permission::RecordAdjustment)?;
        validated(&request)?;
        self.require_employee(request.employee_id).await?;

        let model = PointAdjustmentModel {
            id: Uuid::new_v4(),
            employee_id: request.employee_id,
            delta: request.delta,
            effective_date: request.effective_date,
            approved_by: ctx.person_id,
            note: bounded_opt::<255>(request.note.as_deref(), "note")?,
            recorded_at: Utc::now(),
        };

        let mut saved = self
            .adjustments
            .create_batch(vec![model])
            .await
            .map_err(DomainError::from_store)?;
        let model = saved
            .pop()
            .ok_or_else(|| DomainError::Internal("adjustment returned no rows".to_string()))?;

        append_audit(
            &self.audit,
            AuditTrailModel::record(
                ctx.person_id,
                AuditAction::Created,
                AuditEntityType::PointAdjustment,
                model.id,
                serde_json::json!({
                    "employee_id": model.employee_id,
                    "delta": model.delta,
                }),
            ),
        )
        .await;

        Ok((&model).into())
    }
}
