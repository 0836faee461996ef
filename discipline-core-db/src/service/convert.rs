//! Model → view conversions for the narrow service interfaces.

use discipline_core_api::service::{
    ActionView, AdjustmentView, CategoryView, SignatureView,
};

use crate::models::catalog::ViolationCategoryModel;
use crate::models::discipline::{
    ActionSignatureModel, CorrectiveActionModel, PointAdjustmentModel,
};

impl From<&ViolationCategoryModel> for CategoryView {
    fn from(model: &ViolationCategoryModel) -> Self {
        CategoryView {
            id: model.id,
            name: model.name.as_str().to_string(),
            severity: model.severity,
            default_points: model.default_points,
            description: model.description.as_ref().map(|d| d.as_str().to_string()),
            display_order: model.display_order,
            is_active: model.is_active,
        }
    }
}

impl From<&CorrectiveActionModel> for ActionView {
    fn from(model: &CorrectiveActionModel) -> Self {
        ActionView {
            id: model.id,
            employee_id: model.employee_id,
            category_id: model.category_id,
            violation_date: model.violation_date,
            assigned_points: model.assigned_points,
            adjusted_points: model.adjusted_points,
            effective_points: model.effective_points(),
            status: model.status,
            issued_by: model.issued_by,
            issued_at: model.issued_at,
            employee_comments: model
                .employee_comments
                .as_ref()
                .map(|c| c.as_str().to_string()),
            void_reason: model.void_reason.as_ref().map(|r| r.as_str().to_string()),
            voided_by: model.voided_by,
            voided_at: model.voided_at,
        }
    }
}

impl From<&ActionSignatureModel> for SignatureView {
    fn from(model: &ActionSignatureModel) -> Self {
        SignatureView {
            id: model.id,
            corrective_action_id: model.corrective_action_id,
            signer_role: model.signer_role,
            signer_person_id: model.signer_person_id,
            signed_at: model.signed_at,
            source_ip: model.source_ip.as_ref().map(|s| s.as_str().to_string()),
            device: model.device.as_ref().map(|d| d.as_str().to_string()),
        }
    }
}

impl From<&PointAdjustmentModel> for AdjustmentView {
    fn from(model: &PointAdjustmentModel) -> Self {
        AdjustmentView {
            id: model.id,
            employee_id: model.employee_id,
            delta: model.delta,
            effective_date: model.effective_date,
            approved_by: model.approved_by,
            note: model.note.as_ref().map(|n| n.as_str().to_string()),
            recorded_at: model.recorded_at,
        }
    }
}
