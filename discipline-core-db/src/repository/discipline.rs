use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use discipline_core_api::domain::SignerRole;

use crate::models::discipline::{
    ActionSignatureModel, CorrectiveActionModel, PointAdjustmentModel,
};
use crate::repository::{CreateBatch, Load};

/// Store operations for the corrective-action ledger.
#[async_trait]
pub trait CorrectiveActionRepository:
    Load<Model = CorrectiveActionModel> + CreateBatch<Model = CorrectiveActionModel>
{
    /// Every action ever issued against an employee, voided ones included,
    /// newest violation first.
    async fn find_by_employee(
        &self,
        employee_id: Uuid,
    ) -> Result<Vec<CorrectiveActionModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Non-voided actions whose violation date falls on or after
    /// `window_start`: the rows that count toward the rolling point sum.
    async fn find_countable_since(
        &self,
        employee_id: Uuid,
        window_start: DateTime<Utc>,
    ) -> Result<Vec<CorrectiveActionModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Number of actions referencing a violation category, voided included.
    async fn count_by_category(
        &self,
        category_id: Uuid,
    ) -> Result<i64, Box<dyn std::error::Error + Send + Sync>>;

    /// Set or clear the administrative point override, re-checking at write
    /// time that the action is not voided.
    async fn set_adjusted_points(
        &self,
        action_id: Uuid,
        adjusted_points: Option<i32>,
    ) -> Result<CorrectiveActionModel, Box<dyn std::error::Error + Send + Sync>>;

    /// Void an action, re-checking status at write time.
    ///
    /// The guard makes concurrent void/void and sign/void races lose
    /// cleanly: whichever transaction commits first wins and the loser gets
    /// a typed `InvalidState` (or `NotFound`) inside the boxed error.
    async fn void(
        &self,
        action_id: Uuid,
        reason: &str,
        voided_by: Uuid,
        voided_at: DateTime<Utc>,
    ) -> Result<CorrectiveActionModel, Box<dyn std::error::Error + Send + Sync>>;
}

/// Store operations for corrective-action signatures.
#[async_trait]
pub trait ActionSignatureRepository: Send + Sync {
    /// Persist a signature and, for employee signatures, the parent action's
    /// status/comments update, both in one transaction.
    ///
    /// A (action, role, signer) collision surfaces as a typed
    /// `DuplicateSignature` inside the boxed error, whether it is caught by
    /// the pre-check or by the unique index at commit time.
    async fn record(
        &self,
        signature: ActionSignatureModel,
        parent_update: Option<CorrectiveActionModel>,
    ) -> Result<ActionSignatureModel, Box<dyn std::error::Error + Send + Sync>>;

    /// All signatures on an action, oldest first.
    async fn find_by_action(
        &self,
        action_id: Uuid,
    ) -> Result<Vec<ActionSignatureModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Whether this person has already signed this action in this role.
    async fn exists(
        &self,
        action_id: Uuid,
        signer_role: SignerRole,
        signer_person_id: Uuid,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}

/// Store operations for administrative point adjustments.
#[async_trait]
pub trait PointAdjustmentRepository: CreateBatch<Model = PointAdjustmentModel> {
    /// Adjustments effective inside a window, oldest first.
    async fn find_effective_between(
        &self,
        employee_id: Uuid,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<PointAdjustmentModel>, Box<dyn std::error::Error + Send + Sync>>;
}
