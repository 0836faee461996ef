pub mod requests;
pub mod views;

pub use requests::*;
pub use views::*;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::CallerContext;
use crate::error::DomainResult;

/// Violation catalog maintenance and lookup.
#[async_trait]
pub trait ViolationCatalog: Send + Sync {
    /// All active categories, grouped by severity, each group ordered by
    /// (display_order, name).
    async fn list_active(&self) -> DomainResult<Vec<SeverityGroup>>;

    async fn create(
        &self,
        ctx: &CallerContext,
        request: CreateCategoryRequest,
    ) -> DomainResult<CategoryView>;

    async fn update(
        &self,
        ctx: &CallerContext,
        category_id: Uuid,
        request: UpdateCategoryRequest,
    ) -> DomainResult<CategoryView>;

    /// Removes a category. A category referenced by any corrective action is
    /// deactivated instead; the response does not distinguish the two.
    async fn delete(&self, ctx: &CallerContext, category_id: Uuid) -> DomainResult<()>;
}

/// The corrective-action ledger: issuance, sign-off, voiding, history.
#[async_trait]
pub trait CorrectiveActionLedger: Send + Sync {
    /// Record a violation against an employee. Open to any authenticated
    /// caller.
    async fn issue(
        &self,
        ctx: &CallerContext,
        request: IssueActionRequest,
    ) -> DomainResult<ActionView>;

    /// Record one party's signature. An employee signature moves the action
    /// to Acknowledged or Disputed and attaches their comments.
    async fn sign(
        &self,
        ctx: &CallerContext,
        request: SignActionRequest,
    ) -> DomainResult<SignatureView>;

    /// Void an action with a mandatory reason. Terminal; the record stays
    /// queryable but stops counting toward points.
    async fn void(
        &self,
        ctx: &CallerContext,
        action_id: Uuid,
        request: VoidActionRequest,
    ) -> DomainResult<ActionView>;

    /// Set or clear the administrative point override on a live action. The
    /// override replaces the assigned points in every aggregation.
    async fn adjust_points(
        &self,
        ctx: &CallerContext,
        action_id: Uuid,
        adjusted_points: Option<i32>,
    ) -> DomainResult<ActionView>;

    /// Per-role sign-off checklist for an action.
    async fn signature_status(&self, action_id: Uuid) -> DomainResult<Vec<RoleSignatureStatus>>;

    /// Every action ever issued against an employee, voided ones included,
    /// newest violation first.
    async fn history(&self, employee_id: Uuid) -> DomainResult<Vec<ActionView>>;

    /// Record an administrative point adjustment outside the violation flow.
    async fn record_adjustment(
        &self,
        ctx: &CallerContext,
        request: RecordAdjustmentRequest,
    ) -> DomainResult<AdjustmentView>;
}

/// Read-only derivation of an employee's standing.
#[async_trait]
pub trait PointStanding: Send + Sync {
    /// Current standing under the rolling window. `as_of` defaults to the
    /// current instant at the call boundary; passing it explicitly keeps the
    /// derivation deterministic.
    async fn summary(
        &self,
        employee_id: Uuid,
        as_of: Option<DateTime<Utc>>,
    ) -> DomainResult<PointsSummary>;
}
