//! In-memory repository doubles for service tests.
//!
//! These back the service layer with plain hash maps so the full operation
//! surface runs under `cargo test` with no database. The postgres crate
//! carries the real implementations.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use uuid::Uuid;

use discipline_core_api::domain::{
    CallerContext, CorrectiveActionStatus, Severity, SignerRole, StaffRole,
};
use discipline_core_api::error::DomainError;
use discipline_core_api::service::{IssueActionRequest, SignActionRequest};

use crate::models::audit::AuditTrailModel;
use crate::models::catalog::ViolationCategoryModel;
use crate::models::discipline::{
    ActionSignatureModel, CorrectiveActionModel, PointAdjustmentModel,
};
use crate::models::person::EmployeeModel;
use crate::repository::{
    ActionSignatureRepository, AuditTrailRepository, CorrectiveActionRepository, CreateBatch,
    DeleteBatch, EmployeeDirectory, ExistByIds, Load, LoadBatch, PointAdjustmentRepository,
    UpdateBatch, ViolationCategoryRepository,
};
use crate::service::{category_cache, CatalogService, LedgerService, PointsService};

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

// ---------------------------------------------------------------------------
// Violation categories

#[derive(Default)]
pub(crate) struct InMemoryCategories {
    rows: Mutex<HashMap<Uuid, ViolationCategoryModel>>,
}

impl InMemoryCategories {
    pub fn get(&self, id: Uuid) -> Option<ViolationCategoryModel> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn put(&self, model: ViolationCategoryModel) {
        self.rows.lock().unwrap().insert(model.id, model);
    }
}

#[async_trait]
impl Load for InMemoryCategories {
    type Model = ViolationCategoryModel;

    async fn load(&self, id: Uuid) -> Result<Option<ViolationCategoryModel>, BoxedError> {
        Ok(self.get(id))
    }
}

#[async_trait]
impl LoadBatch for InMemoryCategories {
    type Model = ViolationCategoryModel;

    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<ViolationCategoryModel>>, BoxedError> {
        Ok(ids.iter().map(|id| self.get(*id)).collect())
    }
}

#[async_trait]
impl CreateBatch for InMemoryCategories {
    type Model = ViolationCategoryModel;

    async fn create_batch(
        &self,
        items: Vec<ViolationCategoryModel>,
    ) -> Result<Vec<ViolationCategoryModel>, BoxedError> {
        let mut rows = self.rows.lock().unwrap();
        for item in &items {
            rows.insert(item.id, item.clone());
        }
        Ok(items)
    }
}

#[async_trait]
impl UpdateBatch for InMemoryCategories {
    type Model = ViolationCategoryModel;

    async fn update_batch(
        &self,
        items: Vec<ViolationCategoryModel>,
    ) -> Result<Vec<ViolationCategoryModel>, BoxedError> {
        let mut rows = self.rows.lock().unwrap();
        for item in &items {
            if !rows.contains_key(&item.id) {
                return Err(format!("no violation category {}", item.id).into());
            }
            rows.insert(item.id, item.clone());
        }
        Ok(items)
    }
}

#[async_trait]
impl DeleteBatch for InMemoryCategories {
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, BoxedError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(ids.iter().filter(|id| rows.remove(id).is_some()).count())
    }
}

#[async_trait]
impl ViolationCategoryRepository for InMemoryCategories {
    async fn find_active(&self) -> Result<Vec<ViolationCategoryModel>, BoxedError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.is_active)
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Corrective actions

#[derive(Default)]
pub(crate) struct InMemoryActions {
    rows: Mutex<HashMap<Uuid, CorrectiveActionModel>>,
}

impl InMemoryActions {
    pub fn get(&self, id: Uuid) -> Option<CorrectiveActionModel> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    fn put(&self, model: CorrectiveActionModel) {
        self.rows.lock().unwrap().insert(model.id, model);
    }
}

#[async_trait]
impl Load for InMemoryActions {
    type Model = CorrectiveActionModel;

    async fn load(&self, id: Uuid) -> Result<Option<CorrectiveActionModel>, BoxedError> {
        Ok(self.get(id))
    }
}

#[async_trait]
impl CreateBatch for InMemoryActions {
    type Model = CorrectiveActionModel;

    async fn create_batch(
        &self,
        items: Vec<CorrectiveActionModel>,
    ) -> Result<Vec<CorrectiveActionModel>, BoxedError> {
        for item in &items {
            self.put(item.clone());
        }
        Ok(items)
    }
}

#[async_trait]
impl CorrectiveActionRepository for InMemoryActions {
    async fn find_by_employee(
        &self,
        employee_id: Uuid,
    ) -> Result<Vec<CorrectiveActionModel>, BoxedError> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.violation_date.cmp(&a.violation_date));
        Ok(rows)
    }

    async fn find_countable_since(
        &self,
        employee_id: Uuid,
        window_start: DateTime<Utc>,
    ) -> Result<Vec<CorrectiveActionModel>, BoxedError> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|a| {
                a.employee_id == employee_id
                    && a.status != CorrectiveActionStatus::Voided
                    && a.violation_date >= window_start
            })
            .cloned()
            .collect();
        rows.sort_by_key(|a| a.violation_date);
        Ok(rows)
    }

    async fn count_by_category(&self, category_id: Uuid) -> Result<i64, BoxedError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.category_id == category_id)
            .count() as i64)
    }

    async fn set_adjusted_points(
        &self,
        action_id: Uuid,
        adjusted_points: Option<i32>,
    ) -> Result<CorrectiveActionModel, BoxedError> {
        let mut rows = self.rows.lock().unwrap();
        let action = match rows.get_mut(&action_id) {
            Some(action) => action,
            None => {
                return Err(Box::new(DomainError::NotFound(format!(
                    "corrective action {action_id}"
                ))))
            }
        };
        if action.status == CorrectiveActionStatus::Voided {
            return Err(Box::new(DomainError::InvalidState(format!(
                "corrective action {action_id} is voided"
            ))));
        }
        action.adjusted_points = adjusted_points;
        Ok(action.clone())
    }

    async fn void(
        &self,
        action_id: Uuid,
        reason: &str,
        voided_by: Uuid,
        voided_at: DateTime<Utc>,
    ) -> Result<CorrectiveActionModel, BoxedError> {
        let mut rows = self.rows.lock().unwrap();
        let action = match rows.get_mut(&action_id) {
            Some(action) => action,
            None => {
                return Err(Box::new(DomainError::NotFound(format!(
                    "corrective action {action_id}"
                ))))
            }
        };
        if action.status == CorrectiveActionStatus::Voided {
            return Err(Box::new(DomainError::InvalidState(format!(
                "corrective action {action_id} is already voided"
            ))));
        }
        action.status = CorrectiveActionStatus::Voided;
        action.void_reason = Some(HeaplessString::from_str(reason).map_err(|_| "reason too long")?);
        action.voided_by = Some(voided_by);
        action.voided_at = Some(voided_at);
        Ok(action.clone())
    }
}

// ---------------------------------------------------------------------------
// Signatures

pub(crate) struct InMemorySignatures {
    rows: Mutex<Vec<ActionSignatureModel>>,
    actions: Arc<InMemoryActions>,
}

impl InMemorySignatures {
    fn new(actions: Arc<InMemoryActions>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            actions,
        }
    }
}

#[async_trait]
impl ActionSignatureRepository for InMemorySignatures {
    async fn record(
        &self,
        signature: ActionSignatureModel,
        parent_update: Option<CorrectiveActionModel>,
    ) -> Result<ActionSignatureModel, BoxedError> {
        let mut rows = self.rows.lock().unwrap();
        // The store re-checks the parent at write time: a signature in any
        // role is refused once the action is voided.
        if let Some(parent) = self.actions.get(signature.corrective_action_id) {
            if parent.status == CorrectiveActionStatus::Voided {
                return Err(Box::new(DomainError::InvalidState(format!(
                    "corrective action {} is voided",
                    signature.corrective_action_id
                ))));
            }
        }
        // The unique-index stand-in: the triple is re-checked under the lock
        // so racing signers lose here even when both passed the pre-check.
        let collision = rows.iter().any(|s| {
            s.corrective_action_id == signature.corrective_action_id
                && s.signer_role == signature.signer_role
                && s.signer_person_id == signature.signer_person_id
        });
        if collision {
            return Err(Box::new(DomainError::DuplicateSignature(format!(
                "{} already signed corrective action {} as {}",
                signature.signer_person_id,
                signature.corrective_action_id,
                signature.signer_role
            ))));
        }
        rows.push(signature.clone());
        if let Some(parent) = parent_update {
            self.actions.put(parent);
        }
        Ok(signature)
    }

    async fn find_by_action(
        &self,
        action_id: Uuid,
    ) -> Result<Vec<ActionSignatureModel>, BoxedError> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.corrective_action_id == action_id)
            .cloned()
            .collect();
        rows.sort_by_key(|s| s.signed_at);
        Ok(rows)
    }

    async fn exists(
        &self,
        action_id: Uuid,
        signer_role: SignerRole,
        signer_person_id: Uuid,
    ) -> Result<bool, BoxedError> {
        Ok(self.rows.lock().unwrap().iter().any(|s| {
            s.corrective_action_id == action_id
                && s.signer_role == signer_role
                && s.signer_person_id == signer_person_id
        }))
    }
}

// ---------------------------------------------------------------------------
// Point adjustments

#[derive(Default)]
pub(crate) struct InMemoryAdjustments {
    rows: Mutex<Vec<PointAdjustmentModel>>,
}

#[async_trait]
impl CreateBatch for InMemoryAdjustments {
    type Model = PointAdjustmentModel;

    async fn create_batch(
        &self,
        items: Vec<PointAdjustmentModel>,
    ) -> Result<Vec<PointAdjustmentModel>, BoxedError> {
        self.rows.lock().unwrap().extend(items.iter().cloned());
        Ok(items)
    }
}

#[async_trait]
impl PointAdjustmentRepository for InMemoryAdjustments {
    async fn find_effective_between(
        &self,
        employee_id: Uuid,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<PointAdjustmentModel>, BoxedError> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| {
                a.employee_id == employee_id
                    && a.effective_date >= from
                    && a.effective_date <= until
            })
            .cloned()
            .collect();
        rows.sort_by_key(|a| a.effective_date);
        Ok(rows)
    }
}

// ---------------------------------------------------------------------------
// Audit sink and employee directory

#[derive(Default)]
pub(crate) struct InMemoryAudit {
    rows: Mutex<Vec<AuditTrailModel>>,
    pub fail: bool,
}

impl InMemoryAudit {
    pub fn entries(&self) -> Vec<AuditTrailModel> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditTrailRepository for InMemoryAudit {
    async fn append(&self, entry: AuditTrailModel) -> Result<(), BoxedError> {
        if self.fail {
            return Err("audit sink unavailable".into());
        }
        self.rows.lock().unwrap().push(entry);
        Ok(())
    }

    async fn find_by_entity(&self, entity_id: Uuid) -> Result<Vec<AuditTrailModel>, BoxedError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.entity_id == entity_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryEmployees {
    rows: Mutex<HashMap<Uuid, EmployeeModel>>,
}

impl InMemoryEmployees {
    pub fn put(&self, model: EmployeeModel) {
        self.rows.lock().unwrap().insert(model.id, model);
    }
}

#[async_trait]
impl ExistByIds for InMemoryEmployees {
    async fn exist_by_ids(&self, ids: &[Uuid]) -> Result<Vec<(Uuid, bool)>, BoxedError> {
        let rows = self.rows.lock().unwrap();
        Ok(ids.iter().map(|id| (*id, rows.contains_key(id))).collect())
    }
}

#[async_trait]
impl Load for InMemoryEmployees {
    type Model = EmployeeModel;

    async fn load(&self, id: Uuid) -> Result<Option<EmployeeModel>, BoxedError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }
}

impl EmployeeDirectory for InMemoryEmployees {}

// ---------------------------------------------------------------------------
// Harness

pub(crate) struct Harness {
    pub catalog: CatalogService,
    pub ledger: LedgerService,
    pub points: PointsService,
    pub categories: Arc<InMemoryCategories>,
    pub actions: Arc<InMemoryActions>,
    pub employees: Arc<InMemoryEmployees>,
    pub audit: Arc<InMemoryAudit>,
}

impl Harness {
    pub fn seed_employee(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.employees.put(EmployeeModel {
            id,
            display_name: HeaplessString::from_str("Test Employee").unwrap(),
            is_active: true,
        });
        id
    }

    /// Insert a category directly, bypassing the catalog service.
    pub fn seed_category(&self, default_points: i32) -> Uuid {
        let id = Uuid::new_v4();
        self.categories.put(ViolationCategoryModel {
            id,
            name: HeaplessString::from_str("Seeded category").unwrap(),
            severity: Severity::Moderate,
            default_points,
            description: None,
            display_order: 0,
            is_active: true,
        });
        id
    }

    pub fn category_row(&self, id: Uuid) -> Option<ViolationCategoryModel> {
        self.categories.get(id)
    }

    pub fn action_row(&self, id: Uuid) -> Option<CorrectiveActionModel> {
        self.actions.get(id)
    }
}

fn build(audit: InMemoryAudit) -> Harness {
    let categories = Arc::new(InMemoryCategories::default());
    let actions = Arc::new(InMemoryActions::default());
    let signatures = Arc::new(InMemorySignatures::new(actions.clone()));
    let adjustments = Arc::new(InMemoryAdjustments::default());
    let employees = Arc::new(InMemoryEmployees::default());
    let audit = Arc::new(audit);
    let cache = category_cache();

    let catalog = CatalogService::new(
        categories.clone(),
        actions.clone(),
        audit.clone(),
        cache.clone(),
    );
    let ledger = LedgerService::new(
        actions.clone(),
        signatures,
        adjustments.clone(),
        categories.clone(),
        employees.clone(),
        audit.clone(),
        cache,
    );
    let points = PointsService::new(actions.clone(), adjustments, employees.clone());

    Harness {
        catalog,
        ledger,
        points,
        categories,
        actions,
        employees,
        audit,
    }
}

pub(crate) fn harness() -> Harness {
    build(InMemoryAudit::default())
}

pub(crate) fn harness_with_failing_audit() -> Harness {
    build(InMemoryAudit {
        fail: true,
        ..Default::default()
    })
}

// ---------------------------------------------------------------------------
// Caller and request helpers

pub(crate) fn admin_ctx() -> CallerContext {
    CallerContext::new(Uuid::new_v4(), StaffRole::Admin)
}

pub(crate) fn hr_ctx() -> CallerContext {
    CallerContext::new(Uuid::new_v4(), StaffRole::HumanResources)
}

pub(crate) fn supervisor_ctx() -> CallerContext {
    CallerContext::new(Uuid::new_v4(), StaffRole::Supervisor)
}

pub(crate) fn direct_care_ctx() -> CallerContext {
    CallerContext::new(Uuid::new_v4(), StaffRole::DirectCare)
}

/// A 1x1 transparent PNG data URL, as a capture pad would submit.
pub(crate) fn png() -> String {
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==".to_string()
}

pub(crate) fn issue_request(
    employee_id: Uuid,
    category_id: Uuid,
    points: Option<i32>,
) -> IssueActionRequest {
    IssueActionRequest {
        employee_id,
        category_id,
        violation_date: Utc::now(),
        points,
    }
}

pub(crate) fn sign_request(
    action_id: Uuid,
    signer_role: SignerRole,
    signer_person_id: Uuid,
) -> SignActionRequest {
    SignActionRequest {
        action_id,
        signer_role,
        signer_person_id,
        signature_image: png(),
        comments: None,
        acknowledged: None,
        source_ip: Some("10.0.0.12".to_string()),
        device: Some("kiosk-tablet-3".to_string()),
    }
}
