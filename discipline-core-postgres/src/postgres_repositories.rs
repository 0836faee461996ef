use std::sync::Arc;

use sqlx::PgPool;

use discipline_core_db::service::{category_cache, CatalogService, LedgerService, PointsService};

use crate::repository::audit::AuditTrailRepositoryImpl;
use crate::repository::catalog::ViolationCategoryRepositoryImpl;
use crate::repository::discipline::{
    ActionSignatureRepositoryImpl, CorrectiveActionRepositoryImpl, PointAdjustmentRepositoryImpl,
};
use crate::repository::person::EmployeeDirectoryImpl;

/// Composition root over a shared connection pool.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

pub struct DisciplineRepositories {
    pub categories: Arc<ViolationCategoryRepositoryImpl>,
    pub actions: Arc<CorrectiveActionRepositoryImpl>,
    pub signatures: Arc<ActionSignatureRepositoryImpl>,
    pub adjustments: Arc<PointAdjustmentRepositoryImpl>,
    pub audit: Arc<AuditTrailRepositoryImpl>,
    pub employees: Arc<EmployeeDirectoryImpl>,
}

pub struct DisciplineServices {
    pub catalog: CatalogService,
    pub ledger: LedgerService,
    pub points: PointsService,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Build one repository per entity, all sharing the pool.
    pub fn create_discipline_repositories(&self) -> DisciplineRepositories {
        DisciplineRepositories {
            categories: Arc::new(ViolationCategoryRepositoryImpl::new(self.pool.clone())),
            actions: Arc::new(CorrectiveActionRepositoryImpl::new(self.pool.clone())),
            signatures: Arc::new(ActionSignatureRepositoryImpl::new(self.pool.clone())),
            adjustments: Arc::new(PointAdjustmentRepositoryImpl::new(self.pool.clone())),
            audit: Arc::new(AuditTrailRepositoryImpl::new(self.pool.clone())),
            employees: Arc::new(EmployeeDirectoryImpl::new(self.pool.clone())),
        }
    }

    /// Wire the service layer over a repository set.
    ///
    /// Catalog and ledger share one category cache so catalog edits
    /// invalidate what issuance reads.
    pub fn wire_services(repos: &DisciplineRepositories) -> DisciplineServices {
        let cache = category_cache();

        let catalog = CatalogService::new(
            repos.categories.clone(),
            repos.actions.clone(),
            repos.audit.clone(),
            cache.clone(),
        );
        let ledger = LedgerService::new(
            repos.actions.clone(),
            repos.signatures.clone(),
            repos.adjustments.clone(),
            repos.categories.clone(),
            repos.employees.clone(),
            repos.audit.clone(),
            cache,
        );
        let points = PointsService::new(
            repos.actions.clone(),
            repos.adjustments.clone(),
            repos.employees.clone(),
        );

        DisciplineServices {
            catalog,
            ledger,
            points,
        }
    }

    pub fn create_services(&self) -> DisciplineServices {
        let repos = self.create_discipline_repositories();
        Self::wire_services(&repos)
    }
}
