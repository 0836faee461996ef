use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Staff roles as supplied by the identity/session provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    Admin,
    HumanResources,
    Supervisor,
    DirectCare,
}

/// Named capabilities checked by service operations.
///
/// Issuing a corrective action is deliberately absent: any authenticated
/// caller may issue, and keeping the gap out of this enum makes that
/// permissiveness visible in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    EditCatalog,
    VoidAction,
    RecordAdjustment,
}

impl StaffRole {
    /// Static role → capability mapping; the single source of authorization
    /// truth for the core.
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            StaffRole::Admin | StaffRole::HumanResources => &[
                Permission::EditCatalog,
                Permission::VoidAction,
                Permission::RecordAdjustment,
            ],
            StaffRole::Supervisor | StaffRole::DirectCare => &[],
        }
    }

    pub fn has(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaffRole::Admin => write!(f, "Admin"),
            StaffRole::HumanResources => write!(f, "HumanResources"),
            StaffRole::Supervisor => write!(f, "Supervisor"),
            StaffRole::DirectCare => write!(f, "DirectCare"),
        }
    }
}

impl FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(StaffRole::Admin),
            "HumanResources" => Ok(StaffRole::HumanResources),
            "Supervisor" => Ok(StaffRole::Supervisor),
            "DirectCare" => Ok(StaffRole::DirectCare),
            _ => Err(format!("Invalid StaffRole: {s}")),
        }
    }
}

/// Authenticated caller identity, supplied by the session layer on every call.
///
/// The core trusts the pair and performs its own capability checks on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerContext {
    pub person_id: Uuid,
    pub role: StaffRole,
}

impl CallerContext {
    pub fn new(person_id: Uuid, role: StaffRole) -> Self {
        Self { person_id, role }
    }

    pub fn has(&self, permission: Permission) -> bool {
        self.role.has(permission)
    }

    /// Fail with `Permission` unless the caller's role grants the capability.
    pub fn require(&self, permission: Permission) -> DomainResult<()> {
        if self.has(permission) {
            Ok(())
        } else {
            Err(DomainError::Permission(format!(
                "role {} lacks {permission:?}",
                self.role
            )))
        }
    }
}
