use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role in which a party signs off on a corrective action.
///
/// A given person may sign at most once per role on a given action. Only the
/// `Employee` signature drives the action's status; the other roles are
/// attestations recorded for the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "sqlx",
    derive(sqlx::Type),
    sqlx(type_name = "signer_role", rename_all = "PascalCase")
)]
pub enum SignerRole {
    Employee,
    Supervisor,
    Witness,
    Hr,
}

impl SignerRole {
    /// Checklist order used when reporting per-role signature status.
    pub const ALL: [SignerRole; 4] = [
        SignerRole::Employee,
        SignerRole::Supervisor,
        SignerRole::Witness,
        SignerRole::Hr,
    ];
}

impl std::fmt::Display for SignerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignerRole::Employee => write!(f, "Employee"),
            SignerRole::Supervisor => write!(f, "Supervisor"),
            SignerRole::Witness => write!(f, "Witness"),
            SignerRole::Hr => write!(f, "Hr"),
        }
    }
}

impl FromStr for SignerRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Employee" => Ok(SignerRole::Employee),
            "Supervisor" => Ok(SignerRole::Supervisor),
            "Witness" => Ok(SignerRole::Witness),
            "Hr" => Ok(SignerRole::Hr),
            _ => Err(format!("Invalid SignerRole: {s}")),
        }
    }
}
