use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Lifecycle status of a corrective action.
///
/// `Voided` is terminal: no signature or edit is accepted afterwards, and the
/// action stops counting toward the rolling point total while remaining on
/// file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "sqlx",
    derive(sqlx::Type),
    sqlx(type_name = "corrective_action_status", rename_all = "PascalCase")
)]
pub enum CorrectiveActionStatus {
    PendingSignature,
    Acknowledged,
    Disputed,
    Voided,
}

/// Events that move a corrective action through its lifecycle.
///
/// Supervisor/witness/HR signatures are recorded without an event: they never
/// change the action's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEvent {
    /// The employee signed; `acknowledged` is false when they decline
    /// agreement with the action.
    EmployeeSigned { acknowledged: bool },
    /// An administrator voided the action.
    Voided,
}

impl CorrectiveActionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, CorrectiveActionStatus::Voided)
    }

    /// Whether the action can still collect signatures in any role.
    pub fn accepts_signatures(self) -> bool {
        !self.is_terminal()
    }

    /// Apply a lifecycle event, rejecting illegal transitions in one place.
    pub fn apply(self, event: ActionEvent) -> DomainResult<CorrectiveActionStatus> {
        if self.is_terminal() {
            return Err(DomainError::InvalidState(format!(
                "corrective action is {self} and accepts no further changes"
            )));
        }
        match event {
            ActionEvent::EmployeeSigned { acknowledged: true } => {
                Ok(CorrectiveActionStatus::Acknowledged)
            }
            ActionEvent::EmployeeSigned { acknowledged: false } => {
                Ok(CorrectiveActionStatus::Disputed)
            }
            ActionEvent::Voided => Ok(CorrectiveActionStatus::Voided),
        }
    }
}

impl std::fmt::Display for CorrectiveActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrectiveActionStatus::PendingSignature => write!(f, "PendingSignature"),
            CorrectiveActionStatus::Acknowledged => write!(f, "Acknowledged"),
            CorrectiveActionStatus::Disputed => write!(f, "Disputed"),
            CorrectiveActionStatus::Voided => write!(f, "Voided"),
        }
    }
}

impl FromStr for CorrectiveActionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PendingSignature" => Ok(CorrectiveActionStatus::PendingSignature),
            "Acknowledged" => Ok(CorrectiveActionStatus::Acknowledged),
            "Disputed" => Ok(CorrectiveActionStatus::Disputed),
            "Voided" => Ok(CorrectiveActionStatus::Voided),
            _ => Err(format!("Invalid CorrectiveActionStatus: {s}")),
        }
    }
}
