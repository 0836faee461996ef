use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Entity kinds referenced by audit trail rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "audit_entity_type", rename_all = "PascalCase")]
pub enum AuditEntityType {
    ViolationCategory,
    CorrectiveAction,
    CorrectiveActionSignature,
    PointAdjustment,
}

/// What happened to the referenced entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "audit_action", rename_all = "PascalCase")]
pub enum AuditAction {
    Created,
    Updated,
    Deactivated,
    Deleted,
    Signed,
    Voided,
}

impl std::fmt::Display for AuditEntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditEntityType::ViolationCategory => write!(f, "ViolationCategory"),
            AuditEntityType::CorrectiveAction => write!(f, "CorrectiveAction"),
            AuditEntityType::CorrectiveActionSignature => {
                write!(f, "CorrectiveActionSignature")
            }
            AuditEntityType::PointAdjustment => write!(f, "PointAdjustment"),
        }
    }
}

impl FromStr for AuditEntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ViolationCategory" => Ok(AuditEntityType::ViolationCategory),
            "CorrectiveAction" => Ok(AuditEntityType::CorrectiveAction),
            "CorrectiveActionSignature" => Ok(AuditEntityType::CorrectiveActionSignature),
            "PointAdjustment" => Ok(AuditEntityType::PointAdjustment),
            _ => Err(format!("Invalid AuditEntityType: {s}")),
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditAction::Created => write!(f, "Created"),
            AuditAction::Updated => write!(f, "Updated"),
            AuditAction::Deactivated => write!(f, "Deactivated"),
            AuditAction::Deleted => write!(f, "Deleted"),
            AuditAction::Signed => write!(f, "Signed"),
            AuditAction::Voided => write!(f, "Voided"),
        }
    }
}

impl FromStr for AuditAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Created" => Ok(AuditAction::Created),
            "Updated" => Ok(AuditAction::Updated),
            "Deactivated" => Ok(AuditAction::Deactivated),
            "Deleted" => Ok(AuditAction::Deleted),
            "Signed" => Ok(AuditAction::Signed),
            "Voided" => Ok(AuditAction::Voided),
            _ => Err(format!("Invalid AuditAction: {s}")),
        }
    }
}
