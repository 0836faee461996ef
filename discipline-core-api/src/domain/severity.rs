use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Severity scale for violation categories.
///
/// The ordering is meaningful: `Minor < Moderate < Serious < Critical <
/// ImmediateTermination`. Catalog listings group by severity in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "sqlx",
    derive(sqlx::Type),
    sqlx(type_name = "violation_severity", rename_all = "PascalCase")
)]
pub enum Severity {
    Minor,
    Moderate,
    Serious,
    Critical,
    ImmediateTermination,
}

impl Severity {
    /// All severities in ascending order, for grouped presentation.
    pub const ALL: [Severity; 5] = [
        Severity::Minor,
        Severity::Moderate,
        Severity::Serious,
        Severity::Critical,
        Severity::ImmediateTermination,
    ];
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Minor => write!(f, "Minor"),
            Severity::Moderate => write!(f, "Moderate"),
            Severity::Serious => write!(f, "Serious"),
            Severity::Critical => write!(f, "Critical"),
            Severity::ImmediateTermination => write!(f, "ImmediateTermination"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Minor" => Ok(Severity::Minor),
            "Moderate" => Ok(Severity::Moderate),
            "Serious" => Ok(Severity::Serious),
            "Critical" => Ok(Severity::Critical),
            "ImmediateTermination" => Ok(Severity::ImmediateTermination),
            _ => Err(format!("Invalid Severity: {s}")),
        }
    }
}
