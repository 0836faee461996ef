use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Named discipline band an employee's rolling point total maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DisciplineLevel {
    GoodStanding,
    Coaching,
    VerbalWarning,
    WrittenWarning,
    FinalWarning,
    Termination,
}

/// Lower bound of each band, highest first.
///
/// Classification walks this table top-down with `>=`, so exact boundary
/// totals land in the higher band (18 points is `Termination`, 17 is
/// `FinalWarning`).
const BANDS: [(i32, DisciplineLevel); 6] = [
    (18, DisciplineLevel::Termination),
    (14, DisciplineLevel::FinalWarning),
    (10, DisciplineLevel::WrittenWarning),
    (6, DisciplineLevel::VerbalWarning),
    (1, DisciplineLevel::Coaching),
    (0, DisciplineLevel::GoodStanding),
];

impl DisciplineLevel {
    /// Classify a rolling point total into its discipline band.
    pub fn for_points(points: i32) -> DisciplineLevel {
        for (lower_bound, level) in BANDS {
            if points >= lower_bound {
                return level;
            }
        }
        DisciplineLevel::GoodStanding
    }

    /// Point total at which the next band begins, `None` once terminated.
    pub fn next_threshold(self) -> Option<i32> {
        match self {
            DisciplineLevel::GoodStanding | DisciplineLevel::Coaching => Some(6),
            DisciplineLevel::VerbalWarning => Some(10),
            DisciplineLevel::WrittenWarning => Some(14),
            DisciplineLevel::FinalWarning => Some(18),
            DisciplineLevel::Termination => None,
        }
    }

    /// Points remaining before the next band, given the current total.
    pub fn points_to_next(self, current_points: i32) -> Option<i32> {
        self.next_threshold()
            .map(|threshold| (threshold - current_points).max(0))
    }
}

impl std::fmt::Display for DisciplineLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisciplineLevel::GoodStanding => write!(f, "GoodStanding"),
            DisciplineLevel::Coaching => write!(f, "Coaching"),
            DisciplineLevel::VerbalWarning => write!(f, "VerbalWarning"),
            DisciplineLevel::WrittenWarning => write!(f, "WrittenWarning"),
            DisciplineLevel::FinalWarning => write!(f, "FinalWarning"),
            DisciplineLevel::Termination => write!(f, "Termination"),
        }
    }
}

impl FromStr for DisciplineLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GoodStanding" => Ok(DisciplineLevel::GoodStanding),
            "Coaching" => Ok(DisciplineLevel::Coaching),
            "VerbalWarning" => Ok(DisciplineLevel::VerbalWarning),
            "WrittenWarning" => Ok(DisciplineLevel::WrittenWarning),
            "FinalWarning" => Ok(DisciplineLevel::FinalWarning),
            "Termination" => Ok(DisciplineLevel::Termination),
            _ => Err(format!("Invalid DisciplineLevel: {s}")),
        }
    }
}
