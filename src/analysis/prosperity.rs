//! Prosperity ("Lu") branch analysis

use crate::chart::Chart;
use crate::core::types::Position;
use crate::cycle::Branch;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProsperityStatus {
    Absent,
    Present,
    /// Seated in the month or day pillar
    Strong,
    /// Seated only in the year and/or hour pillar
    Weak,
}

impl fmt::Display for ProsperityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProsperityStatus::Absent => "absent",
            ProsperityStatus::Present => "present",
            ProsperityStatus::Strong => "strong",
            ProsperityStatus::Weak => "weak",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prosperity {
    pub branch: Branch,
    pub positions: Vec<Position>,
    pub status: ProsperityStatus,
    /// Number of pillars holding the branch
    pub strength: usize,
}

/// Status for a set of matched positions
///
/// Month/day outranks year/hour regardless of what else matched.
pub fn status_for(positions: &[Position]) -> ProsperityStatus {
    if positions.is_empty() {
        return ProsperityStatus::Absent;
    }

    let mut status = ProsperityStatus::Present;
    if positions.iter().any(Position::is_inner) {
        status = ProsperityStatus::Strong;
    } else if positions.iter().any(|p| matches!(p, Position::Year | Position::Hour)) {
        status = ProsperityStatus::Weak;
    }
    status
}

pub fn analyze_prosperity(chart: &Chart) -> Prosperity {
    let branch = chart.day_master.stem.prosperity_branch();
    let positions = chart.branch_positions(branch);
    let status = status_for(&positions);

    tracing::debug!("Prosperity branch {} at {:?}: {}", branch, positions, status);

    Prosperity {
        branch,
        strength: positions.len(),
        positions,
        status,
    }
}
