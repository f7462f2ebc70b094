//! Verdict scoring: current-year energy against the day master
//!
//! Score components, in order:
//! 1. year stem element vs. day master (+2 same, +1 feeds, -1 attacks)
//! 2. year branch element vs. day master (same rule, additive)
//! 3. prosperity bonus (+2 strong, +1 present)
//! 4. amplifier: a strong day master pushes a positive score up by one,
//!    a weak one pushes a negative score down by one
//!
//! YES needs 3 or more, NO needs -2 or less. The asymmetry is fixed.

use crate::analysis::{
    analyze_prosperity, compute_day_master_strength, compute_structure, ProsperityStatus,
    StrengthCategory, StructureLabel,
};
use crate::chart::{year_pillar, Chart};
use crate::core::error::Result;
use crate::cycle::{Branch, Element, Stem};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const YES_THRESHOLD: i32 = 3;
pub const NO_THRESHOLD: i32 = -2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
    #[serde(rename = "NOT NOW")]
    NotNow,
}

impl Verdict {
    pub fn from_score(score: i32) -> Self {
        if score >= YES_THRESHOLD {
            Verdict::Yes
        } else if score <= NO_THRESHOLD {
            Verdict::No
        } else {
            Verdict::NotNow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Yes => "YES",
            Verdict::No => "NO",
            Verdict::NotNow => "NOT NOW",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = String;

    /// Case-insensitive; inner whitespace between NOT and NOW is collapsed
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase();
        match normalized.as_str() {
            "YES" => Ok(Verdict::Yes),
            "NO" => Ok(Verdict::No),
            "NOT NOW" => Ok(Verdict::NotNow),
            _ => Err(format!("unknown verdict: {s}")),
        }
    }
}

/// The year pillar of the year being asked about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearEnergy {
    pub year: i32,
    pub stem: Stem,
    pub branch: Branch,
    pub stem_element: Element,
    pub branch_element: Element,
}

impl YearEnergy {
    pub fn for_year(year: i32) -> Self {
        let pillar = year_pillar(year);
        Self {
            year,
            stem: pillar.stem,
            branch: pillar.branch,
            stem_element: pillar.stem.element(),
            branch_element: pillar.branch.element(),
        }
    }
}

/// Contribution of one year element towards the day master
pub fn element_score(year_element: Element, day_master: Element) -> i32 {
    if year_element == day_master {
        2
    } else if year_element.generates() == day_master {
        1
    } else if year_element.conquers() == day_master {
        -1
    } else {
        0
    }
}

pub fn prosperity_bonus(status: ProsperityStatus) -> i32 {
    match status {
        ProsperityStatus::Strong => 2,
        ProsperityStatus::Present => 1,
        ProsperityStatus::Absent | ProsperityStatus::Weak => 0,
    }
}

pub fn amplifier(category: StrengthCategory, running: i32) -> i32 {
    match category {
        StrengthCategory::Strong if running > 0 => 1,
        StrengthCategory::Weak if running < 0 => -1,
        _ => 0,
    }
}

/// Every component of the compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub stem: i32,
    pub branch: i32,
    pub prosperity: i32,
    pub amplifier: i32,
    pub total: i32,
}

impl ScoreBreakdown {
    pub fn compute(
        day_master: Element,
        energy: &YearEnergy,
        prosperity: ProsperityStatus,
        strength: StrengthCategory,
    ) -> Self {
        let stem = element_score(energy.stem_element, day_master);
        let branch = element_score(energy.branch_element, day_master);
        let prosperity = prosperity_bonus(prosperity);
        let running = stem + branch + prosperity;
        let amplifier = amplifier(strength, running);
        Self {
            stem,
            branch,
            prosperity,
            amplifier,
            total: running + amplifier,
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_score(self.total)
    }
}

/// Full output of the deterministic verdict path
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictAnalysis {
    pub verdict: Verdict,
    pub compatibility_score: i32,
    pub breakdown: ScoreBreakdown,
    pub year_energy: YearEnergy,
    pub day_master_strength: StrengthCategory,
    pub prosperity_status: ProsperityStatus,
    pub structure: StructureLabel,
}

pub fn determine_verdict(chart: &Chart, current_year: i32) -> Result<VerdictAnalysis> {
    let energy = YearEnergy::for_year(current_year);
    let strength = compute_day_master_strength(chart);
    let prosperity = analyze_prosperity(chart);
    let structure = compute_structure(chart)?;

    let breakdown = ScoreBreakdown::compute(
        chart.day_master.element,
        &energy,
        prosperity.status,
        strength.category,
    );
    let verdict = breakdown.verdict();

    tracing::debug!(
        "Year {} ({}{}) vs {} day master: {:?} -> {}",
        current_year,
        energy.stem,
        energy.branch,
        chart.day_master.element,
        breakdown,
        verdict
    );

    Ok(VerdictAnalysis {
        verdict,
        compatibility_score: breakdown.total,
        breakdown,
        year_energy: energy,
        day_master_strength: strength.category,
        prosperity_status: prosperity.status,
        structure: structure.label,
    })
}
