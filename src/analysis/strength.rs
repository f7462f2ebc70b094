//! Day-master strength
//!
//! The season (month branch) either is the day master's element, feeds
//! it, or neither. Every stem sharing the day master's element adds a
//! little more support.

use crate::chart::Chart;
use crate::core::types::Position;
use serde::Serialize;
use std::fmt;

/// Month branch carries the day master's own element
pub const PROSPEROUS_BONUS: f64 = 3.0;
/// Month branch generates the day master's element
pub const THRIVING_BONUS: f64 = 2.0;
/// Per stem (all four pillars) sharing the day master's element
pub const SAME_STEM_BONUS: f64 = 0.5;

pub const STRONG_THRESHOLD: f64 = 4.0;
pub const WEAK_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthCategory {
    Strong,
    Average,
    Weak,
}

impl StrengthCategory {
    pub fn from_value(value: f64) -> Self {
        if value >= STRONG_THRESHOLD {
            StrengthCategory::Strong
        } else if value <= WEAK_THRESHOLD {
            StrengthCategory::Weak
        } else {
            StrengthCategory::Average
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthCategory::Strong => "strong",
            StrengthCategory::Average => "average",
            StrengthCategory::Weak => "weak",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayMasterStrength {
    pub value: f64,
    pub category: StrengthCategory,
}

pub fn compute_day_master_strength(chart: &Chart) -> DayMasterStrength {
    let dm = chart.day_master.element;
    let season = chart.pillar(Position::Month).branch.element();

    let mut value = 0.0;
    if season == dm {
        value += PROSPEROUS_BONUS;
    }
    if season.generates() == dm {
        value += THRIVING_BONUS;
    }

    let same_stems = chart
        .pillars
        .iter()
        .filter(|(_, p)| p.stem.element() == dm)
        .count();
    value += same_stems as f64 * SAME_STEM_BONUS;

    DayMasterStrength {
        value,
        category: StrengthCategory::from_value(value),
    }
}
