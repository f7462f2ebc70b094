//! Pillars and the four-pillar chart

use crate::core::types::{ByPosition, Gender, Position};
use crate::cycle::{Branch, Element, Stem};
use chrono::NaiveDate;
use serde::Serialize;

/// A stem/branch pair in one chart position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
    /// Element of the stem
    pub element: Element,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self {
            stem,
            branch,
            element: stem.element(),
        }
    }
}

/// The day pillar's stem: the reference point for every analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayMaster {
    pub stem: Stem,
    pub element: Element,
}

/// A complete four-pillar chart
///
/// Built once per request and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub birth_hour: u32,
    /// `HH:MM` as given by the caller
    pub birth_time: String,
    pub pillars: ByPosition<Pillar>,
    pub day_master: DayMaster,
    pub hidden_stems: ByPosition<&'static [Stem]>,
}

impl Chart {
    /// Assemble a chart from already-computed pillars
    ///
    /// `birth_time` starts as the hour on the dot; see `with_birth_time`.
    pub fn new(gender: Gender, birth_date: NaiveDate, birth_hour: u32, pillars: ByPosition<Pillar>) -> Self {
        let day_master = DayMaster {
            stem: pillars.day.stem,
            element: pillars.day.element,
        };
        let hidden_stems = pillars.map(|p| p.branch.hidden_stems());
        Self {
            gender,
            birth_date,
            birth_hour,
            birth_time: format!("{birth_hour:02}:00"),
            pillars,
            day_master,
            hidden_stems,
        }
    }

    /// Keep the caller's own `HH:MM` text
    pub fn with_birth_time(mut self, birth_time: impl Into<String>) -> Self {
        self.birth_time = birth_time.into();
        self
    }

    pub fn pillar(&self, position: Position) -> &Pillar {
        self.pillars.get(position)
    }

    /// Positions whose branch equals `branch`, in chart order
    pub fn branch_positions(&self, branch: Branch) -> Vec<Position> {
        self.pillars
            .iter()
            .filter(|(_, p)| p.branch == branch)
            .map(|(pos, _)| pos)
            .collect()
    }
}
