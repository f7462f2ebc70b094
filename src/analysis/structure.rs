//! Dominant structure: how the strongest outside element meets the day master

use crate::analysis::balance::{compute_element_balance, ElementBalance};
use crate::chart::Chart;
use crate::core::error::{BaziError, Result};
use crate::cycle::{Element, Relation};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureLabel {
    /// The dominant element generates the day master
    BornFrom(Element),
    /// The day master generates the dominant element
    Generating(Element),
    /// The dominant element conquers the day master
    ControlledBy(Element),
    /// The day master conquers the dominant element
    Controlling(Element),
    /// No element other than the day master's carries any weight
    Unknown,
}

impl fmt::Display for StructureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureLabel::BornFrom(e) => write!(f, "Born from {e}"),
            StructureLabel::Generating(e) => write!(f, "Generating {e}"),
            StructureLabel::ControlledBy(e) => write!(f, "Controlled by {e}"),
            StructureLabel::Controlling(e) => write!(f, "Controlling {e}"),
            StructureLabel::Unknown => f.write_str("Unknown"),
        }
    }
}

impl Serialize for StructureLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Structure {
    pub label: StructureLabel,
    pub dominant: Option<Element>,
}

/// Heaviest element other than `exclude`; ties go to the earlier element
///
/// Zero-weight elements never qualify.
pub fn dominant_element(balance: &ElementBalance, exclude: Element) -> Option<Element> {
    let mut best: Option<(Element, f64)> = None;
    for (element, weight) in balance.iter() {
        if element == exclude {
            continue;
        }
        let current = best.map_or(0.0, |(_, w)| w);
        if weight > current {
            best = Some((element, weight));
        }
    }
    best.map(|(element, _)| element)
}

/// Label the relation of `dominant` to the day master `dm`
pub fn classify(dm: Element, dominant: Element) -> Result<StructureLabel> {
    match dm.relation_to(dominant) {
        Relation::GeneratedBy => Ok(StructureLabel::BornFrom(dominant)),
        Relation::Generates => Ok(StructureLabel::Generating(dominant)),
        Relation::ConqueredBy => Ok(StructureLabel::ControlledBy(dominant)),
        Relation::Conquers => Ok(StructureLabel::Controlling(dominant)),
        Relation::Same => Err(BaziError::InternalComputation(format!(
            "dominant element {dominant} equals the day master element"
        ))),
    }
}

pub fn compute_structure(chart: &Chart) -> Result<Structure> {
    let balance = compute_element_balance(chart);
    structure_from_balance(chart.day_master.element, &balance)
}

pub fn structure_from_balance(dm: Element, balance: &ElementBalance) -> Result<Structure> {
    let dominant = dominant_element(balance, dm);
    let label = match dominant {
        Some(element) => classify(dm, element)?,
        None => StructureLabel::Unknown,
    };
    Ok(Structure { label, dominant })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_chart;
    use crate::core::types::Gender;
    use chrono::NaiveDate;

    fn balance(weights: [f64; 5]) -> ElementBalance {
        let mut b = ElementBalance::default();
        for (element, w) in Element::ALL.into_iter().zip(weights) {
            b.add(element, w);
        }
        b
    }

    #[test]
    fn test_reference_chart_structure() {
        let chart = build_chart(Gender::Male, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(), 8).unwrap();
        let structure = compute_structure(&chart).unwrap();
        // Earth, Metal and Water tie at 1.0; Earth is seen first
        assert_eq!(structure.dominant, Some(Element::Earth));
        assert_eq!(structure.label, StructureLabel::Generating(Element::Earth));
        assert_eq!(structure.label.to_string(), "Generating Earth");
    }

    #[test]
    fn test_all_four_labels() {
        let dm = Element::Wood;
        assert_eq!(classify(dm, Element::Water).unwrap(), StructureLabel::BornFrom(Element::Water));
        assert_eq!(classify(dm, Element::Fire).unwrap(), StructureLabel::Generating(Element::Fire));
        assert_eq!(classify(dm, Element::Metal).unwrap(), StructureLabel::ControlledBy(Element::Metal));
        assert_eq!(classify(dm, Element::Earth).unwrap(), StructureLabel::Controlling(Element::Earth));
    }

    #[test]
    fn test_same_element_is_internal_error() {
        let result = classify(Element::Fire, Element::Fire);
        assert!(matches!(result, Err(BaziError::InternalComputation(_))));
    }

    #[test]
    fn test_day_master_element_is_excluded() {
        let b = balance([4.0, 0.5, 1.5, 0.0, 0.0]);
        assert_eq!(dominant_element(&b, Element::Wood), Some(Element::Earth));
    }

    #[test]
    fn test_unknown_when_only_day_master_weighs() {
        let b = balance([0.0, 6.0, 0.0, 0.0, 0.0]);
        let structure = structure_from_balance(Element::Fire, &b).unwrap();
        assert_eq!(structure.dominant, None);
        assert_eq!(structure.label, StructureLabel::Unknown);
        assert_eq!(structure.label.to_string(), "Unknown");
    }

    #[test]
    fn test_label_serializes_as_text() {
        let json = serde_json::to_string(&StructureLabel::ControlledBy(Element::Metal)).unwrap();
        assert_eq!(json, "\"Controlled by Metal\"");
    }
}
