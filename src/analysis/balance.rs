//! Weighted element tally across the chart

use crate::chart::Chart;
use crate::cycle::Element;
use serde::Serialize;

/// Weight of a pillar's stem in the tally
pub const STEM_WEIGHT: f64 = 1.0;
/// Weight of a pillar's branch in the tally
pub const BRANCH_WEIGHT: f64 = 0.5;

/// Per-element weight; always sums to 6.0 for a full chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementBalance {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl ElementBalance {
    pub fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn slot(&mut self, element: Element) -> &mut f64 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    pub fn add(&mut self, element: Element, weight: f64) {
        *self.slot(element) += weight;
    }

    pub fn total(&self) -> f64 {
        Element::ALL.iter().map(|e| self.get(*e)).sum()
    }

    /// `(element, weight)` pairs in canonical element order
    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        Element::ALL.into_iter().map(move |e| (e, self.get(e)))
    }
}

pub fn compute_element_balance(chart: &Chart) -> ElementBalance {
    let mut balance = ElementBalance::default();
    for (_, pillar) in chart.pillars.iter() {
        balance.add(pillar.stem.element(), STEM_WEIGHT);
        balance.add(pillar.branch.element(), BRANCH_WEIGHT);
    }
    balance
}
