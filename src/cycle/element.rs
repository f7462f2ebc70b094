//! The five elements and their generation/conquest cycles
//!
//! Generation runs Wood → Fire → Earth → Metal → Water → Wood.
//! Each element conquers the element two steps ahead of it in that cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// How one element stands towards another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Same,
    /// `self` generates the other element
    Generates,
    /// `self` is generated by the other element
    GeneratedBy,
    /// `self` conquers the other element
    Conquers,
    /// `self` is conquered by the other element
    ConqueredBy,
}

impl Element {
    /// All elements in canonical (generation) order
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position in the generation cycle (Wood = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    fn from_cycle(index: usize) -> Self {
        Self::ALL[index % 5]
    }

    pub fn generates(&self) -> Element {
        Self::from_cycle(self.index() + 1)
    }

    pub fn conquers(&self) -> Element {
        Self::from_cycle(self.index() + 2)
    }

    pub fn is_generated_by(&self) -> Element {
        Self::from_cycle(self.index() + 4)
    }

    pub fn is_conquered_by(&self) -> Element {
        Self::from_cycle(self.index() + 3)
    }

    /// Classify `self` relative to `other`
    ///
    /// Total: on a five-cycle every pair of distinct elements is exactly
    /// one of the four directed relations.
    pub fn relation_to(&self, other: Element) -> Relation {
        match (other.index() + 5 - self.index()) % 5 {
            0 => Relation::Same,
            1 => Relation::Generates,
            2 => Relation::Conquers,
            3 => Relation::ConqueredBy,
            _ => Relation::GeneratedBy,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
