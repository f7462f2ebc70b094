//! Calendrical enumerations: stems, branches and the five elements
//!
//! Pure static data. Every table is a `match` over a closed enum, so there
//! is nothing to initialise or mutate at runtime.

pub mod branch;
pub mod element;
pub mod stem;

pub use branch::Branch;
pub use element::{Element, Relation};
pub use stem::Stem;
