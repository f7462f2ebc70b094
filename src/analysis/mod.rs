//! Rule-based chart analysis: element balance, day-master strength,
//! dominant structure and the prosperity branch

pub mod balance;
pub mod prosperity;
pub mod strength;
pub mod structure;

pub use balance::{compute_element_balance, ElementBalance};
pub use prosperity::{analyze_prosperity, Prosperity, ProsperityStatus};
pub use strength::{compute_day_master_strength, DayMasterStrength, StrengthCategory};
pub use structure::{compute_structure, Structure, StructureLabel};
