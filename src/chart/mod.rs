//! Four-pillar chart construction

pub mod builder;
pub mod pillar;

pub use builder::{build_chart, day_count, year_pillar};
pub use pillar::{Chart, DayMaster, Pillar};
