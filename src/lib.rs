//! Bazi Verdict - four-pillar charts and rule-based YES / NO / NOT NOW readings

pub mod analysis;
pub mod chart;
pub mod core;
pub mod cycle;
pub mod llm;
pub mod reading;
pub mod verdict;

pub use crate::core::error::{BaziError, Result};
pub use reading::{analyze, analyze_local, Method, Reading, ReadingRequest};
