//! Verdict engine: compatibility score, ternary verdict and its text

pub mod scoring;
pub mod text;

pub use scoring::{determine_verdict, ScoreBreakdown, Verdict, VerdictAnalysis, YearEnergy};
pub use text::{pick_verse, teaser, verses};
