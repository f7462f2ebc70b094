//! Core type definitions used throughout the codebase

use crate::core::error::{BaziError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender of the chart owner
///
/// Carried on the chart and forwarded to the inference service; the
/// deterministic rules do not branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "" => Err(BaziError::invalid("gender is required")),
            other => Err(BaziError::invalid(format!("unrecognised gender: {other}"))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// One of the four chart positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Year,
    Month,
    Day,
    Hour,
}

impl Position {
    /// All positions in chart order
    pub const ALL: [Position; 4] = [Position::Year, Position::Month, Position::Day, Position::Hour];

    /// Month and day are the seats closest to the day master
    pub fn is_inner(&self) -> bool {
        matches!(self, Position::Month | Position::Day)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::Year => "year",
            Position::Month => "month",
            Position::Day => "day",
            Position::Hour => "hour",
        };
        f.write_str(name)
    }
}

/// One value per chart position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByPosition<T> {
    pub year: T,
    pub month: T,
    pub day: T,
    pub hour: T,
}

impl<T> ByPosition<T> {
    pub fn get(&self, position: Position) -> &T {
        match position {
            Position::Year => &self.year,
            Position::Month => &self.month,
            Position::Day => &self.day,
            Position::Hour => &self.hour,
        }
    }

    /// Iterate `(position, value)` pairs in chart order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        Position::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> ByPosition<U> {
        ByPosition {
            year: f(&self.year),
            month: f(&self.month),
            day: f(&self.day),
            hour: f(&self.hour),
        }
    }
}
