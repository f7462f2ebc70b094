pub mod config;
pub mod error;
pub mod types;

pub use config::{EngineConfig, LlmConfig};
pub use error::{BaziError, Result};
pub use types::{ByPosition, Gender, Position};
