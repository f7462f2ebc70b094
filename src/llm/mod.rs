//! Optional LLM-backed inference service

pub mod client;
pub mod oracle;
pub mod parser;
pub mod prompt;

pub use client::{ApiFormat, LlmClient};
pub use oracle::{InferenceService, LlmOracle};
pub use parser::{parse_answer, OracleAnswer};
