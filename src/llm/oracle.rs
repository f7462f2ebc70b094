//! The inference-service seam
//!
//! `reading::analyze` consults an `InferenceService` first when one is
//! supplied. `LlmOracle` is the HTTP-backed implementation; tests plug in
//! their own.

use crate::chart::Chart;
use crate::core::error::Result;
use crate::llm::client::LlmClient;
use crate::llm::parser::{parse_answer, OracleAnswer};
use crate::llm::prompt::{format_chart_prompt, SYSTEM_PROMPT};
use async_trait::async_trait;

#[async_trait]
pub trait InferenceService: Send + Sync {
    /// Answer `question` for `chart`
    ///
    /// Any error means "use the local engine instead".
    async fn consult(&self, chart: &Chart, question: &str) -> Result<OracleAnswer>;

    /// Short name for logs
    fn name(&self) -> &str;
}

/// Inference service backed by an LLM endpoint
pub struct LlmOracle {
    client: LlmClient,
}

impl LlmOracle {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InferenceService for LlmOracle {
    async fn consult(&self, chart: &Chart, question: &str) -> Result<OracleAnswer> {
        let user_prompt = format_chart_prompt(chart, question);
        let response = self.client.complete(SYSTEM_PROMPT, &user_prompt).await?;
        let answer = parse_answer(&response);
        if let Err(e) = &answer {
            tracing::debug!("Unparseable LLM answer ({}): {}", e, response);
        }
        answer
    }

    fn name(&self) -> &str {
        "llm"
    }
}
