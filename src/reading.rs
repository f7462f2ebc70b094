//! End-to-end reading: validate the request, build the chart, analyze it
//! and produce a verdict, consulting the inference service first when one
//! is available.
//!
//! Input errors surface to the caller. Inference-service errors never do:
//! the deterministic engine answers instead and `method` says so.

use crate::analysis::{
    analyze_prosperity, compute_day_master_strength, compute_element_balance, compute_structure,
    DayMasterStrength, ElementBalance, Prosperity, Structure,
};
use crate::chart::{build_chart, Chart};
use crate::core::error::{BaziError, Result};
use crate::core::types::Gender;
use crate::llm::{InferenceService, OracleAnswer};
use crate::verdict::{determine_verdict, pick_verse, teaser, Verdict, VerdictAnalysis};
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Raw request fields as received from a caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRequest {
    pub gender: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// `HH:MM`; only the hour is used
    pub birth_time: String,
    pub question: String,
}

/// A request whose fields have all been parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub birth_hour: u32,
    /// Trimmed `HH:MM` text
    pub birth_time: String,
    pub question: String,
}

impl ReadingRequest {
    pub fn new(
        gender: impl Into<String>,
        birth_date: impl Into<String>,
        birth_time: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            gender: gender.into(),
            birth_date: birth_date.into(),
            birth_time: birth_time.into(),
            question: question.into(),
        }
    }

    pub fn validate(&self) -> Result<ValidatedRequest> {
        let gender: Gender = self.gender.parse()?;
        let birth_date = parse_birth_date(&self.birth_date)?;
        let birth_hour = parse_birth_hour(&self.birth_time)?;

        let question = self.question.trim();
        if question.is_empty() {
            return Err(BaziError::invalid("question is required"));
        }

        Ok(ValidatedRequest {
            gender,
            birth_date,
            birth_hour,
            birth_time: self.birth_time.trim().to_string(),
            question: question.to_string(),
        })
    }
}

pub fn parse_birth_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return Err(BaziError::invalid("birth date is required"));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| BaziError::invalid(format!("birth date '{text}' is not YYYY-MM-DD: {e}")))
}

/// Hour component of an `HH:MM` time
pub fn parse_birth_hour(text: &str) -> Result<u32> {
    let text = text.trim();
    let (hour, minute) = text
        .split_once(':')
        .ok_or_else(|| BaziError::invalid(format!("birth time '{text}' is not HH:MM")))?;

    let hour: u32 = hour
        .parse()
        .map_err(|_| BaziError::invalid(format!("birth time '{text}' has a bad hour")))?;
    let minute: u32 = minute
        .parse()
        .map_err(|_| BaziError::invalid(format!("birth time '{text}' has bad minutes")))?;

    if hour > 23 || minute > 59 {
        return Err(BaziError::invalid(format!("birth time '{text}' is out of range")));
    }
    Ok(hour)
}

/// Current calendar year on the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Which path produced the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Local,
    Llm,
}

/// Everything a caller gets back
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub verdict: Verdict,
    pub verse: String,
    pub teaser: String,
    pub chart: Chart,
    pub element_balance: ElementBalance,
    pub day_master_strength: DayMasterStrength,
    pub structure: Structure,
    pub prosperity: Prosperity,
    pub method: Method,
    /// Score breakdown; only the local path has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<VerdictAnalysis>,
}

/// Chart plus the verdict-independent analyses
struct Groundwork {
    chart: Chart,
    element_balance: ElementBalance,
    day_master_strength: DayMasterStrength,
    structure: Structure,
    prosperity: Prosperity,
}

impl Groundwork {
    fn lay(request: &ValidatedRequest) -> Result<Self> {
        let chart = build_chart(request.gender, request.birth_date, request.birth_hour)?
            .with_birth_time(request.birth_time.as_str());
        Ok(Self {
            element_balance: compute_element_balance(&chart),
            day_master_strength: compute_day_master_strength(&chart),
            structure: compute_structure(&chart)?,
            prosperity: analyze_prosperity(&chart),
            chart,
        })
    }

    fn local<R: Rng + ?Sized>(self, current_year: i32, rng: &mut R) -> Result<Reading> {
        let analysis = determine_verdict(&self.chart, current_year)?;
        let verdict = analysis.verdict;
        let verse = pick_verse(verdict, rng).to_string();
        let teaser = teaser(&self.chart, current_year, verdict);

        tracing::info!(
            "Local verdict {} (score {}) for {} day master",
            verdict,
            analysis.compatibility_score,
            self.chart.day_master.stem
        );

        Ok(self.finish(verdict, verse, teaser, Method::Local, Some(analysis)))
    }

    fn remote(self, answer: OracleAnswer) -> Reading {
        tracing::info!("Inference service verdict {}", answer.verdict);
        self.finish(answer.verdict, answer.verse, answer.teaser, Method::Llm, None)
    }

    fn finish(
        self,
        verdict: Verdict,
        verse: String,
        teaser: String,
        method: Method,
        analysis: Option<VerdictAnalysis>,
    ) -> Reading {
        Reading {
            verdict,
            verse,
            teaser,
            chart: self.chart,
            element_balance: self.element_balance,
            day_master_strength: self.day_master_strength,
            structure: self.structure,
            prosperity: self.prosperity,
            method,
            analysis,
        }
    }
}

/// Deterministic reading with no inference service
pub fn analyze_local<R: Rng + ?Sized>(
    request: &ReadingRequest,
    current_year: i32,
    rng: &mut R,
) -> Result<Reading> {
    let validated = request.validate()?;
    Groundwork::lay(&validated)?.local(current_year, rng)
}

/// Full reading: the inference service if given and healthy, else local
pub async fn analyze<R: Rng + ?Sized>(
    request: &ReadingRequest,
    current_year: i32,
    service: Option<&dyn InferenceService>,
    rng: &mut R,
) -> Result<Reading> {
    let validated = request.validate()?;
    let groundwork = Groundwork::lay(&validated)?;

    if let Some(service) = service {
        match service.consult(&groundwork.chart, &validated.question).await {
            Ok(answer) => return Ok(groundwork.remote(answer)),
            Err(e) => {
                tracing::warn!("{} failed, falling back to local analysis: {}", service.name(), e);
            }
        }
    }

    groundwork.local(current_year, rng)
}
