//! Bazi Verdict - Entry Point
//!
//! Builds a chart from the command line, asks the optional inference
//! service for a reading and falls back to the local engine, then prints
//! the result as JSON or text.

use bazi_verdict::core::config::EngineConfig;
use bazi_verdict::core::error::Result;
use bazi_verdict::core::types::Position;
use bazi_verdict::llm::{InferenceService, LlmClient, LlmOracle};
use bazi_verdict::reading::{analyze, current_year, Reading, ReadingRequest};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tokio::runtime::Runtime;

/// Four-pillar YES / NO / NOT NOW reading
#[derive(Parser, Debug)]
#[command(name = "bazi-verdict")]
#[command(about = "Build a Bazi chart and answer a yes/no question")]
struct Args {
    /// male or female
    #[arg(long)]
    gender: String,

    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    date: String,

    /// Birth time, HH:MM (only the hour matters)
    #[arg(long)]
    time: String,

    /// The yes/no question
    #[arg(long, short = 'q')]
    question: String,

    /// Year to read against (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Seed for verse selection (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the inference service and use only the local engine
    #[arg(long)]
    local: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bazi_verdict=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let service = if args.local || !config.llm.enabled {
        None
    } else {
        match LlmClient::from_config(&config.llm) {
            Ok(client) => Some(LlmOracle::new(client)),
            Err(e) => {
                tracing::warn!("Inference service unavailable ({}) - using local engine", e);
                None
            }
        }
    };

    let mut rng = match args.seed.or(config.verse_seed) {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let request = ReadingRequest::new(args.gender, args.date, args.time, args.question);
    let year = args.year.unwrap_or_else(current_year);

    let rt = Runtime::new()?;
    let reading = rt.block_on(analyze(
        &request,
        year,
        service.as_ref().map(|s| s as &dyn InferenceService),
        &mut rng,
    ))?;

    match args.format {
        OutputFormat::Text => print_text(&reading, year),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reading)?),
    }

    Ok(())
}

fn print_text(reading: &Reading, year: i32) {
    let chart = &reading.chart;

    println!("=== BAZI READING ({}) ===", year);
    println!("Born {} {} ({})", chart.birth_date, chart.birth_time, chart.gender);
    println!();
    for position in Position::ALL {
        let pillar = chart.pillar(position);
        println!(
            "  {:<6} {:<5} {:<5} ({})",
            position.to_string(),
            pillar.stem.to_string(),
            pillar.branch.to_string(),
            pillar.element
        );
    }
    println!();
    println!(
        "Day master: {} {} ({}, {:.1})",
        chart.day_master.stem,
        chart.day_master.element,
        reading.day_master_strength.category,
        reading.day_master_strength.value
    );
    println!("Structure:  {}", reading.structure.label);
    println!(
        "Prosperity: {} ({})",
        reading.prosperity.branch, reading.prosperity.status
    );
    if let Some(analysis) = &reading.analysis {
        println!("Score:      {}", analysis.compatibility_score);
    }
    println!();
    println!("{}", reading.verdict);
    println!("\"{}\"", reading.verse);
    println!("{}", reading.teaser);
    println!();
    println!("(method: {:?})", reading.method);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> std::result::Result<Args, clap::Error> {
        let mut argv = vec![
            "bazi-verdict",
            "--gender",
            "male",
            "--date",
            "1990-01-01",
            "--time",
            "08:00",
            "-q",
            "Will it rain?",
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv)
    }

    #[test]
    fn test_format_defaults_to_json() {
        assert_eq!(parse(&[]).unwrap().format, OutputFormat::Json);
    }

    #[test]
    fn test_format_accepts_text() {
        assert_eq!(parse(&["--format", "text"]).unwrap().format, OutputFormat::Text);
    }

    #[test]
    fn test_format_rejects_unknown_value() {
        let err = parse(&["--format", "txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
