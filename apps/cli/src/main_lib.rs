use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use wealthdash_core::constants::DISPLAY_DECIMAL_PRECISION;
use wealthdash_core::dashboard::{DashboardSummary, DashboardView};
use wealthdash_core::risk::{CompletedAnswers, QuizAnswers, RiskCategory, RiskScorer, QUESTIONS};
use wealthdash_core::utils::time_utils::parse_api_timestamp;
use wealthdash_core::{Holding, PortfolioOverview};

use crate::cli::Command;
use crate::config::{Config, LogFormat};

/// Logs go to stderr so stdout carries only the JSON result.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Result of scoring the questionnaire.
#[derive(Debug, Serialize)]
pub struct RiskReport {
    pub risk_profile: RiskCategory,
    pub score: u32,
    pub display_name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = read_file(path)?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn resolve_now(as_of: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    match as_of {
        Some(ts) => parse_api_timestamp(ts).with_context(|| format!("Invalid --as-of '{}'", ts)),
        None => Ok(Utc::now()),
    }
}

/// Executes a command and returns its JSON output.
pub fn run(command: Command) -> anyhow::Result<Value> {
    let output = match command {
        Command::Portfolio { path, as_of } => {
            let holdings: Vec<Holding> = load_json(&path)?;
            let now = resolve_now(as_of.as_deref())?;
            let overview = PortfolioOverview::from_holdings(&holdings, now);
            info!(
                "Portfolio: {} holdings, value {}, gain {}%",
                holdings.len(),
                overview.totals.total_value,
                overview
                    .totals
                    .gain_percent
                    .round_dp(DISPLAY_DECIMAL_PRECISION)
            );
            serde_json::to_value(overview)?
        }
        Command::Dashboard { path } => {
            let summary: DashboardSummary = load_json(&path)?;
            serde_json::to_value(DashboardView::from_summary(&summary))?
        }
        Command::Risk { path, answers } => {
            let mut quiz: QuizAnswers = match path {
                Some(p) => QuizAnswers::from_json(&read_file(&p)?)
                    .with_context(|| format!("Invalid answers in {}", p.display()))?,
                None => QuizAnswers::new(),
            };
            for (id, score) in answers {
                quiz.record(id, score)?;
            }
            debug!("{} of {} questions answered", quiz.answered_count(), QUESTIONS.len());

            if !RiskScorer::is_complete(&quiz) {
                warn!("Questionnaire has unanswered questions: {:?}", quiz.missing());
            }
            let completed = CompletedAnswers::try_from(&quiz)?;
            let category = completed.classify();
            info!("Risk profile: {}", category);
            serde_json::to_value(RiskReport {
                risk_profile: category,
                score: completed.total(),
                display_name: category.display_name(),
                description: category.description(),
                color: category.color(),
            })?
        }
        Command::Questions => serde_json::to_value(&QUESTIONS[..])?,
    };
    Ok(output)
}
