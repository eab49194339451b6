//! Command-line arguments.
//!
//! Usage:
//!   wealthdash portfolio <HOLDINGS_JSON> [--as-of <TIMESTAMP>]
//!   wealthdash dashboard <SUMMARY_JSON>
//!   wealthdash risk [ANSWERS_JSON] [--answer <ID=SCORE>]...
//!   wealthdash questions

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wealthdash_core::risk::QuestionId;

#[derive(Parser, Debug)]
#[command(name = "wealthdash")]
#[command(version, about = "Derive dashboard metrics from fetched API payloads")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Totals, per-holding metrics and charts from a `GET /portfolio` payload
    Portfolio {
        /// JSON array of holdings
        path: PathBuf,

        /// Reference time for "last updated" labels (defaults to now)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Dashboard charts from a `GET /dashboard/summary` payload
    Dashboard {
        /// JSON dashboard summary
        path: PathBuf,
    },

    /// Score the risk questionnaire
    Risk {
        /// JSON object mapping question id to option score
        path: Option<PathBuf>,

        /// Individual answers, applied after the file (e.g. `--answer age=3`)
        #[arg(long = "answer", value_parser = parse_answer)]
        answers: Vec<(QuestionId, u8)>,
    },

    /// Print the questionnaire
    Questions,
}

fn parse_answer(raw: &str) -> Result<(QuestionId, u8), String> {
    let (id, score) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=SCORE, got '{}'", raw))?;
    let id: QuestionId = id.parse().map_err(|e| format!("{}", e))?;
    let score: u8 = score
        .trim()
        .parse()
        .map_err(|_| format!("invalid score '{}'", score))?;
    Ok((id, score))
}
