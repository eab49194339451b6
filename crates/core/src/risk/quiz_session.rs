use log::warn;
use serde::Serialize;

use super::{QuestionId, QuizAnswers, RiskCategory, RiskError, RiskScorer};
use crate::profile::ProfileUpdate;

/// Where an in-progress questionnaire stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "risk_profile")]
pub enum QuizState {
    NotStarted,
    InProgress,
    Complete,
    Scored(RiskCategory),
}

/// Caller-held questionnaire session.
///
/// The engine itself stays stateless; this only tracks the answers a user
/// has given and the last submitted result.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    answers: QuizAnswers,
    result: Option<RiskCategory>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> QuizState {
        if let Some(category) = self.result {
            QuizState::Scored(category)
        } else if self.answers.is_empty() {
            QuizState::NotStarted
        } else if RiskScorer::is_complete(&self.answers) {
            QuizState::Complete
        } else {
            QuizState::InProgress
        }
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn result(&self) -> Option<RiskCategory> {
        self.result
    }

    /// Records an answer. Changing an answer discards any earlier result.
    pub fn answer(&mut self, id: QuestionId, score: u8) -> Result<QuizState, RiskError> {
        self.answers.record(id, score)?;
        self.result = None;
        Ok(self.state())
    }

    /// Scores the questionnaire and returns the profile update to persist.
    pub fn submit(&mut self) -> Result<ProfileUpdate, RiskError> {
        let category = RiskScorer::classify(&self.answers).map_err(|e| {
            warn!("Rejected questionnaire submission: {}", e);
            e
        })?;
        self.result = Some(category);
        Ok(ProfileUpdate::with_risk_profile(category))
    }

    /// Re-opening the questionnaire starts from scratch.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.result = None;
    }
}
