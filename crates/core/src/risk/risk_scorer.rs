use log::debug;

use super::{CompletedAnswers, QuizAnswers, RiskCategory, RiskError};
use crate::constants::{AGGRESSIVE_MIN_SCORE, MODERATE_MIN_SCORE};

/// Stateless questionnaire classifier.
pub struct RiskScorer;

impl RiskScorer {
    /// True once every one of the six questions has a valid answer, i.e.
    /// exactly when [`RiskScorer::classify`] succeeds.
    pub fn is_complete(answers: &QuizAnswers) -> bool {
        CompletedAnswers::try_from(answers).is_ok()
    }

    /// Classifies a finished questionnaire.
    ///
    /// Partial answer sets are rejected with
    /// [`RiskError::IncompleteAnswers`] rather than scored.
    pub fn classify(answers: &QuizAnswers) -> Result<RiskCategory, RiskError> {
        let completed = CompletedAnswers::try_from(answers)?;
        let category = completed.classify();
        debug!("Questionnaire scored {} -> {}", completed.total(), category);
        Ok(category)
    }

    /// Maps a questionnaire total to its tier. Lower bounds are inclusive.
    pub fn category_for_score(total: u32) -> RiskCategory {
        if total >= AGGRESSIVE_MIN_SCORE {
            RiskCategory::Aggressive
        } else if total >= MODERATE_MIN_SCORE {
            RiskCategory::Moderate
        } else {
            RiskCategory::Conservative
        }
    }
}
