use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{question, QuestionId, RiskCategory, RiskError, RiskScorer, QUESTIONS};

/// Answers recorded so far, keyed by question id.
///
/// Holds at most one score per question; recording again replaces the
/// previous answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizAnswers {
    scores: BTreeMap<QuestionId, u8>,
}

impl QuizAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the option score chosen for `id`.
    ///
    /// Rejects a score that is not one of the question's options.
    pub fn record(&mut self, id: QuestionId, score: u8) -> Result<(), RiskError> {
        if !question(id).accepts(score) {
            return Err(RiskError::InvalidScore {
                question: id,
                score,
            });
        }
        self.scores.insert(id, score);
        Ok(())
    }

    pub fn score(&self, id: QuestionId) -> Option<u8> {
        self.scores.get(&id).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Share of questions answered, rounded to a whole percent.
    pub fn progress_percent(&self) -> u32 {
        let answered = self.answered_count() as u32;
        let total = QUESTIONS.len() as u32;
        (answered * 100 + total / 2) / total
    }

    /// Question ids with no recorded answer, in questionnaire order.
    pub fn missing(&self) -> Vec<QuestionId> {
        QuestionId::ALL
            .into_iter()
            .filter(|id| !self.scores.contains_key(id))
            .collect()
    }

    /// Parses a `{ "question_id": score }` object, validating every score
    /// against the questionnaire.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let raw: BTreeMap<QuestionId, u8> = serde_json::from_str(json)?;
        let mut answers = Self::new();
        for (id, score) in raw {
            answers.record(id, score)?;
        }
        Ok(answers)
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }
}

impl FromIterator<(QuestionId, u8)> for QuizAnswers {
    fn from_iter<I: IntoIterator<Item = (QuestionId, u8)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// A fully answered questionnaire with every score validated.
///
/// Only obtainable through `TryFrom<&QuizAnswers>`, so classifying it
/// cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedAnswers {
    scores: [u8; 6],
}

impl CompletedAnswers {
    /// Sum of all six scores, in `0..=18`.
    pub fn total(&self) -> u32 {
        self.scores.iter().map(|&s| u32::from(s)).sum()
    }

    pub fn classify(&self) -> RiskCategory {
        RiskScorer::category_for_score(self.total())
    }
}

impl TryFrom<&QuizAnswers> for CompletedAnswers {
    type Error = RiskError;

    fn try_from(answers: &QuizAnswers) -> Result<Self, Self::Error> {
        let missing = answers.missing();
        if !missing.is_empty() {
            return Err(RiskError::IncompleteAnswers { missing });
        }

        let mut scores = [0u8; 6];
        for (&id, &score) in &answers.scores {
            // Answers may arrive deserialized rather than through `record`.
            if !question(id).accepts(score) {
                return Err(RiskError::InvalidScore {
                    question: id,
                    score,
                });
            }
            scores[id.index()] = score;
        }
        Ok(Self { scores })
    }
}
