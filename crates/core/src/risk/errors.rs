use thiserror::Error;

use super::QuestionId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    #[error("Questionnaire incomplete, unanswered: {}", join_ids(.missing))]
    IncompleteAnswers { missing: Vec<QuestionId> },

    #[error("Score {score} is not an option for question '{question}'")]
    InvalidScore { question: QuestionId, score: u8 },

    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("Unknown risk profile: {0}")]
    UnknownCategory(String),
}

fn join_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
