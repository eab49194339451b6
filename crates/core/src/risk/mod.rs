//! Risk module - the fixed risk-tolerance questionnaire and its scoring.

mod errors;
mod questionnaire;
mod quiz_answers;
mod quiz_session;
mod risk_model;
mod risk_scorer;

pub use errors::RiskError;
pub use questionnaire::{question, Question, QuizOption, QUESTIONS};
pub use quiz_answers::{CompletedAnswers, QuizAnswers};
pub use quiz_session::{QuizSession, QuizState};
pub use risk_model::{QuestionId, RiskCategory};
pub use risk_scorer::RiskScorer;
