//! The fixed risk-tolerance questionnaire.
//!
//! Six questions, four options each, scored 0 (least risk-tolerant) to 3.
//! Scoring is a fold over this table; there is no per-question logic.

use serde::Serialize;

use super::QuestionId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuizOption {
    pub label: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub options: [QuizOption; 4],
}

impl Question {
    /// Whether `score` belongs to one of this question's options.
    pub fn accepts(&self, score: u8) -> bool {
        self.options.iter().any(|o| o.score == score)
    }
}

const fn opt(label: &'static str, score: u8) -> QuizOption {
    QuizOption { label, score }
}

pub static QUESTIONS: [Question; 6] = [
    Question {
        id: QuestionId::Age,
        prompt: "What is your age group?",
        options: [
            opt("Under 30", 3),
            opt("30 – 45", 2),
            opt("46 – 60", 1),
            opt("Above 60", 0),
        ],
    },
    Question {
        id: QuestionId::Horizon,
        prompt: "What is your investment time horizon?",
        options: [
            opt("More than 10 years", 3),
            opt("5 – 10 years", 2),
            opt("2 – 5 years", 1),
            opt("Less than 2 years", 0),
        ],
    },
    Question {
        id: QuestionId::Income,
        prompt: "How stable is your current income?",
        options: [
            opt("Very stable (government/MNC job)", 3),
            opt("Mostly stable (private job)", 2),
            opt("Variable (freelance/business)", 1),
            opt("Uncertain / retired", 0),
        ],
    },
    Question {
        id: QuestionId::Loss,
        prompt: "If your portfolio dropped 20% in a month, what would you do?",
        options: [
            opt("Buy more — great opportunity", 3),
            opt("Hold and wait for recovery", 2),
            opt("Sell some to reduce exposure", 1),
            opt("Sell everything immediately", 0),
        ],
    },
    Question {
        id: QuestionId::Goal,
        prompt: "What is your primary investment goal?",
        options: [
            opt("Maximum wealth growth", 3),
            opt("Balanced growth and safety", 2),
            opt("Regular income", 1),
            opt("Capital preservation", 0),
        ],
    },
    Question {
        id: QuestionId::Experience,
        prompt: "How would you describe your investing experience?",
        options: [
            opt("Expert (F&O, direct equity)", 3),
            opt("Experienced (stocks, MFs)", 2),
            opt("Beginner (only FD/SIP)", 1),
            opt("None at all", 0),
        ],
    },
];

pub fn question(id: QuestionId) -> &'static Question {
    &QUESTIONS[id.index()]
}
