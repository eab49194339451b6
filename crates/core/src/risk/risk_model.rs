use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::RiskError;
use crate::constants::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};

/// Identifier of one of the six fixed questionnaire questions.
///
/// Discriminants match the question's position in [`super::QUESTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    Age = 0,
    Horizon = 1,
    Income = 2,
    Loss = 3,
    Goal = 4,
    Experience = 5,
}

impl QuestionId {
    pub const ALL: [QuestionId; 6] = [
        QuestionId::Age,
        QuestionId::Horizon,
        QuestionId::Income,
        QuestionId::Loss,
        QuestionId::Goal,
        QuestionId::Experience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Age => "age",
            QuestionId::Horizon => "horizon",
            QuestionId::Income => "income",
            QuestionId::Loss => "loss",
            QuestionId::Goal => "goal",
            QuestionId::Experience => "experience",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RiskError::UnknownQuestion(s.to_string()))
    }
}

/// Ordered risk tolerance tiers, least to most tolerant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Conservative => "conservative",
            RiskCategory::Moderate => "moderate",
            RiskCategory::Aggressive => "aggressive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RiskCategory::Conservative => "Conservative",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::Aggressive => "Aggressive",
        }
    }

    /// Accent color used when rendering the profile badge.
    pub fn color(&self) -> &'static str {
        match self {
            RiskCategory::Conservative => COLOR_GREEN,
            RiskCategory::Moderate => COLOR_AMBER,
            RiskCategory::Aggressive => COLOR_RED,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskCategory::Conservative => {
                "You prefer capital safety over high returns. Best suited for FDs, debt funds, bonds, and blue-chip dividend stocks."
            }
            RiskCategory::Moderate => {
                "You seek steady growth with manageable risk. A balanced mix of equity and debt works best for you."
            }
            RiskCategory::Aggressive => {
                "You are comfortable with high volatility in pursuit of maximum returns. Direct equity, small-caps, and growth funds suit your profile."
            }
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskCategory {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(RiskCategory::Conservative),
            "moderate" => Ok(RiskCategory::Moderate),
            "aggressive" => Ok(RiskCategory::Aggressive),
            _ => Err(RiskError::UnknownCategory(s.to_string())),
        }
    }
}
