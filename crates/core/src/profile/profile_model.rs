use serde::{Deserialize, Serialize};

use crate::risk::RiskCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    Verified,
    #[default]
    Unverified,
}

/// Profile as returned by `GET /profile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub risk_profile: Option<RiskCategory>,
    #[serde(default)]
    pub kyc_status: Option<KycStatus>,
}

impl UserProfile {
    /// Stored risk profile, falling back to moderate when none was saved.
    pub fn effective_risk_profile(&self) -> RiskCategory {
        self.risk_profile.unwrap_or_default()
    }

    pub fn effective_kyc_status(&self) -> KycStatus {
        self.kyc_status.unwrap_or_default()
    }
}

/// Body of `PUT /profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub risk_profile: RiskCategory,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub kyc_status: Option<KycStatus>,
}

impl ProfileUpdate {
    pub fn with_risk_profile(risk_profile: RiskCategory) -> Self {
        Self {
            name: None,
            risk_profile,
            kyc_status: None,
        }
    }
}
