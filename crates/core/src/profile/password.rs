use serde::{Deserialize, Serialize};

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::errors::ValidationError;

/// Body of `POST /profile/change-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Local checks run before a password change is sent upstream.
///
/// Verifying the current password is left to the API.
pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<PasswordChangeRequest, ValidationError> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err(ValidationError::MissingPasswordFields);
    }
    // Counted in UTF-16 code units, as browsers count string length.
    if new.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    if new != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(PasswordChangeRequest {
        current_password: current.to_string(),
        new_password: new.to_string(),
    })
}
