//! Profile module - profile payloads and local password-change checks.

mod password;
mod profile_model;

pub use password::{validate_password_change, PasswordChangeRequest};
pub use profile_model::{KycStatus, ProfileUpdate, UserProfile};
