use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("{0}")]
    Validation(String),
    #[error("Profile with ID {0} not found.")]
    NotFound(i64),
    #[error("an internal error occurred")]
    Internal,
}

/// A stored person profile. Ids are assigned by the store and never change
/// for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// Caller-supplied field values for create and update.
///
/// Names are optional here so that a payload missing them still decodes and
/// is rejected by the store's own validation rather than by the
/// deserializer. Any `id` in the payload is dropped at decode; the store
/// owns id assignment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl ProfileData {
    /// Checks the field-presence rules for create: first and last name must
    /// be present and not whitespace-only.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        if first.trim().is_empty() || last.trim().is_empty() {
            return Err(ProfileError::Validation(
                "First name and last name are required.".to_string(),
            ));
        }
        Ok(())
    }
}
