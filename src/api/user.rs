//! HTTP client for the caller's own profile (`/user`).
//!
//! Profile metadata is merged server-side: fields sent here overwrite the
//! matching keys and leave the rest of the stored metadata alone.

use super::ApiError;
use crate::libs::http::Http;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

const USER_URL: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("No fields provided to update")]
    NoFieldsToUpdate,
}

/// Partial profile update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl ProfileUpdate {
    pub fn validate(self) -> Result<Self, ProfileError> {
        if self.email.is_none() && self.full_name.is_none() && self.metadata.is_none() {
            return Err(ProfileError::NoFieldsToUpdate);
        }
        let email = match self.email {
            Some(email) if email.trim().is_empty() => return Err(ProfileError::EmptyEmail),
            Some(email) => Some(email.trim().to_string()),
            None => None,
        };
        Ok(Self {
            email,
            full_name: self.full_name.map(|name| name.trim().to_string()),
            ..self
        })
    }
}

/// Account record returned after a profile update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
}

impl UserProfile {
    pub fn full_name(&self) -> Option<&str> {
        self.user_metadata.get("full_name").and_then(Value::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    user: UserProfile,
}

#[derive(Debug, Deserialize)]
struct DeleteResponse {
    #[serde(default)]
    deleted: bool,
}

#[derive(Debug, Clone)]
pub struct UserApi {
    http: Http,
}

impl UserApi {
    pub fn new(api_url: &str, token: Option<String>) -> Self {
        Self {
            http: Http::new(api_url, token),
        }
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, ApiError> {
        let update = update.validate()?;
        let response: ProfileResponse = self.http.put(USER_URL, &update).await?;
        Ok(response.user)
    }

    /// Deletes the caller's account. Returns whether the server confirmed it.
    pub async fn delete_profile(&self) -> Result<bool, ApiError> {
        let response: DeleteResponse = self.http.delete(USER_URL).await?;
        Ok(response.deleted)
    }
}
