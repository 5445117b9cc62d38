use chrono::{DateTime, Utc};
use messaging_models::recipient::{Recipient, RecipientForm, RecipientUpdateForm};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ApiRecipient {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipient> for ApiRecipient {
    fn from(value: Recipient) -> Self {
        Self {
            id: *value.id,
            email: value.email.into_inner(),
            name: value.name.into_inner(),
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiRecipientCreate {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    /// Defaults to `true`
    #[serde(default, alias = "isActive")]
    pub is_active: Option<bool>,
}

impl From<ApiRecipientCreate> for RecipientForm {
    fn from(value: ApiRecipientCreate) -> Self {
        Self {
            email: value.email,
            name: value.name,
            is_active: value.is_active,
        }
    }
}

/// Partial update. Omitted (or `null`) fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiRecipientUpdate {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "isActive")]
    pub is_active: Option<bool>,
}

impl From<ApiRecipientUpdate> for RecipientUpdateForm {
    fn from(value: ApiRecipientUpdate) -> Self {
        Self {
            email: value.email,
            name: value.name,
            is_active: value.is_active,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ApiRecipientFilter {
    /// Only return active recipients
    #[serde(default)]
    pub active: bool,
}
