use chrono::{DateTime, Utc};
use messaging_models::contact::{ContactMessage, ContactMessageForm, ContactMessageStatus};
use serde::{Deserialize, Serialize};

/// Body of the public contact form. Missing fields are treated as empty and
/// reported by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    /// Honeypot field, hidden from human visitors
    #[serde(default, alias = "honeypot")]
    pub website: Option<String>,
}

impl From<ApiContactForm> for ContactMessageForm {
    fn from(value: ApiContactForm) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
            honeypot: value.website,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactAck {
    pub message: &'static str,
}

impl Default for ApiContactAck {
    fn default() -> Self {
        Self {
            message: "Thank you for your message",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: ContactMessageStatus,
    pub last_error: Option<String>,
    pub attempts: i32,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactMessage> for ApiContactMessage {
    fn from(value: ContactMessage) -> Self {
        Self {
            id: *value.id,
            name: value.author.name.into_inner(),
            email: value.author.email.into_inner(),
            subject: value.subject.into_inner(),
            message: value.content.into_inner(),
            status: value.status,
            last_error: value.last_error,
            attempts: value.attempts,
            sent_at: value.sent_at,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
