use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    email_address::EmailAddress,
    macros::{id, nutype_string},
    validation::{ValidationError, Validator},
};

id!(ContactMessageId);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub author: ContactMessageAuthor,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
    pub status: ContactMessageStatus,
    pub last_error: Option<String>,
    pub attempts: i32,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
}

/// A validated contact message that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
}

nutype_string!(ContactMessageAuthorName(validate(
    len_char_min = 1,
    len_char_max = 255
)));
nutype_string!(ContactMessageSubject(validate(
    len_char_min = 1,
    len_char_max = 500
)));
nutype_string!(ContactMessageContent(validate(
    len_char_min = 1,
    len_char_max = 10000
)));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMessageStatus {
    Pending,
    Sent,
    Failed,
}

impl ContactMessageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ContactMessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown contact message status: {0:?}")]
pub struct UnknownContactMessageStatus(pub String);

impl FromStr for ContactMessageStatus {
    type Err = UnknownContactMessageStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "sent" => Ok(Self::Sent),
            "failed" => Ok(Self::Failed),
            _ => Err(UnknownContactMessageStatus(s.into())),
        }
    }
}

/// A status transition reported by the delivery worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageStatusUpdate {
    pub status: ContactMessageStatus,
    /// Replaces the stored error only if set.
    pub last_error: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Queue event announcing that a contact message is ready for delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessageEvent {
    pub message_id: ContactMessageId,
}

/// Raw contact form input as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessageForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Hidden form field that only bots fill in.
    pub honeypot: Option<String>,
}

impl ContactMessageForm {
    pub fn is_spam(&self) -> bool {
        self.honeypot.as_deref().is_some_and(|x| !x.is_empty())
    }

    pub fn validate(self) -> Result<NewContactMessage, ValidationError> {
        let mut validator = Validator::new();

        let name = validator.check(
            "name",
            "must be between 1 and 255 characters",
            ContactMessageAuthorName::try_new(self.name),
        );
        let email = validator.check(
            "email",
            "must be a valid email address",
            EmailAddress::try_new(self.email),
        );
        let subject = validator.check(
            "subject",
            "must be between 1 and 500 characters",
            ContactMessageSubject::try_new(self.subject),
        );
        let content = validator.check(
            "message",
            "must be between 1 and 10000 characters",
            ContactMessageContent::try_new(self.message),
        );

        let (Some(name), Some(email), Some(subject), Some(content)) =
            (name, email, subject, content)
        else {
            return Err(validator.into_error());
        };

        Ok(NewContactMessage {
            author: ContactMessageAuthor { name, email },
            subject,
            content,
        })
    }
}
