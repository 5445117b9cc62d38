use chrono::{DateTime, Utc};
use messaging_utils::patch::{Patch, PatchValue};

use crate::{
    email_address::EmailAddress,
    macros::{id, nutype_string},
    validation::{ValidationError, Validator},
};

id!(RecipientId);

#[derive(Debug, Clone, PartialEq, Eq, Patch)]
pub struct Recipient {
    #[no_patch]
    pub id: RecipientId,
    pub email: EmailAddress,
    pub name: RecipientName,
    pub is_active: bool,
    #[no_patch]
    pub created_at: DateTime<Utc>,
    #[no_patch]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipient {
    pub email: EmailAddress,
    pub name: RecipientName,
    pub is_active: bool,
}

nutype_string!(RecipientName(validate(len_char_min = 1, len_char_max = 255)));

const EMAIL_VIOLATION: &str = "must be a valid email address";
const NAME_VIOLATION: &str = "must be between 1 and 255 characters";

/// Raw input for creating a recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientForm {
    pub email: String,
    pub name: String,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
}

impl RecipientForm {
    pub fn validate(self) -> Result<NewRecipient, ValidationError> {
        let mut validator = Validator::new();

        let email = validator.check("email", EMAIL_VIOLATION, EmailAddress::try_new(self.email));
        let name = validator.check("name", NAME_VIOLATION, RecipientName::try_new(self.name));

        let (Some(email), Some(name)) = (email, name) else {
            return Err(validator.into_error());
        };

        Ok(NewRecipient {
            email,
            name,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

/// Raw input for a partial recipient update. `None` leaves a field untouched,
/// while `Some` always has to pass validation, even if it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientUpdateForm {
    pub email: Option<String>,
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

impl RecipientUpdateForm {
    pub fn validate(self) -> Result<RecipientPatch, ValidationError> {
        let mut validator = Validator::new();

        let email = self
            .email
            .map(|x| validator.check("email", EMAIL_VIOLATION, EmailAddress::try_new(x)));
        let name = self
            .name
            .map(|x| validator.check("name", NAME_VIOLATION, RecipientName::try_new(x)));

        validator.finish()?;

        Ok(RecipientPatch {
            email: email.flatten().into(),
            name: name.flatten().into(),
            is_active: PatchValue::from(self.is_active),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn admin() -> Recipient {
        Recipient {
            id: RecipientId::try_new(1).unwrap(),
            email: EmailAddress::try_new("admin@example.com").unwrap(),
            name: RecipientName::try_new("Admin User").unwrap(),
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn is_active_defaults_to_true() {
        let form = RecipientForm {
            email: "new@example.com".into(),
            name: "New Recipient".into(),
            is_active: None,
        };
        assert!(form.validate().unwrap().is_active);
    }

    #[test]
    fn explicit_inactive_is_kept() {
        let form = RecipientForm {
            email: "new@example.com".into(),
            name: "New Recipient".into(),
            is_active: Some(false),
        };
        assert!(!form.validate().unwrap().is_active);
    }

    #[test]
    fn create_requires_email_and_name() {
        let result = RecipientForm::default().validate().unwrap_err();
        assert_eq!(result.fields().collect::<Vec<_>>(), ["email", "name"]);
    }

    #[test]
    fn name_boundaries() {
        for (len, ok) in [(255, true), (256, false)] {
            let form = RecipientForm {
                email: "new@example.com".into(),
                name: "x".repeat(len),
                is_active: None,
            };
            assert_eq!(form.validate().is_ok(), ok, "name of length {len}");
        }
    }

    #[test]
    fn update_name_only() {
        // Arrange
        let form = RecipientUpdateForm {
            name: Some("Only Name Updated".into()),
            ..Default::default()
        };

        // Act
        let patch = form.validate().unwrap();
        let result = admin().update(patch.clone());

        // Assert
        assert_eq!(
            result,
            Recipient {
                name: RecipientName::try_new("Only Name Updated").unwrap(),
                ..admin()
            }
        );
        assert_eq!(result.clone().update(patch), result);
    }

    #[test]
    fn update_empty_strings_are_present() {
        let form = RecipientUpdateForm {
            email: Some(String::new()),
            name: Some(String::new()),
            is_active: Some(false),
        };
        let result = form.validate().unwrap_err();
        assert_eq!(result.fields().collect::<Vec<_>>(), ["email", "name"]);
    }

    #[test]
    fn update_without_fields() {
        let patch = RecipientUpdateForm::default().validate().unwrap();
        assert_eq!(patch, RecipientPatch::default());
        assert_eq!(admin().update(patch), admin());
    }
}
