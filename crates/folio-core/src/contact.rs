//! Contact form model.

use serde::Serialize;

use crate::error::ContactError;

/// Field values of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Check every field, reporting the first failure in form order.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.subject.trim().is_empty() {
            return Err(ContactError::MissingSubject);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One `@`, non-empty local part, and a dotted domain with no empty labels.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
        && !email.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Let's build something.".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(form().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields() {
        let mut f = form();
        f.name = "  ".into();
        assert_eq!(f.validate(), Err(ContactError::MissingName));

        let mut f = form();
        f.email.clear();
        assert_eq!(f.validate(), Err(ContactError::MissingEmail));

        let mut f = form();
        f.subject.clear();
        assert_eq!(f.validate(), Err(ContactError::MissingSubject));

        let mut f = form();
        f.message = "\n".into();
        assert_eq!(f.validate(), Err(ContactError::MissingMessage));
    }

    #[test]
    fn test_invalid_emails() {
        for bad in [
            "ada",
            "@example.com",
            "ada@example",
            "ada@@example.com",
            "ada@ex..com",
            "a da@x.io",
        ] {
            let mut f = form();
            f.email = bad.into();
            assert_eq!(f.validate(), Err(ContactError::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn test_clear() {
        let mut f = form();
        f.clear();
        assert_eq!(f, ContactForm::default());
    }
}
