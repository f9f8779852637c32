//! Client-side validation of the contact form.
//!
//! Every field is trimmed, then checked in a fixed order. Only the first
//! violation is reported so the user sees one actionable message at a time.

use std::sync::LazyLock;

use regex::Regex;

use super::errors::{DomainResult, ValidationError, ViolationKind};
use super::models::{ContactForm, ContactSubmission, FormField};

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

/// Validates raw contact form input into a [`ContactSubmission`].
///
/// # Examples
///
/// ```
/// use optalpha_site::domain::{ContactForm, ContactValidator};
///
/// let form = ContactForm {
///     first_name: " John ".to_string(),
///     last_name: "Doe".to_string(),
///     email: "john@example.com".to_string(),
///     company: "   ".to_string(),
///     subject: "Demo request".to_string(),
///     message: "Please contact me".to_string(),
/// };
/// let record = ContactValidator::validate(&form).unwrap();
/// assert_eq!(record.first_name, "John");
/// assert_eq!(record.company, None);
/// ```
pub struct ContactValidator;

impl ContactValidator {
    pub fn validate(form: &ContactForm) -> DomainResult<ContactSubmission> {
        let first_name = Self::check(form, FormField::FirstName)?;
        let last_name = Self::check(form, FormField::LastName)?;
        let email = Self::check(form, FormField::Email)?;
        let company = Self::check(form, FormField::Company)?;
        let subject = Self::check(form, FormField::Subject)?;
        let message = Self::check(form, FormField::Message)?;

        Ok(ContactSubmission {
            first_name,
            last_name,
            email,
            company: if company.is_empty() { None } else { Some(company) },
            subject,
            message,
        })
    }

    /// Returns the trimmed value of `field`, or the first constraint it breaks.
    fn check(form: &ContactForm, field: FormField) -> DomainResult<String> {
        let value = form.value(field).trim();

        if value.is_empty() {
            if field.is_required() {
                return Err(ValidationError::new(field, ViolationKind::Required));
            }
            return Ok(String::new());
        }

        let max = field.max_len();
        if value.chars().count() > max {
            return Err(ValidationError::new(field, ViolationKind::TooLong { max }));
        }

        if field == FormField::Email && !Self::is_valid_email(value) {
            return Err(ValidationError::new(field, ViolationKind::InvalidEmail));
        }

        Ok(value.to_string())
    }

    pub fn is_valid_email(candidate: &str) -> bool {
        EMAIL_SHAPE.is_match(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            company: String::new(),
            subject: "Demo request".to_string(),
            message: "Please contact me".to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let mut form = valid_form();
        form.first_name = "  John\t".to_string();
        form.email = " john@example.com ".to_string();
        form.company = " Acme Capital ".to_string();
        form.message = "\nPlease contact me\n".to_string();

        let record = ContactValidator::validate(&form).unwrap();
        assert_eq!(record.first_name, "John");
        assert_eq!(record.email, "john@example.com");
        assert_eq!(record.company.as_deref(), Some("Acme Capital"));
        assert_eq!(record.message, "Please contact me");
    }

    #[test]
    fn test_empty_company_is_absent() {
        let record = ContactValidator::validate(&valid_form()).unwrap();
        assert_eq!(record.company, None);

        let mut form = valid_form();
        form.company = "    ".to_string();
        let record = ContactValidator::validate(&form).unwrap();
        assert_eq!(record.company, None);
    }

    #[test]
    fn test_every_required_field_is_enforced() {
        for field in FormField::ALL.into_iter().filter(|f| f.is_required()) {
            let mut form = valid_form();
            *form.value_mut(field) = "   ".to_string();

            let err = ContactValidator::validate(&form).unwrap_err();
            assert_eq!(err.field, field);
            assert_eq!(err.kind, ViolationKind::Required);
            assert_eq!(err.to_string(), format!("{} is required", field.label()));
        }
    }

    #[test]
    fn test_length_bounds() {
        for field in FormField::ALL {
            let max = field.max_len();
            let mut form = valid_form();
            *form.value_mut(field) = if field == FormField::Email {
                format!("{}@example.com", "a".repeat(max))
            } else {
                "x".repeat(max + 1)
            };

            let err = ContactValidator::validate(&form).unwrap_err();
            assert_eq!(err.field, field);
            assert_eq!(err.kind, ViolationKind::TooLong { max });
            assert!(err.to_string().contains(&format!("at most {max} characters")));
        }
    }

    #[test]
    fn test_length_at_bound_is_accepted() {
        let mut form = valid_form();
        form.first_name = "x".repeat(100);
        form.message = "m".repeat(5000);
        assert!(ContactValidator::validate(&form).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut form = valid_form();
        form.first_name = "é".repeat(100);
        assert!(ContactValidator::validate(&form).is_ok());
    }

    #[test]
    fn test_malformed_emails_are_rejected() {
        let bad = [
            "john",
            "john@",
            "@example.com",
            "john@example",
            "john doe@example.com",
            "john@@example.com",
            ".john@example.com",
            "john.@example.com",
            "jo..hn@example.com",
            "john@-example.com",
            "john@example.c",
        ];
        for email in bad {
            let mut form = valid_form();
            form.email = email.to_string();
            let err = ContactValidator::validate(&form).unwrap_err();
            assert_eq!(err.kind, ViolationKind::InvalidEmail, "accepted {email}");
            assert_eq!(err.to_string(), "Please enter a valid email address");
        }
    }

    #[test]
    fn test_wellformed_emails_are_accepted() {
        for email in ["john@example.com", "j.doe+fx@mail.example.co.in", "a_b@x-y.io"] {
            assert!(ContactValidator::is_valid_email(email), "rejected {email}");
        }
    }

    #[test]
    fn test_first_violation_wins() {
        let form = ContactForm {
            first_name: String::new(),
            last_name: String::new(),
            email: "nope".to_string(),
            ..ContactForm::default()
        };
        let err = ContactValidator::validate(&form).unwrap_err();
        assert_eq!(err.field, FormField::FirstName);

        let mut form = valid_form();
        form.email = "nope".to_string();
        form.subject = String::new();
        let err = ContactValidator::validate(&form).unwrap_err();
        assert_eq!(err.field, FormField::Email);
    }
}
