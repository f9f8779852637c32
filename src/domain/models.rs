use serde::{Deserialize, Serialize};

/// One of the six inputs on the contact form, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Company,
    Subject,
    Message,
}

impl FormField {
    /// Every field in validation (and tab) order.
    pub const ALL: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Company,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "First name",
            FormField::LastName => "Last name",
            FormField::Email => "Email",
            FormField::Company => "Company",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::FirstName => "John",
            FormField::LastName => "Doe",
            FormField::Email => "john@example.com",
            FormField::Company => "Your company name",
            FormField::Subject => "How can we help?",
            FormField::Message => "Tell us more about your needs...",
        }
    }

    /// Maximum length in characters, counted after trimming.
    pub fn max_len(self) -> usize {
        match self {
            FormField::FirstName | FormField::LastName => 100,
            FormField::Email => 255,
            FormField::Company | FormField::Subject => 200,
            FormField::Message => 5000,
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Company)
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FormField::Message)
    }
}

/// Raw, untrimmed form input exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A validated, trimmed contact submission ready to be inserted.
///
/// Field names match the columns of the `contact_submissions` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
}
