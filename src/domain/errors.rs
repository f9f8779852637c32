use super::models::FormField;

/// Which constraint a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Required,
    TooLong { max: usize },
    InvalidEmail,
}

/// The first constraint violation found on a contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: FormField,
    pub kind: ViolationKind,
}

impl ValidationError {
    pub fn new(field: FormField, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ViolationKind::Required => {
                write!(f, "{} is required", self.field.label())
            }
            ViolationKind::TooLong { max } => {
                write!(f, "{} must be at most {} characters", self.field.label(), max)
            }
            ViolationKind::InvalidEmail => {
                write!(f, "Please enter a valid email address")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub type DomainResult<T> = Result<T, ValidationError>;
