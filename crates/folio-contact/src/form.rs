//! Contact form state and validation.

use serde_json::{Value, json};

use crate::mailer::MailError;
use crate::toast::{Toast, Toasts};

/// An input of the contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "email@example.com",
            Field::Subject => "Project Inquiry",
            Field::Message => "Tell me about your project...",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }
}

/// Why the form refused to submit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Required(Field),
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a message is already being sent")]
    InFlight,
}

/// A validated message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Parameters for the owner notification template.
    pub fn notification_params(&self) -> Value {
        json!({
            "from_name": self.name,
            "from_email": self.email,
            "subject": self.subject,
            "message": self.message,
        })
    }

    /// Parameters for the auto-reply template.
    pub fn auto_reply_params(&self) -> Value {
        json!({
            "to_email": self.email,
            "name": self.name,
            "title": self.subject,
        })
    }
}

/// Loose `local@domain` check, close to what a browser accepts for an email input.
fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// The contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    focus: Field,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused field. Ignored while sending.
    pub fn insert(&mut self, ch: char) {
        if self.submitting {
            return;
        }
        if ch == '\n' && self.focus != Field::Message {
            return;
        }
        let focus = self.focus;
        self.value_mut(focus).push(ch);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if self.submitting {
            return;
        }
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Check every field is filled and the email looks like one.
    ///
    /// Values are sent as typed. Only the email address loses surrounding
    /// whitespace, as an email input does.
    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        for field in Field::ALL {
            if self.value(field).trim().is_empty() {
                return Err(ValidationError::Required(field));
            }
        }
        let email = self.email.trim();
        if !is_email(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        Ok(ContactMessage {
            name: self.name.clone(),
            email: email.to_string(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }

    /// Validate and mark the form as sending.
    ///
    /// On error nothing changes and no message should be sent; the focus moves
    /// to the offending field.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        match self.validate() {
            Ok(message) => {
                self.submitting = true;
                Ok(message)
            }
            Err(e) => {
                self.focus = match &e {
                    ValidationError::Required(field) => *field,
                    ValidationError::InvalidEmail(_) => Field::Email,
                };
                Err(e.into())
            }
        }
    }

    /// Apply the delivery outcome: one toast either way, inputs cleared only
    /// on success.
    pub fn finish_submit(&mut self, outcome: &Result<(), MailError>, toasts: &mut Toasts, now_ms: u64) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                toasts.push(Toast::sent(now_ms));
                let focus = self.focus;
                *self = Self {
                    focus,
                    ..Self::default()
                };
            }
            Err(e) => {
                log::warn!("contact message failed: {e}");
                toasts.push(Toast::send_failed(now_ms));
            }
        }
    }
}
