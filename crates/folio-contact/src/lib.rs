//! Contact form, toast notifications and email delivery.
//!
//! The form validates locally, hands a [`ContactMessage`] to a [`Mailer`]
//! on a worker thread, and turns the outcome into exactly one toast. The
//! owner notification decides the outcome; the auto-reply to the sender is
//! best effort.

mod delivery;
mod form;
mod mailer;
mod toast;

pub use delivery::{ContactSender, Templates, deliver};
pub use form::{ContactForm, ContactMessage, Field, SubmitError, ValidationError};
pub use mailer::{EmailJsMailer, MailError, Mailer};
pub use toast::{TOAST_LIFETIME_MS, Toast, ToastKind, Toasts};
