//! Delivering a contact message off the UI thread.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use folio_config::EmailConfig;

use crate::form::ContactMessage;
use crate::mailer::{MailError, Mailer};

/// Template identifiers for the two emails a submission sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    /// Message to the site owner. Its outcome is the submission's outcome.
    pub notification: String,
    /// Acknowledgement to the sender. Failures are only logged.
    pub auto_reply: String,
}

impl Templates {
    pub fn from_config(config: &EmailConfig) -> Self {
        Self {
            notification: config.template_id.clone(),
            auto_reply: config.auto_reply_template_id.clone(),
        }
    }
}

/// Send the owner notification and, if it went through, the auto-reply.
///
/// Neither send is retried.
pub fn deliver(
    mailer: &dyn Mailer,
    templates: &Templates,
    message: &ContactMessage,
) -> Result<(), MailError> {
    mailer.send(&templates.notification, &message.notification_params())?;

    if let Err(e) = mailer.send(&templates.auto_reply, &message.auto_reply_params()) {
        log::warn!("auto-reply to {} failed: {e}", message.email);
    }
    Ok(())
}

/// Runs deliveries on worker threads and hands outcomes back to the UI loop.
pub struct ContactSender {
    mailer: Arc<dyn Mailer>,
    templates: Templates,
    tx: Sender<Result<(), MailError>>,
    rx: Receiver<Result<(), MailError>>,
}

impl ContactSender {
    pub fn new(mailer: Arc<dyn Mailer>, templates: Templates) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            mailer,
            templates,
            tx,
            rx,
        }
    }

    /// Start delivering `message` in the background.
    pub fn submit(&self, message: ContactMessage) {
        let mailer = Arc::clone(&self.mailer);
        let templates = self.templates.clone();
        let tx = self.tx.clone();

        thread::spawn(move || {
            let outcome = deliver(mailer.as_ref(), &templates, &message);
            // The receiver only goes away when the app is shutting down.
            let _ = tx.send(outcome);
        });
    }

    /// A finished delivery, if one is ready.
    pub fn poll(&self) -> Option<Result<(), MailError>> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Block until a delivery finishes.
    pub fn wait(&self) -> Option<Result<(), MailError>> {
        self.rx.recv().ok()
    }
}

impl std::fmt::Debug for ContactSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactSender")
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::Value;

    use super::*;
    use crate::form::{ContactForm, Field, SubmitError};
    use crate::toast::{ToastKind, Toasts};

    /// Mailer that records calls and fails chosen templates.
    #[derive(Default)]
    struct ScriptedMailer {
        fail: Vec<&'static str>,
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl ScriptedMailer {
        fn failing(templates: &[&'static str]) -> Self {
            Self {
                fail: templates.to_vec(),
                ..Default::default()
            }
        }

        fn templates_called(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|(t, _)| t.clone())
                .collect()
        }
    }

    impl Mailer for ScriptedMailer {
        fn send(&self, template_id: &str, params: &Value) -> Result<(), MailError> {
            self.calls
                .lock()
                .unwrap()
                .push((template_id.to_string(), params.clone()));
            if self.fail.iter().any(|t| *t == template_id) {
                Err(MailError::Rejected(400))
            } else {
                Ok(())
            }
        }
    }

    fn templates() -> Templates {
        Templates {
            notification: "notify".to_string(),
            auto_reply: "reply".to_string(),
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Subject, "Hello");
        form.set(Field::Message, "Let's build something.");
        form
    }

    fn submit_sync(form: &mut ContactForm, mailer: &ScriptedMailer, toasts: &mut Toasts) {
        let message = form.begin_submit().unwrap();
        let outcome = deliver(mailer, &templates(), &message);
        form.finish_submit(&outcome, toasts, 0);
    }

    #[test]
    fn test_both_sends_succeed() {
        let mailer = ScriptedMailer::default();
        let mut form = filled_form();
        let mut toasts = Toasts::new();
        submit_sync(&mut form, &mailer, &mut toasts);

        assert_eq!(mailer.templates_called(), vec!["notify", "reply"]);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn test_empty_name_sends_nothing() {
        let mailer = ScriptedMailer::default();
        let mut form = filled_form();
        form.set(Field::Name, "");

        let result = form.begin_submit();
        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert!(mailer.templates_called().is_empty());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_auto_reply_failure_still_succeeds() {
        let mailer = ScriptedMailer::failing(&["reply"]);
        let mut form = filled_form();
        let mut toasts = Toasts::new();
        submit_sync(&mut form, &mailer, &mut toasts);

        assert_eq!(mailer.templates_called(), vec!["notify", "reply"]);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().unwrap().kind, ToastKind::Success);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_notification_failure_keeps_input() {
        let mailer = ScriptedMailer::failing(&["notify"]);
        let mut form = filled_form();
        let mut toasts = Toasts::new();
        submit_sync(&mut form, &mailer, &mut toasts);

        assert_eq!(mailer.templates_called(), vec!["notify"]);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().unwrap().kind, ToastKind::Error);
        assert_eq!(form.value(Field::Name), "Ada");
        assert_eq!(form.value(Field::Message), "Let's build something.");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_notification_payload() {
        let mailer = ScriptedMailer::default();
        let message = filled_form().validate().unwrap();
        deliver(&mailer, &templates(), &message).unwrap();

        let calls = mailer.calls.lock().unwrap();
        assert_eq!(calls[0].1["from_name"], "Ada");
        assert_eq!(calls[1].1["to_email"], "ada@example.com");
        assert_eq!(calls[1].1["title"], "Hello");
    }

    #[test]
    fn test_background_sender_reports_outcome() {
        let mailer = Arc::new(ScriptedMailer::failing(&["notify"]));
        let sender = ContactSender::new(mailer.clone(), templates());
        let message = filled_form().validate().unwrap();

        sender.submit(message);
        let outcome = sender.wait().unwrap();
        assert!(matches!(outcome, Err(MailError::Rejected(400))));
        assert!(sender.poll().is_none());
        assert_eq!(mailer.templates_called(), vec!["notify"]);
    }
}
