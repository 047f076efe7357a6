//! Transactional email transport.

use std::time::Duration;

use folio_config::EmailConfig;
use serde::Serialize;
use serde_json::Value;

/// Why a send did not go through.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("email service rejected the request with status {0}")]
    Rejected(u16),
    #[error("email transport failed: {0}")]
    Transport(String),
    #[error("invalid email payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Something that can deliver a templated email.
pub trait Mailer: Send + Sync {
    /// Send `params` through the template `template_id`.
    fn send(&self, template_id: &str, params: &Value) -> Result<(), MailError>;
}

/// Request body for the EmailJS REST API.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a Value,
}

/// [`Mailer`] backed by the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsMailer {
    endpoint: String,
    service_id: String,
    public_key: String,
    timeout: Duration,
}

impl EmailJsMailer {
    pub fn new(
        endpoint: impl Into<String>,
        service_id: impl Into<String>,
        public_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            service_id: service_id.into(),
            public_key: public_key.into(),
            timeout,
        }
    }

    pub fn from_config(config: &EmailConfig) -> Self {
        Self::new(
            &config.endpoint,
            &config.service_id,
            &config.public_key,
            config.timeout(),
        )
    }

    fn request_body(&self, template_id: &str, params: &Value) -> Result<Value, MailError> {
        let request = SendRequest {
            service_id: &self.service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        };
        Ok(serde_json::to_value(request)?)
    }
}

impl Mailer for EmailJsMailer {
    fn send(&self, template_id: &str, params: &Value) -> Result<(), MailError> {
        let body = self.request_body(template_id, params)?;

        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(self.timeout))
            .build()
            .new_agent();

        match agent.post(&self.endpoint).send_json(&body) {
            Ok(_) => {
                log::debug!("sent template {template_id}");
                Ok(())
            }
            Err(ureq::Error::StatusCode(code)) => Err(MailError::Rejected(code)),
            Err(e) => Err(MailError::Transport(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let mailer = EmailJsMailer::from_config(&EmailConfig::default());
        let params = json!({ "name": "Ada" });
        let body = mailer.request_body("template_x", &params).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_g09wqkb",
                "template_id": "template_x",
                "user_id": "PuDH9f84JhCHa_L2u",
                "template_params": { "name": "Ada" },
            })
        );
    }

    #[test]
    fn test_unreachable_endpoint_is_transport_error() {
        let mailer = EmailJsMailer::new(
            "http://127.0.0.1:9/send",
            "service",
            "key",
            Duration::from_secs(2),
        );
        let err = mailer.send("template", &json!({})).unwrap_err();
        assert!(matches!(err, MailError::Transport(_)), "{err}");
    }
}
