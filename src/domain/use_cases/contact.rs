use validator::Validate;

use crate::{
    entities::contact::{ContactForm, ContactResponse},
    errors::AppError,
};

/// Relays contact-form submissions to the configured third-party webhook.
/// Nothing is persisted locally; the webhook's JSON `result` field decides
/// success.
pub struct ContactRelay {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl ContactRelay {
    pub fn new(webhook_url: Option<String>) -> Self {
        ContactRelay {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }

    pub async fn send(&self, form: ContactForm) -> Result<ContactResponse, AppError> {
        form.validate()?;

        let url = self.webhook_url.as_deref().ok_or_else(|| {
            AppError::InternalError("Contact webhook is not configured".into())
        })?;

        let response = self
            .client
            .post(url)
            .form(&[
                ("name", form.name.as_str()),
                ("email", form.email.as_str()),
                ("message", form.message.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::RelayFailure(e.to_string()))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::RelayFailure(format!("Invalid relay response: {}", e)))?;

        match body.get("result").and_then(|v| v.as_str()) {
            Some("success") => Ok(ContactResponse {
                message: "Your message has been sent.".to_string(),
            }),
            _ => Err(AppError::RelayFailure("Relay rejected the message".into())),
        }
    }
}
