use serde_json::json;

use crate::config::NotificationConfig;
use crate::errors::{InternalError, NotificationError};

/// Payload for a test-drive confirmation email
#[derive(Debug, Clone)]
pub struct TestDriveNotification {
    pub customer_email: String,
    pub customer_name: String,
    pub car_name: String,
    pub date: String,
    pub time: String,
    pub phone: String,
}

/// Stateless outbound email boundary.
///
/// One JSON POST per message to a transactional-email HTTP API, plus an
/// internal copy to the operator address when one is configured. No retry or
/// backoff: a delivery failure surfaces as a single error which callers log
/// and swallow, because confirmation email is a courtesy, not part of the
/// booking's correctness.
pub struct NotificationService {
    client: reqwest::Client,
    config: NotificationConfig,
}

impl NotificationService {
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Send the customer confirmation and, if configured, an operator copy.
    ///
    /// With no API key configured this is a no-op so local runs and tests
    /// need no network.
    pub async fn send_test_drive_confirmation(
        &self,
        notification: &TestDriveNotification,
    ) -> Result<(), InternalError> {
        let Some(api_key) = &self.config.api_key else {
            tracing::debug!(
                "Email delivery disabled, skipping confirmation for {}",
                notification.customer_email
            );
            return Ok(());
        };

        let subject = format!("Test drive confirmed: {}", notification.car_name);
        let body = format!(
            "Hi {},\n\nYour test drive of the {} is booked for {} at {}.\n\
             We will call {} if anything changes.\n\nSee you soon!",
            notification.customer_name,
            notification.car_name,
            notification.date,
            notification.time,
            notification.phone,
        );

        self.deliver(api_key, &notification.customer_email, &subject, &body)
            .await?;

        if let Some(operator) = &self.config.operator_address {
            let internal_subject = format!(
                "New test drive booking: {} ({})",
                notification.car_name, notification.customer_name
            );
            let internal_body = format!(
                "Customer: {} <{}>\nPhone: {}\nCar: {}\nWhen: {} {}",
                notification.customer_name,
                notification.customer_email,
                notification.phone,
                notification.car_name,
                notification.date,
                notification.time,
            );
            self.deliver(api_key, operator, &internal_subject, &internal_body)
                .await?;
        }

        Ok(())
    }

    async fn deliver(
        &self,
        api_key: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), InternalError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&json!({
                "from": self.config.from_address,
                "to": [to],
                "subject": subject,
                "text": body,
            }))
            .send()
            .await
            .map_err(NotificationError::Request)?;

        if !response.status().is_success() {
            return Err(NotificationError::Rejected(response.status().as_u16()).into());
        }

        Ok(())
    }
}
