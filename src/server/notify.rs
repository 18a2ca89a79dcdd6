//! Acceptance notifications.
//!
//! When a coordinator accepts an application the applicant is told through a [`Notifier`].
//! Delivery runs on its own task after the decision has committed, so a slow or failing
//! notifier never changes the outcome of the request.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::server::{error::Error, service::retry::RetryContext};

/// Message sent to an applicant whose application was accepted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptanceNotice {
    pub application_id: i32,
    pub applicant_name: String,
    pub applicant_email: String,
    pub module_code: String,
    pub module_name: String,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn application_accepted(&self, notice: &AcceptanceNotice) -> Result<(), Error>;
}

/// Writes notices to the log, used when no webhook is configured
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn application_accepted(&self, notice: &AcceptanceNotice) -> Result<(), Error> {
        tracing::info!(
            "Application ID {} accepted: notifying {} <{}> of TA position on {} {}",
            notice.application_id,
            notice.applicant_name,
            notice.applicant_email,
            notice.module_code,
            notice.module_name
        );

        Ok(())
    }
}

/// Posts each notice as JSON to a webhook, such as a mail relay
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn application_accepted(&self, notice: &AcceptanceNotice) -> Result<(), Error> {
        self.client
            .post(&self.url)
            .json(notice)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// Deliver `notice` on a background task, retrying transient failures.
///
/// Failures are logged and otherwise dropped. The handle is returned so callers that need to
/// observe delivery, such as tests, can await it.
pub fn dispatch_acceptance(notifier: Arc<dyn Notifier>, notice: AcceptanceNotice) -> JoinHandle<()> {
    tokio::spawn(async move {
        let description = format!(
            "acceptance notice for application ID {}",
            notice.application_id
        );

        let result = RetryContext::new()
            .execute_with_retry(&description, || {
                let notifier = notifier.clone();
                let notice = notice.clone();

                async move { notifier.application_accepted(&notice).await }
            })
            .await;

        if let Err(e) = result {
            tracing::warn!("Failed to deliver {}: {}", description, e);
        }
    })
}
