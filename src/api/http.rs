//! HTTP feedback service using reqwest

use crate::api::{FeedbackService, SubmitReceipt, normalize_body};
use crate::config::ClientConfig;
use crate::draft::{ATTACHMENT_FIELD, FeedbackSubmission};
use crate::error::{Error, Result};
use crate::types::{FeedbackId, FeedbackRecord, StatusChoice};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::debug;

/// Feedback service backed by the REST API
pub struct HttpFeedbackService {
    client: Client,
    config: ClientConfig,
}

#[derive(Serialize)]
struct UpdateStatusPayload<'a> {
    status: &'a str,
}

impl HttpFeedbackService {
    /// Create a new service from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    async fn build_form(submission: &FeedbackSubmission) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in &submission.fields {
            form = form.text(*name, value.clone());
        }

        for attachment in &submission.attachments {
            let bytes = attachment.read().await?;
            let mut part = Part::bytes(bytes).file_name(attachment.file_name.clone());
            if let Some(mime) = attachment.mime_type() {
                part = part.mime_str(mime)?;
            }
            form = form.part(ATTACHMENT_FIELD, part);
        }

        Ok(form)
    }
}

/// Turn a non-success response into [`Error::Server`]
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Server {
        status: status.as_u16(),
        body: body.trim().to_string(),
    })
}

#[async_trait]
impl FeedbackService for HttpFeedbackService {
    async fn submit_feedback(&self, submission: &FeedbackSubmission) -> Result<SubmitReceipt> {
        let url = self.config.collection_url()?;
        let form = Self::build_form(submission).await?;

        debug!(
            %url,
            attachments = submission.attachments.len(),
            "posting feedback"
        );

        let response = check_status(self.client.post(url).multipart(form).send().await?).await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(SubmitReceipt {
            status,
            body: serde_json::from_str(&text).ok(),
        })
    }

    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>> {
        let url = self.config.collection_url()?;
        debug!(%url, "fetching feedback");

        let response = check_status(self.client.get(url).send().await?).await?;
        let text = response.text().await?;
        let records = normalize_body(&text);

        debug!(count = records.len(), "fetched feedback");
        Ok(records)
    }

    async fn update_status(&self, id: &FeedbackId, status: StatusChoice) -> Result<()> {
        let url = self.config.record_url(&id.path_segment())?;
        debug!(%url, status = status.wire_value(), "updating feedback status");

        let payload = UpdateStatusPayload {
            status: status.wire_value(),
        };

        check_status(self.client.patch(url).json(&payload).send().await?).await?;
        Ok(())
    }
}
