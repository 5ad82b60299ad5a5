use super::envelope;
use super::error::ApiError;
use super::types::{CreateInterviewRequest, InterviewCreated, ResumeUploaded};
use super::{ProgressFn, ResumeApi};
use crate::config::Config;
use crate::upload::SelectedFile;
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;
const RESUME_FIELD: &str = "resume";

/// Talks to the resume backend over HTTP.
#[derive(Clone)]
pub struct HttpResumeApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpResumeApi {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn read_body(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Pulls a human-readable message out of an error body, falling back to the
/// raw text.
fn error_message(text: &str) -> String {
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|body| {
            body.get("message")
                .or_else(|| body.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| text.to_string())
}

/// Percent of `sent` over `total`, clamped to 0..=100. An empty file counts as
/// fully sent.
pub(crate) fn percent(sent: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    (sent.saturating_mul(100) / total).min(100) as u8
}

/// Splits the file into chunks and reports progress as each one is handed to
/// the transport.
fn progress_body(content: Bytes, on_progress: ProgressFn) -> reqwest::Body {
    let total = content.len() as u64;
    let chunks: Vec<Bytes> = (0..content.len())
        .step_by(UPLOAD_CHUNK_SIZE)
        .map(|start| content.slice(start..(start + UPLOAD_CHUNK_SIZE).min(content.len())))
        .collect();

    let mut sent = 0u64;
    let stream = stream::iter(chunks.into_iter().map(move |chunk| {
        sent += chunk.len() as u64;
        on_progress(percent(sent, total));
        Ok::<Bytes, std::io::Error>(chunk)
    }));

    reqwest::Body::wrap_stream(stream)
}

#[async_trait]
impl ResumeApi for HttpResumeApi {
    async fn upload_resume(
        &self,
        file: &SelectedFile,
        on_progress: ProgressFn,
    ) -> Result<ResumeUploaded, ApiError> {
        let content = file.read().await?;
        let length = content.len() as u64;
        info!("Uploading resume '{}' ({} bytes)", file.name, length);

        let part = Part::stream_with_length(progress_body(content, on_progress), length)
            .file_name(file.name.clone())
            .mime_str(&file.mime)?;
        let form = Form::new().part(RESUME_FIELD, part);

        let response = self
            .authorize(self.client.post(self.url("resumes/upload")))
            .multipart(form)
            .send()
            .await?;

        let body = Self::read_body(response).await?;
        let uploaded = envelope::resume_uploaded(&body);
        debug!("Upload response normalized: {:?}", uploaded);
        Ok(uploaded)
    }

    async fn create_interview(
        &self,
        request: &CreateInterviewRequest,
    ) -> Result<InterviewCreated, ApiError> {
        info!(
            "Creating {} interview for resume {}",
            request.interview_type, request.resume_id
        );

        let response = self
            .authorize(self.client.post(self.url("interviews")))
            .json(request)
            .send()
            .await?;

        let body = Self::read_body(response).await?;
        Ok(envelope::interview_created(&body))
    }
}
