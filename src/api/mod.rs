//! HTTP boundary to the resume backend.
//!
//! The widget only talks to [`ResumeApi`]; [`HttpResumeApi`] is the real
//! implementation. Responses are normalized in [`envelope`] before they leave
//! this module.

mod client;
mod envelope;
mod error;
mod types;

use crate::upload::SelectedFile;
use async_trait::async_trait;
use std::sync::Arc;

pub use client::HttpResumeApi;
pub use error::ApiError;
pub use types::{CreateInterviewRequest, InterviewCreated, InterviewSettings, ResumeUploaded};

/// Receives the transfer progress as an integer percent.
pub type ProgressFn = Arc<dyn Fn(u8) + Send + Sync>;

#[async_trait]
pub trait ResumeApi: Send + Sync {
    async fn upload_resume(
        &self,
        file: &SelectedFile,
        on_progress: ProgressFn,
    ) -> Result<ResumeUploaded, ApiError>;

    async fn create_interview(
        &self,
        request: &CreateInterviewRequest,
    ) -> Result<InterviewCreated, ApiError>;
}
