use crate::upload::{SelectedFile, UploadStatus};
use crate::utils::file_size::FileSizeUtils;

/// Everything the upload widget shows. Fields are public for rendering but
/// only change through the transition methods below.
#[derive(Debug, Default)]
pub struct WidgetState {
    pub status: UploadStatus,
    pub progress: u8,
    pub is_dragging: bool,
    pub file: Option<SelectedFile>,
    pub job_description: String,
    pub resume_id: Option<String>,
    pub interview_pending: bool,
}

impl WidgetState {
    pub fn select(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    /// Returns false when an upload cannot start from the current status.
    pub fn begin_upload(&mut self) -> bool {
        if self.status != UploadStatus::Idle {
            return false;
        }
        self.status = UploadStatus::Uploading;
        self.progress = 0;
        self.resume_id = None;
        true
    }

    /// Progress never moves backwards while uploading and is ignored otherwise.
    pub fn record_progress(&mut self, percent: u8) {
        if self.status == UploadStatus::Uploading {
            self.progress = self.progress.max(percent.min(100));
        }
    }

    pub fn complete_upload(&mut self, resume_id: Option<String>) {
        self.progress = 100;
        self.status = UploadStatus::Success;
        if resume_id.is_some() {
            self.resume_id = resume_id;
        }
    }

    pub fn fail_upload(&mut self) {
        self.status = UploadStatus::Error;
        self.progress = 0;
    }

    /// Leaves the error view. The failed attempt is discarded; the job
    /// description is kept.
    pub fn retry(&mut self) -> bool {
        if self.status != UploadStatus::Error {
            return false;
        }
        self.status = UploadStatus::Idle;
        self.progress = 0;
        true
    }

    pub fn can_analyze(&self) -> bool {
        self.status == UploadStatus::Success && !self.job_description.trim().is_empty()
    }

    pub fn can_proceed(&self) -> bool {
        self.status == UploadStatus::Success
    }

    pub fn get_progress_fraction(&self) -> f32 {
        match self.status {
            UploadStatus::Uploading => f32::from(self.progress) / 100.0,
            UploadStatus::Success => 1.0,
            UploadStatus::Idle | UploadStatus::Error => 0.0,
        }
    }

    pub fn get_file_label(&self) -> Option<String> {
        self.file.as_ref().map(|file| match file.size {
            Some(size) => format!("{} ({})", file.name, FileSizeUtils::format_size(size)),
            None => file.name.clone(),
        })
    }

    pub fn get_status_text(&self) -> String {
        match self.status {
            UploadStatus::Idle => String::new(),
            UploadStatus::Uploading => format!("📤 Uploading... {}%", self.progress),
            UploadStatus::Success => "✅ Resume uploaded successfully".to_string(),
            UploadStatus::Error => "❌ Upload failed. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn pdf() -> SelectedFile {
        SelectedFile::from_bytes("cv.pdf", "application/pdf", Arc::from(&b"%PDF-1.4"[..]))
    }

    #[test]
    fn upload_lifecycle_success() {
        let mut state = WidgetState::default();
        state.select(pdf());

        assert!(state.begin_upload());
        assert_eq!(state.status, UploadStatus::Uploading);
        assert_eq!(state.progress, 0);

        state.record_progress(40);
        state.record_progress(25);
        assert_eq!(state.progress, 40);

        state.complete_upload(Some("r-1".to_string()));
        assert_eq!(state.status, UploadStatus::Success);
        assert_eq!(state.progress, 100);
        assert_eq!(state.resume_id.as_deref(), Some("r-1"));
        assert!(state.can_proceed());
    }

    #[test]
    fn failure_resets_progress_regardless_of_prior_value() {
        let mut state = WidgetState::default();
        state.begin_upload();
        state.record_progress(87);

        state.fail_upload();
        assert_eq!(state.status, UploadStatus::Error);
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn retry_only_leaves_error_and_keeps_job_description() {
        let mut state = WidgetState {
            job_description: "Rust developer".to_string(),
            ..Default::default()
        };
        assert!(!state.retry());

        state.begin_upload();
        state.fail_upload();
        assert!(state.retry());
        assert_eq!(state.status, UploadStatus::Idle);
        assert_eq!(state.job_description, "Rust developer");
    }

    #[test]
    fn cannot_begin_twice() {
        let mut state = WidgetState::default();
        assert!(state.begin_upload());
        assert!(!state.begin_upload());
    }

    #[test]
    fn progress_ignored_outside_upload() {
        let mut state = WidgetState::default();
        state.record_progress(50);
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn new_upload_overwrites_resume_id() {
        let mut state = WidgetState::default();
        state.begin_upload();
        state.complete_upload(Some("old".to_string()));

        state.status = UploadStatus::Idle;
        state.begin_upload();
        assert!(state.resume_id.is_none());
        state.complete_upload(Some("new".to_string()));
        assert_eq!(state.resume_id.as_deref(), Some("new"));
    }

    #[test]
    fn analyze_requires_upload_and_non_blank_description() {
        let mut state = WidgetState::default();
        state.job_description = "Platform engineer".to_string();
        assert!(!state.can_analyze());

        state.begin_upload();
        state.complete_upload(None);
        assert!(state.can_analyze());

        state.job_description = " \n\t ".to_string();
        assert!(!state.can_analyze());
    }

    #[test]
    fn proceed_only_in_success() {
        let mut state = WidgetState::default();
        assert!(!state.can_proceed());
        state.begin_upload();
        assert!(!state.can_proceed());
        state.fail_upload();
        assert!(!state.can_proceed());
    }

    #[test]
    fn file_label_includes_size() {
        let mut state = WidgetState::default();
        state.select(pdf());
        assert_eq!(state.get_file_label().as_deref(), Some("cv.pdf (8 B)"));
    }
}
