use super::state::WidgetState;
use crate::api::{
    ApiError, CreateInterviewRequest, InterviewCreated, ProgressFn, ResumeApi, ResumeUploaded,
};
use crate::auth::AuthContext;
use crate::upload::{is_accepted_drop, SelectedFile, UploadStatus};
use derivative::Derivative;
use std::future::Future;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Sent in place of a blank job description when creating an interview.
pub const PLACEHOLDER_JOB_DESCRIPTION: &str = "General software engineering position";

#[derive(Debug)]
pub enum WidgetEvent {
    UploadProgress(u8),
    UploadFinished(Result<ResumeUploaded, ApiError>),
    InterviewFinished(Result<InterviewCreated, ApiError>),
}

/// Hooks the hosting view supplies. Either may be absent.
#[derive(Derivative, Default)]
#[derivative(Debug)]
pub struct WidgetCallbacks {
    #[derivative(Debug = "ignore")]
    pub on_uploaded: Option<Box<dyn FnMut(&str)>>,
    #[derivative(Debug = "ignore")]
    pub on_start_interview: Option<Box<dyn FnMut(&str)>>,
}

/// Resume upload step: takes a file, sends it to the backend and hands the
/// resulting ids to the hosting view.
///
/// Network calls run on a background thread and report through a channel
/// that [`UploadWidget::poll`] drains once per frame. Dropping the widget
/// drops the receiver, so results that arrive afterwards go nowhere.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct UploadWidget {
    pub(super) state: WidgetState,
    #[derivative(Debug = "ignore")]
    api: Arc<dyn ResumeApi>,
    auth: AuthContext,
    callbacks: WidgetCallbacks,
    sender: Sender<WidgetEvent>,
    receiver: Receiver<WidgetEvent>,
}

fn spawn_task<F>(task: F, on_runtime_error: impl FnOnce(ApiError) + Send + 'static)
where
    F: Future<Output = ()> + Send + 'static,
{
    std::thread::spawn(move || match tokio::runtime::Runtime::new() {
        Ok(rt) => rt.block_on(task),
        Err(e) => on_runtime_error(ApiError::Runtime(e.to_string())),
    });
}

impl UploadWidget {
    pub fn new(api: Arc<dyn ResumeApi>, auth: AuthContext, callbacks: WidgetCallbacks) -> Self {
        let (sender, receiver) = channel();
        Self {
            state: WidgetState::default(),
            api,
            auth,
            callbacks,
            sender,
            receiver,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.status == UploadStatus::Uploading || self.state.interview_pending
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.state.is_dragging = dragging;
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.state.job_description = text.into();
    }

    /// Drag-and-drop entry point. Files that are neither PDFs nor documents
    /// are ignored without any feedback. Returns whether the file was taken.
    pub fn drop_file(&mut self, file: SelectedFile) -> bool {
        self.state.is_dragging = false;
        if !is_accepted_drop(&file.mime) {
            debug!("Ignoring dropped file '{}' of type '{}'", file.name, file.mime);
            return false;
        }
        self.select_file(file)
    }

    /// Browse entry point. No type filter is applied here. The file is only
    /// kept when an upload actually starts; returns whether it did.
    pub fn select_file(&mut self, file: SelectedFile) -> bool {
        if self.state.status != UploadStatus::Idle {
            debug!("Ignoring file '{}' while status is {:?}", file.name, self.state.status);
            return false;
        }
        if !self.auth.is_authenticated() {
            warn!("Upload of '{}' skipped: no signed-in user", file.name);
            return false;
        }
        if !self.state.begin_upload() {
            return false;
        }
        self.state.select(file.clone());
        self.upload(file);
        true
    }

    fn upload(&mut self, file: SelectedFile) {
        info!("Starting upload of '{}'", file.name);
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        let progress_sender = self.sender.clone();
        let fallback_sender = self.sender.clone();
        let on_progress: ProgressFn = Arc::new(move |percent| {
            let _ = progress_sender.send(WidgetEvent::UploadProgress(percent));
        });

        spawn_task(
            async move {
                let result = api.upload_resume(&file, on_progress).await;
                let _ = sender.send(WidgetEvent::UploadFinished(result));
            },
            move |e| {
                let _ = fallback_sender.send(WidgetEvent::UploadFinished(Err(e)));
            },
        );
    }

    pub fn retry(&mut self) {
        if self.state.retry() {
            info!("Upload reset after failure");
        }
    }

    pub fn analyze_match(&mut self) {
        if !self.state.can_analyze() {
            return;
        }
        info!(
            "Analyzing match for resume {:?} against a {}-character job description",
            self.state.resume_id,
            self.state.job_description.trim().len()
        );
    }

    /// Moves on from a successful upload: creates an interview when the host
    /// wants one, otherwise hands the resume id back.
    pub fn proceed(&mut self) {
        if !self.state.can_proceed() || self.state.interview_pending {
            return;
        }

        let wants_interview = self.callbacks.on_start_interview.is_some();
        let Some(resume_id) = self.state.resume_id.clone().filter(|_| wants_interview) else {
            self.notify_uploaded();
            return;
        };

        let job_description = match self.state.job_description.trim() {
            "" => PLACEHOLDER_JOB_DESCRIPTION.to_string(),
            text => text.to_string(),
        };
        let request = CreateInterviewRequest::technical(resume_id, job_description);

        self.state.interview_pending = true;
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        let fallback_sender = self.sender.clone();

        spawn_task(
            async move {
                let result = api.create_interview(&request).await;
                let _ = sender.send(WidgetEvent::InterviewFinished(result));
            },
            move |e| {
                let _ = fallback_sender.send(WidgetEvent::InterviewFinished(Err(e)));
            },
        );
    }

    fn notify_uploaded(&mut self) {
        if let (Some(callback), Some(resume_id)) = (
            self.callbacks.on_uploaded.as_mut(),
            self.state.resume_id.as_deref(),
        ) {
            callback(resume_id);
        }
    }

    /// Applies finished background work. Returns true when anything changed.
    pub fn poll(&mut self) -> bool {
        let mut had_updates = false;
        while let Ok(event) = self.receiver.try_recv() {
            had_updates = true;
            self.apply(event);
        }
        had_updates
    }

    fn apply(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::UploadProgress(percent) => self.state.record_progress(percent),
            WidgetEvent::UploadFinished(Ok(uploaded)) => {
                info!("Upload finished, resume id {:?}", uploaded.resume_id);
                self.state.complete_upload(uploaded.resume_id);
                if self.state.resume_id.is_some() {
                    self.notify_uploaded();
                }
            }
            WidgetEvent::UploadFinished(Err(e)) => {
                error!("Upload failed: {}", e);
                self.state.fail_upload();
            }
            WidgetEvent::InterviewFinished(result) => {
                self.state.interview_pending = false;
                match result {
                    Ok(InterviewCreated {
                        interview_id: Some(interview_id),
                    }) => {
                        if let Some(callback) = self.callbacks.on_start_interview.as_mut() {
                            info!("Interview {} created", interview_id);
                            callback(&interview_id);
                            return;
                        }
                    }
                    Ok(InterviewCreated { interview_id: None }) => {
                        warn!("Interview created but the response carried no id");
                    }
                    Err(e) => error!("Failed to create interview: {}", e),
                }
                self.notify_uploaded();
            }
        }
    }
}
