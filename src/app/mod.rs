mod state;
mod ui;
mod widget;

use crate::api::ResumeApi;
use crate::auth::AuthContext;
use eframe::{egui, App};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub use widget::{UploadWidget, WidgetCallbacks};

const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    ResumeUploaded(String),
    InterviewStarted(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowStep {
    #[default]
    Upload,
    Tailoring,
    Interview,
}

impl FlowStep {
    pub const ALL: [FlowStep; 3] = [FlowStep::Upload, FlowStep::Tailoring, FlowStep::Interview];

    pub fn title(self) -> &'static str {
        match self {
            FlowStep::Upload => "1. Upload Resume",
            FlowStep::Tailoring => "2. Resume Tailoring",
            FlowStep::Interview => "3. Interview",
        }
    }
}

/// Where the hiring flow stands.
#[derive(Debug, Default)]
pub struct FlowState {
    pub step: FlowStep,
    pub resume_id: Option<String>,
    pub interview_id: Option<String>,
}

impl FlowState {
    /// The widget reports a resume once when the upload lands and again when
    /// the user proceeds without an interview. The first report records it;
    /// a repeat for the same resume moves on to tailoring.
    pub fn apply(&mut self, event: FlowEvent) {
        match event {
            FlowEvent::ResumeUploaded(resume_id) => {
                if self.resume_id.as_deref() == Some(resume_id.as_str()) {
                    self.step = FlowStep::Tailoring;
                }
                self.resume_id = Some(resume_id);
            }
            FlowEvent::InterviewStarted(interview_id) => {
                self.interview_id = Some(interview_id);
                self.step = FlowStep::Interview;
            }
        }
    }

    pub fn can_open(&self, step: FlowStep) -> bool {
        match step {
            FlowStep::Upload => true,
            FlowStep::Tailoring => self.resume_id.is_some(),
            FlowStep::Interview => self.interview_id.is_some(),
        }
    }

    pub fn open(&mut self, step: FlowStep) {
        if self.can_open(step) {
            self.step = step;
        }
    }
}

pub struct ResumeUploaderApp {
    api: Arc<dyn ResumeApi>,
    auth: AuthContext,
    widget: UploadWidget,
    flow: FlowState,
    flow_receiver: Receiver<FlowEvent>,
}

impl ResumeUploaderApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        api: Arc<dyn ResumeApi>,
        auth: AuthContext,
    ) -> Self {
        match &auth.current_user {
            Some(user) => info!("Initializing resume uploader for {}", user.name),
            None => info!("Initializing resume uploader without a signed-in user"),
        }

        let (flow_sender, flow_receiver) = channel();
        let widget = Self::mount_widget(&api, &auth, flow_sender);
        Self {
            api,
            auth,
            widget,
            flow: FlowState::default(),
            flow_receiver,
        }
    }

    fn mount_widget(
        api: &Arc<dyn ResumeApi>,
        auth: &AuthContext,
        flow_sender: Sender<FlowEvent>,
    ) -> UploadWidget {
        let uploaded_sender = flow_sender.clone();
        let interview_sender = flow_sender;
        let callbacks = WidgetCallbacks {
            on_uploaded: Some(Box::new(move |resume_id: &str| {
                let _ = uploaded_sender.send(FlowEvent::ResumeUploaded(resume_id.to_string()));
            })),
            on_start_interview: Some(Box::new(move |interview_id: &str| {
                let event = FlowEvent::InterviewStarted(interview_id.to_string());
                let _ = interview_sender.send(event);
            })),
        };
        UploadWidget::new(Arc::clone(api), auth.clone(), callbacks)
    }

    /// Drops the current widget, and with it the selected file, and begins
    /// the flow again.
    pub fn start_over(&mut self) {
        info!("Starting the hiring flow over");
        let (flow_sender, flow_receiver) = channel();
        self.widget = Self::mount_widget(&self.api, &self.auth, flow_sender);
        self.flow = FlowState::default();
        self.flow_receiver = flow_receiver;
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        let mut had_updates = self.widget.poll();

        while let Ok(event) = self.flow_receiver.try_recv() {
            had_updates = true;
            info!("Flow event: {:?}", event);
            self.flow.apply(event);
        }

        if had_updates {
            ctx.request_repaint();
        }
        if self.widget.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
    }
}

impl App for ResumeUploaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
