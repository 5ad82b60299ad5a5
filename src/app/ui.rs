use super::{FlowStep, ResumeUploaderApp, UploadWidget};
use crate::upload::{from_dropped, load_from_path, UploadStatus, RESUME_EXTENSIONS};
use crate::utils::color;
use eframe::egui::{self, RichText};
use rfd::FileDialog;
use tracing::error;

impl ResumeUploaderApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        if self.flow.step == FlowStep::Upload {
            self.handle_file_drops(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Interview Prep");
                    ui.add_space(5.0);
                    let who = match &self.auth.current_user {
                        Some(user) => format!("Signed in as {}", user.name),
                        None => "Not signed in. Set RESUME_USER to enable uploads.".to_string(),
                    };
                    ui.label(
                        RichText::new(who).color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });

                ui.add_space(15.0);
                self.render_steps(ui);
                ui.separator();
                ui.add_space(10.0);

                match self.flow.step {
                    FlowStep::Upload => self.widget.show(ui),
                    FlowStep::Tailoring => self.render_tailoring(ui),
                    FlowStep::Interview => self.render_interview(ui),
                }
                ui.add_space(20.0);
            });
        });
    }

    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());

        self.widget.set_dragging(hovering);
        if let Some(file) = dropped.iter().find_map(from_dropped) {
            self.widget.drop_file(file);
        }
    }

    fn render_steps(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for step in FlowStep::ALL {
                let selected = self.flow.step == step;
                let label = egui::SelectableLabel::new(selected, step.title());
                if ui.add_enabled(self.flow.can_open(step), label).clicked() {
                    self.flow.open(step);
                }
            }
        });
    }

    fn render_tailoring(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Resume Tailoring");
            if let Some(resume_id) = &self.flow.resume_id {
                ui.label(format!("Resume: {}", resume_id));
            }
            ui.label(
                RichText::new("Your resume is ready to be tailored to the job description.")
                    .color(color::muted()),
            );
        });
        ui.add_space(10.0);
        if ui.button("🔄 Start Over").clicked() {
            self.start_over();
        }
    }

    fn render_interview(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Technical Interview");
            if let Some(interview_id) = &self.flow.interview_id {
                ui.label(format!("Interview: {}", interview_id));
            }
            ui.label(RichText::new("5 questions, 5 minutes. Good luck!").color(color::muted()));
        });
        ui.add_space(10.0);
        if ui.button("🔄 Start Over").clicked() {
            self.start_over();
        }
    }
}

impl UploadWidget {
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Upload Your Resume");
        ui.add_space(8.0);

        match self.state.status {
            UploadStatus::Idle => self.render_drop_zone(ui),
            UploadStatus::Uploading => self.render_uploading(ui),
            UploadStatus::Success => self.render_success(ui),
            UploadStatus::Error => self.render_error(ui),
        }

        ui.add_space(20.0);
        self.render_job_description(ui);
    }

    fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let stroke_color = if self.state.is_dragging {
            color::accent()
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke.color
        };

        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(2.0, stroke_color))
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("📄").size(32.0));
                    ui.label("Drag & drop your resume here");
                    ui.label(RichText::new("or").color(color::muted()));
                    if ui.button("📁 Browse Files").clicked() {
                        self.browse();
                    }
                    ui.add_space(4.0);
                    ui.label(RichText::new("Supports PDF, DOC, DOCX").color(color::muted()));
                });
            });
    }

    fn browse(&mut self) {
        let dialog = FileDialog::new().add_filter("Resume", &RESUME_EXTENSIONS);
        let Some(path) = dialog.pick_file() else {
            return;
        };

        match load_from_path(&path) {
            Ok(file) => {
                self.select_file(file);
            }
            Err(e) => error!("Failed to open {}: {}", path.display(), e),
        }
    }

    fn render_uploading(&self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            if let Some(label) = self.state.get_file_label() {
                ui.label(label);
            }
            let progress_bar = egui::ProgressBar::new(self.state.get_progress_fraction())
                .show_percentage()
                .animate(true)
                .fill(color::accent());
            ui.add(progress_bar);
            ui.label(self.state.get_status_text());
        });
    }

    fn render_success(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.colored_label(color::success(), self.state.get_status_text());
            if let Some(label) = self.state.get_file_label() {
                ui.label(label);
            }
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let button = egui::Button::new("➡ Proceed to Resume Tailoring")
                    .min_size(egui::vec2(220.0, 36.0));
                let enabled = self.state.can_proceed() && !self.state.interview_pending;
                if ui.add_enabled(enabled, button).clicked() {
                    self.proceed();
                }
                if self.state.interview_pending {
                    ui.spinner();
                }
            });
        });
    }

    fn render_error(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.colored_label(color::error(), self.state.get_status_text());
            ui.add_space(8.0);
            if ui.button("🔁 Try Again").clicked() {
                self.retry();
            }
        });
    }

    fn render_job_description(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Job Description");
            ui.add_space(4.0);
            ui.add_sized(
                [ui.available_width(), 150.0],
                egui::TextEdit::multiline(&mut self.state.job_description)
                    .hint_text("Paste the job description you are applying for..."),
            );
            ui.add_space(8.0);

            let button = egui::Button::new("🔍 Analyze Match").min_size(egui::vec2(160.0, 32.0));
            if ui.add_enabled(self.state.can_analyze(), button).clicked() {
                self.analyze_match();
            }
        });
    }
}
