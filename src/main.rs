mod api;
mod app;
mod auth;
mod config;
mod upload;
mod utils;

use anyhow::{anyhow, Context, Result};
use eframe::CreationContext;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::{HttpResumeApi, ResumeApi};
use crate::app::ResumeUploaderApp;
use crate::auth::AuthContext;
use crate::config::Config;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume uploader v{}", env!("CARGO_PKG_VERSION"));
    info!("Backend: {}", config.api_url);

    let api: Arc<dyn ResumeApi> =
        Arc::new(HttpResumeApi::new(&config).context("Failed to build HTTP client")?);
    let auth = AuthContext::from_config(&config);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Resume Uploader",
        options,
        Box::new(move |cc: &CreationContext| Box::new(ResumeUploaderApp::new(cc, api, auth))),
    )
    .map_err(|e| anyhow!("Failed to run the window: {e}"))
}
