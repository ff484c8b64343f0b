//! TFR Dashboard - Main Entry Point
//!
//! Loads the configuration and both dataset sources, then opens the
//! dashboard window. Any load failure aborts before the window opens.

use std::sync::Arc;

use anyhow::Context;
use tfr_dashboard::{
    config::{ensure_app_data_dir, AppState, DashboardConfig, LOG_FILE_PREFIX},
    data::Dataset,
    frontend::DashboardApp,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const APP_TITLE: &str = "TFR Dashboard";

/// Initialize logging; the returned guard flushes the log file on drop
fn init_logging(log_to_file: bool) -> Option<WorkerGuard> {
    let mut file_error = None;
    let (file_layer, guard) = if log_to_file {
        match ensure_app_data_dir() {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer)
                    .boxed();
                (Some(layer), Some(guard))
            }
            Err(e) => {
                file_error = Some(e);
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tfr_dashboard=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!("File logging disabled: {}", e);
    }

    guard
}

fn main() -> anyhow::Result<()> {
    // Read before logging is set up; it decides whether a log file is written
    let config = DashboardConfig::load_or_default();
    let log_to_file = config.as_ref().map(|c| c.logging.file).unwrap_or(false);
    let _log_guard = init_logging(log_to_file);

    tracing::info!("Starting {}", APP_TITLE);

    let config = config.context("Failed to load dashboard configuration")?;

    let dataset = match Dataset::load(&config.data) {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            tracing::error!("Failed to load dataset: {}", e);
            return Err(e).context("Failed to load dataset");
        }
    };

    let app_state = AppState::load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([800.0, 600.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    let result = eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|cc| {
            // Configure egui visuals based on user preference
            if app_state.ui_preferences.dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }

            Ok(Box::new(DashboardApp::new(cc, dataset, config, app_state)))
        }),
    );

    tracing::info!("Shutting down...");

    result.map_err(|e| anyhow::anyhow!("Failed to run dashboard: {}", e))
}
