//! Marble Solitaire GUI
//!
//! Single-player peg solitaire on a cross-shaped board.

use std::process::ExitCode;

use clap::Parser;
use solitaire::cli::Cli;
use solitaire::ui::SolitaireApp;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(?config, "starting marble solitaire");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Marble Solitaire"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Marble Solitaire",
        options,
        Box::new(move |cc| Ok(Box::new(SolitaireApp::new(cc, config)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "window closed with an error");
            ExitCode::FAILURE
        }
    }
}
