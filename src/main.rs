//! Skedge desktop entry point

use anyhow::Result;
use eframe::egui;
use skedge::ui::SkedgeApp;
use skedge::SkedgeConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skedge=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skedge");

    let config = SkedgeConfig::discover()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 720.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Skedge"),
        ..Default::default()
    };

    eframe::run_native(
        "Skedge",
        options,
        Box::new(|cc| Ok(Box::new(SkedgeApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))
}
