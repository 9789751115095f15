// Entry point: loads the workbook once, then launches the egui/eframe viewer.
mod app;
mod cli;
mod config;
mod data;
mod ui;

use std::path::Path;

use anyhow::Context as _;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::data::dataset::Dataset;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = cli::Args::parse();
    let cfg = config::AppConfig::load_or_default(&args.config);
    let workbook = args
        .workbook
        .clone()
        .unwrap_or_else(|| cfg.data.workbook.clone());

    // Load-once: any failure here is fatal, there is nothing to render.
    let dataset = Dataset::load(Path::new(&workbook), cfg.thresholds(), cfg.caps())
        .with_context(|| format!("loading workbook {workbook}"))?;
    info!(
        features = dataset.features.len(),
        ranked = dataset.ranked.len(),
        "dataset ready"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Gaitscope",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, dataset)))),
    )
    .map_err(|err| anyhow::anyhow!("ui error: {err}"))
}
