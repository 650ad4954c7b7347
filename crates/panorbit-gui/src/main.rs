mod app;
mod messages;
mod panels;
mod scene;
mod state;
mod worker;

use std::path::{Path, PathBuf};

use clap::Parser;
use panorbit_core::config::ViewerConfig;

#[derive(Parser)]
#[command(name = "panorbit", about = "360° equirectangular panorama viewer")]
#[command(version)]
struct Cli {
    /// Panorama image to open at startup
    image: Option<PathBuf>,

    /// TOML config file (display rotation, auto-rotate)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let config = load_config(cli.config.as_deref());

    let options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Panorbit"),
        ..Default::default()
    };

    eframe::run_native(
        "Panorbit",
        options,
        Box::new(move |cc| Ok(Box::new(app::PanorbitApp::new(cc, config, cli.image)?))),
    )
}

fn load_config(path: Option<&Path>) -> ViewerConfig {
    let Some(path) = path else {
        return ViewerConfig::default();
    };
    let parsed = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|s| toml::from_str(&s).map_err(anyhow::Error::from));
    match parsed {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            ViewerConfig::default()
        }
    }
}
