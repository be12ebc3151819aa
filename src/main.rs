//! Bizdash - Desktop dashboard for customers, invoices, payments and staff.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use eframe::egui;

use bizdash::config::{AppConfig, ConfigLoadResult, UiConfig};
use bizdash::{logging, ui::MainApp};

/// Desktop dashboard for customers, invoices, payments and staff.
#[derive(Parser)]
#[command(name = "bizdash", version)]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,

    /// Load records from a JSON fixture file instead of sample data
    #[arg(long, value_name = "PATH")]
    fixtures: Option<PathBuf>,

    /// Rows per table page (0 disables pagination)
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    // Logging is not up yet, so load problems are reported after init.
    let (mut config, load_warning) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, None),
        ConfigLoadResult::Missing => (AppConfig::default(), None),
        ConfigLoadResult::Invalid(e) => (AppConfig::default(), Some(e.to_string())),
    };

    if let Some(fixtures) = cli.fixtures {
        config.data.fixtures = Some(fixtures);
    }
    if let Some(page_size) = cli.page_size {
        config.table.page_size = page_size;
    }
    config.validate()?;

    let _guard = logging::init(&config.logging)?;

    tracing::info!("Bizdash starting...");
    tracing::info!("Config path: {:?}", config_path);
    if let Some(warning) = load_warning {
        tracing::warn!("Config invalid, using defaults: {}", warning);
    }

    run_main_app(config)
}

/// Run the main application.
fn run_main_app(config: AppConfig) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bizdash")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([UiConfig::MIN_WIDTH, UiConfig::MIN_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Bizdash",
        options,
        Box::new(|cc| Ok(Box::new(MainApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
