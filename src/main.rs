// KramerPrefs - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::core::...` etc.
pub use kramerprefs::app;
pub use kramerprefs::core;
pub use kramerprefs::platform;
pub use kramerprefs::ui;
pub use kramerprefs::util;

use app::backend::PreferencesBackend;
use app::host::HostSettings;
use app::http::HttpBackend;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

/// KramerPrefs - deal notification preferences for KramerBot.
///
/// Toggle deal feeds, manage keyword filters and send yourself a test
/// notification.
#[derive(Parser, Debug)]
#[command(name = "KramerPrefs", version, about)]
struct Cli {
    /// Base URL of the preferences API (e.g. https://bot.example.com/api).
    #[arg(short = 'a', long = "api-base")]
    api_base: Option<String>,

    /// Identity token to present to the backend.
    #[arg(short = 'i', long = "init-data")]
    init_data: Option<String>,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "KramerPrefs starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    // CLI overrides config.
    let api_base = cli.api_base.unwrap_or(config.api_base);
    let settings = HostSettings {
        identity_token: cli.init_data.or(config.init_data),
        theme: config.theme,
    };
    tracing::info!(api = %api_base, identity = settings.identity_token.is_some(), "Backend configured");

    let backend: Arc<dyn PreferencesBackend> = Arc::new(HttpBackend::new(api_base));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(ui::theme::WINDOW_SIZE)
            .with_min_inner_size(ui::theme::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            let host = gui::ViewportHost::new(settings, cc.egui_ctx.clone());
            Ok(Box::new(gui::KramerPrefsApp::new(
                &cc.egui_ctx,
                host,
                backend,
            )))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch KramerPrefs GUI: {e}");
        std::process::exit(1);
    }
}
