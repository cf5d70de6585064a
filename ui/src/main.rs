#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context as _;
use log::{debug, info, warn};
use turbo_business::BusinessConfig;
use turbo_ui::TurboApp;
use turbo_ui::state::State;

#[global_allocator]
static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    match dotenv {
        Ok(path) => info!("loaded {}", path.display()),
        Err(err) if err.not_found() => debug!("no .env file"),
        Err(err) => warn!("ignoring .env: {err}"),
    }

    let config = BusinessConfig::from_env().context("invalid TURBO_* configuration")?;

    // Commands spawn onto this runtime from the UI thread.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let _guard = runtime.enter();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Turbo Merchant")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Turbo Merchant",
        native_options,
        Box::new(move |_cc| Ok(Box::new(TurboApp::new(State::new(config))))),
    )
    .map_err(|err| anyhow::anyhow!("eframe exited with an error: {err}"))
}
