//! Pokedex desktop application
//!
//! A Slint GUI client for PokeAPI. One search looks up a creature, shows its
//! sprite, details and stats over a gradient built from its types, and then
//! resolves its evolution chain.
//!
//! # Architecture
//! - `desktop_main` is the entry point, run on a tokio runtime
//! - Global configuration management
//! - UI logic initialization and callback handling
//! - Logging setup

slint::include_modules!();

#[macro_use]
extern crate derivative;

mod config;
mod logic;
mod version;

use anyhow::{Context, Result};

/// Initializes the logger.
///
/// Sets up a custom logger format with timestamp, log level, file name, line number,
/// and log message. Uses local time format for timestamps.
pub fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .filter_module("hyper_util", log::LevelFilter::Warn)
        .filter_module("reqwest", log::LevelFilter::Warn)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = cutil::time::local_now("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

/// Performs initialization tasks before UI creation.
///
/// # Tasks
/// - Initializes logger
/// - Loads configuration
/// - Sets XDG app ID on Linux
async fn ui_before() -> Result<()> {
    init_logger();
    config::init().with_context(|| "init config failed")?;

    #[cfg(target_os = "linux")]
    {
        _ = slint::set_xdg_app_id("pokedex".to_string());
    }

    Ok(())
}

/// Performs initialization tasks after UI creation.
///
/// # Parameters
/// - `ui`: Reference to the application window
fn ui_after(ui: &AppWindow) {
    logic::init(ui);
}

/// Main entry point for desktop applications.
///
/// # Tasks
/// - Performs pre-UI initialization
/// - Creates and configures application window
/// - Initializes UI logic
/// - Applies the configured window size
/// - Runs the application
pub async fn desktop_main() -> Result<()> {
    log::debug!("start...");

    ui_before().await?;
    let ui = AppWindow::new().with_context(|| "create app window failed")?;
    ui_after(&ui);

    global_util!(ui).invoke_update_window_size();

    ui.run().with_context(|| "run app window failed")?;

    log::debug!("exit...");
    Ok(())
}
