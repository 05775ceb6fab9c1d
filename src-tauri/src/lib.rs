mod commands;
mod config;
mod db;

#[cfg(test)]
mod test_utils;

use config::AppConfig;
use db::AppState;
use std::sync::Arc;
use tauri::Manager;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber: `RUST_LOG` wins, else the configured filter
fn init_tracing(default_filter: &str) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

  // try_init: a second call (tests, re-entry on mobile) keeps the first subscriber
  let _ = tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer())
    .try_init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let config = match AppConfig::from_env() {
    Ok(config) => config,
    Err(e) => {
      eprintln!("{}; falling back to defaults", e);
      AppConfig::default()
    }
  };
  init_tracing(&config.log_filter);
  info!("Starting Skate Log v{}", env!("CARGO_PKG_VERSION"));

  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .setup(move |app| {
      // Initialize database
      let app_handle = app.handle().clone();
      tauri::async_runtime::block_on(async move {
        match db::initialize_db(&app_handle, &config).await {
          Ok(pool) => {
            let state = Arc::new(AppState { db: pool });
            app_handle.manage(state);
            info!("Database ready");
          }
          Err(e) => {
            error!("Failed to initialize database: {}", e);
          }
        }
      });
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      commands::get_trackers,
      // Nutrition commands
      commands::settings::get_nutrition_settings,
      commands::settings::update_nutrition_settings,
      commands::settings::import_legacy_settings,
      commands::nutrition::get_nutrition_targets,
      commands::nutrition::get_nutrition_overview,
      commands::nutrition::get_daily_reports,
      // Entry commands
      commands::entries::get_entries,
      commands::entries::save_entry,
      commands::entries::delete_entry,
      commands::entries::clear_entries,
      commands::entries::export_entries,
      commands::entries::import_entries,
      // Benchmark commands
      commands::benchmarks::get_personal_bests,
      commands::benchmarks::get_chart_series,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
