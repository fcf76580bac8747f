// Tabbed Browser library entry point.
// Exposes all modules so they can be tested independently of the window.

pub mod browser;
pub mod commands;
pub mod error;
pub mod settings;

// Shared state
pub mod state;

// Pure logic modules (no Tauri imports)
pub mod modules;

use tauri::Manager;

use crate::settings::Settings;
use crate::state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    tauri::Builder::default()
        .plugin(tauri_plugin_log::Builder::default().level(level).build())
        .setup(|app| {
            let handle = app.handle().clone();
            let settings = Settings::load(&handle);
            log::info!("[Startup] Homepage: {}", settings.homepage);
            app.manage(AppState::new(settings));

            browser::create_main_window(&handle)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::new_tab,
            commands::select_tab,
            commands::close_tab,
            commands::rename_tab,
            commands::tab_at_position,
            commands::reorder_tabs,
            commands::reopen_closed_tab,
            commands::navigate,
            commands::go_back,
            commands::go_forward,
            commands::reload,
            commands::go_home,
            commands::toggle_fullscreen,
            commands::get_tabs,
            commands::get_settings,
            commands::update_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
