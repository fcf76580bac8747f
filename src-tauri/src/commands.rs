// Commands invoked by the toolbar webview.
// Async so that webview creation never runs inside a blocking IPC handler.

use tauri::{AppHandle, State};

use crate::browser;
use crate::error::Result;
use crate::modules::fullscreen::DisplayMode;
use crate::modules::tabs::{Tab, TabsSnapshot};
use crate::settings::Settings;
use crate::state::AppState;

#[tauri::command]
pub async fn new_tab(app: AppHandle, url: Option<String>) -> Result<Tab> {
    browser::open_tab(&app, url, None)
}

#[tauri::command]
pub async fn select_tab(app: AppHandle, id: String) -> Result<bool> {
    browser::activate_tab(&app, &id)
}

#[tauri::command]
pub async fn close_tab(app: AppHandle, index: usize) -> Result<bool> {
    browser::close_tab(&app, index)
}

#[tauri::command]
pub async fn rename_tab(app: AppHandle, index: usize, name: String) -> Result<bool> {
    browser::rename_tab(&app, index, &name)
}

/// Context-menu lookup: which tab sits under `x` in the strip.
#[tauri::command]
pub async fn tab_at_position(app: AppHandle, x: f64, scroll_left: f64) -> Result<Option<usize>> {
    browser::tab_at_position(&app, x, scroll_left)
}

#[tauri::command]
pub async fn reorder_tabs(app: AppHandle, new_order: Vec<String>) -> Result<bool> {
    log::debug!("[Tabs] Reorder requested: {:?}", new_order);
    browser::reorder_tabs(&app, &new_order)
}

#[tauri::command]
pub async fn reopen_closed_tab(app: AppHandle) -> Result<Option<Tab>> {
    browser::reopen_closed_tab(&app)
}

#[tauri::command]
pub async fn navigate(app: AppHandle, url: String) -> Result<String> {
    browser::navigate(&app, &url)
}

#[tauri::command]
pub async fn go_back(app: AppHandle) -> Result<()> {
    browser::go_back(&app)
}

#[tauri::command]
pub async fn go_forward(app: AppHandle) -> Result<()> {
    browser::go_forward(&app)
}

#[tauri::command]
pub async fn reload(app: AppHandle) -> Result<()> {
    browser::reload(&app)
}

#[tauri::command]
pub async fn go_home(app: AppHandle) -> Result<String> {
    browser::go_home(&app)
}

#[tauri::command]
pub async fn toggle_fullscreen(app: AppHandle) -> Result<DisplayMode> {
    browser::toggle_fullscreen(&app)
}

#[tauri::command]
pub async fn get_tabs(app: AppHandle) -> Result<TabsSnapshot> {
    browser::tabs_snapshot(&app)
}

#[tauri::command]
pub async fn get_settings(state: State<'_, AppState>) -> Result<Settings> {
    Ok(state.settings.read()?.clone())
}

#[tauri::command]
pub async fn update_settings(
    app: AppHandle,
    state: State<'_, AppState>,
    settings: Settings,
) -> Result<()> {
    settings.validate()?;
    settings.save(&app)?;
    browser::install_menu(&app, &settings)?;
    *state.settings.write()? = settings;
    log::info!("[Settings] Updated");
    Ok(())
}
