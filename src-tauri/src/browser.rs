// Tauri glue: owns the main window, the toolbar webview and one content
// webview per tab. Decisions live in the pure modules; this file applies them.

use tauri::menu::{Menu, MenuBuilder, MenuItemBuilder, PredefinedMenuItem, SubmenuBuilder};
use tauri::webview::{PageLoadEvent, PageLoadPayload};
use tauri::window::WindowBuilder;
use tauri::{
    AppHandle, Emitter, LogicalPosition, LogicalSize, Manager, Position, Size, Webview,
    WebviewBuilder, WebviewUrl, Window, WindowEvent, Wry,
};
use url::Url;

use crate::error::{BrowserError, Result};
use crate::modules::fullscreen::DisplayMode;
use crate::modules::layout::{self, Rect};
use crate::modules::navigation::{home_url, smart_parse_url};
use crate::modules::tabs::{Tab, TabsSnapshot};
use crate::settings::Settings;
use crate::state::AppState;

pub const MAIN_WINDOW: &str = "main";
pub const TOOLBAR_WEBVIEW: &str = "toolbar";

fn main_window(app: &AppHandle) -> Result<Window> {
    app.get_window(MAIN_WINDOW)
        .ok_or_else(|| BrowserError::MissingWindow(MAIN_WINDOW.to_string()))
}

fn logical_size(window: &Window) -> Result<LogicalSize<f64>> {
    let scale = window.scale_factor()?;
    Ok(window.inner_size()?.to_logical(scale))
}

fn to_bounds(rect: Rect) -> tauri::Rect {
    tauri::Rect {
        position: Position::Logical(LogicalPosition::new(rect.x, rect.y)),
        size: Size::Logical(LogicalSize::new(rect.width, rect.height)),
    }
}

/// Builds the window, its menu and toolbar, then opens the first tab.
pub fn create_main_window(app: &AppHandle) -> Result<()> {
    let settings = app.state::<AppState>().settings.read()?.clone();

    install_menu(app, &settings)?;
    app.on_menu_event(|app, event| {
        let id = event.id().0.as_str();
        if let Err(e) = handle_menu_event(app, id) {
            log::warn!("[Menu] '{}' failed: {}", id, e);
        }
    });

    let window = WindowBuilder::new(app, MAIN_WINDOW)
        .title(&settings.window_title)
        .inner_size(settings.window_width, settings.window_height)
        .position(settings.window_x, settings.window_y)
        .build()?;

    let size = logical_size(&window)?;
    let toolbar = layout::toolbar_bounds(size.width);
    window.add_child(
        WebviewBuilder::new(TOOLBAR_WEBVIEW, WebviewUrl::App("index.html".into())),
        LogicalPosition::new(toolbar.x, toolbar.y),
        LogicalSize::new(toolbar.width, toolbar.height),
    )?;

    let handle = app.clone();
    window.on_window_event(move |event| {
        if matches!(event, WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. }) {
            if let Err(e) = relayout(&handle) {
                log::warn!("[Layout] Failed to relayout: {}", e);
            }
        }
    });

    if settings.start_maximized {
        window.maximize()?;
    }

    open_tab(app, None, None)?;
    Ok(())
}

/// Builds the menu from `settings` and replaces the current one, so a changed
/// fullscreen shortcut applies immediately.
pub fn install_menu(app: &AppHandle, settings: &Settings) -> Result<()> {
    let menu = build_menu(app, settings)?;
    app.set_menu(menu)?;
    Ok(())
}

fn build_menu(app: &AppHandle, settings: &Settings) -> tauri::Result<Menu<Wry>> {
    let file_menu = SubmenuBuilder::new(app, "File")
        .item(&MenuItemBuilder::with_id("new_tab", "New Tab").accelerator("CmdOrCtrl+T").build(app)?)
        .item(&MenuItemBuilder::with_id("close_tab", "Close Tab").accelerator("CmdOrCtrl+W").build(app)?)
        .item(&MenuItemBuilder::with_id("reopen_tab", "Reopen Closed Tab").accelerator("CmdOrCtrl+Shift+T").build(app)?)
        .separator()
        .item(&PredefinedMenuItem::quit(app, Some("Quit"))?)
        .build()?;

    let edit_menu = SubmenuBuilder::new(app, "Edit")
        .item(&PredefinedMenuItem::undo(app, Some("Undo"))?)
        .item(&PredefinedMenuItem::redo(app, Some("Redo"))?)
        .separator()
        .item(&PredefinedMenuItem::cut(app, Some("Cut"))?)
        .item(&PredefinedMenuItem::copy(app, Some("Copy"))?)
        .item(&PredefinedMenuItem::paste(app, Some("Paste"))?)
        .item(&PredefinedMenuItem::select_all(app, Some("Select All"))?)
        .build()?;

    let view_menu = SubmenuBuilder::new(app, "View")
        .item(&MenuItemBuilder::with_id("focus_location", "Open Location").accelerator("CmdOrCtrl+L").build(app)?)
        .item(&MenuItemBuilder::with_id("reload", "Reload Page").accelerator("CmdOrCtrl+R").build(app)?)
        .separator()
        .item(
            &MenuItemBuilder::with_id("toggle_fullscreen", "Toggle Full Screen")
                .accelerator(&settings.fullscreen_shortcut)
                .build(app)?,
        )
        .build()?;

    let history_menu = SubmenuBuilder::new(app, "History")
        .item(&MenuItemBuilder::with_id("go_back", "Back").accelerator("Alt+Left").build(app)?)
        .item(&MenuItemBuilder::with_id("go_forward", "Forward").accelerator("Alt+Right").build(app)?)
        .item(&MenuItemBuilder::with_id("go_home", "Home").accelerator("Alt+Home").build(app)?)
        .build()?;

    MenuBuilder::new(app)
        .items(&[&file_menu, &edit_menu, &view_menu, &history_menu])
        .build()
}

fn handle_menu_event(app: &AppHandle, id: &str) -> Result<()> {
    match id {
        "new_tab" => {
            open_tab(app, None, None)?;
        }
        "close_tab" => {
            let index = active_index(app)?;
            close_tab(app, index)?;
        }
        "reopen_tab" => {
            reopen_closed_tab(app)?;
        }
        "focus_location" => focus_url_bar(app)?,
        "reload" => reload(app)?,
        "toggle_fullscreen" => {
            toggle_fullscreen(app)?;
        }
        "go_back" => go_back(app)?,
        "go_forward" => go_forward(app)?,
        "go_home" => {
            go_home(app)?;
        }
        _ => {}
    }
    Ok(())
}

/// Opens a tab at `input` (normalized like URL-field text) or the homepage.
pub fn open_tab(app: &AppHandle, input: Option<String>, title: Option<String>) -> Result<Tab> {
    let state = app.state::<AppState>();
    let url = {
        let settings = state.settings.read()?;
        match input {
            Some(text) => smart_parse_url(&text, &settings),
            None => home_url(&settings),
        }
    };
    let parsed = Url::parse(&url)?;
    let tab = state.tabs.lock()?.open(url, title).clone();

    let built = main_window(app).and_then(|window| {
        let size = logical_size(&window)?;
        let bounds = layout::content_bounds(size.width, size.height);
        let builder = WebviewBuilder::new(&tab.webview_label, WebviewUrl::External(parsed))
            .on_page_load(handle_page_load);
        window.add_child(
            builder,
            LogicalPosition::new(bounds.x, bounds.y),
            LogicalSize::new(bounds.width, bounds.height),
        )?;
        Ok(())
    });
    if let Err(e) = built {
        state.tabs.lock()?.discard(&tab.id);
        return Err(e);
    }

    show_only(app, &tab.webview_label)?;
    emit_tabs(app)?;
    log::info!("[Tabs] Opened {} at {}", tab.id, tab.url);
    Ok(tab)
}

/// Switches to tab `id`. Re-selecting the active tab changes nothing and
/// emits nothing, so the toolbar does not redraw under the pointer.
pub fn activate_tab(app: &AppHandle, id: &str) -> Result<bool> {
    let label = {
        let state = app.state::<AppState>();
        let mut tabs = state.tabs.lock()?;
        if !tabs.activate(id)? {
            return Ok(false);
        }
        tabs.active().map(|t| t.webview_label.clone())
    };
    if let Some(label) = label {
        show_only(app, &label)?;
    }
    emit_tabs(app)?;
    Ok(true)
}

/// Closes the tab at `index`. Returns false when it was the last tab.
pub fn close_tab(app: &AppHandle, index: usize) -> Result<bool> {
    let state = app.state::<AppState>();
    let (closed, active_label) = {
        let mut tabs = state.tabs.lock()?;
        let closed = tabs.close(index)?;
        (closed, tabs.active().map(|t| t.webview_label.clone()))
    };
    let Some(closed) = closed else {
        log::debug!("[Tabs] Ignoring close of the last tab");
        return Ok(false);
    };

    state.closed_tabs.lock()?.archive(&closed);
    // The model already dropped the tab; a stuck webview must not block the UI update
    if let Some(webview) = app.get_webview(&closed.webview_label) {
        if let Err(e) = webview.close() {
            log::warn!("[Tabs] Failed to close webview {}: {}", closed.webview_label, e);
        }
    }
    if let Some(label) = active_label {
        show_only(app, &label)?;
    }
    emit_tabs(app)?;
    log::info!("[Tabs] Closed {}", closed.id);
    Ok(true)
}

pub fn rename_tab(app: &AppHandle, index: usize, text: &str) -> Result<bool> {
    let renamed = app.state::<AppState>().tabs.lock()?.rename(index, text)?;
    if renamed {
        emit_tabs(app)?;
    }
    Ok(renamed)
}

pub fn reorder_tabs(app: &AppHandle, new_order: &[String]) -> Result<bool> {
    let changed = app.state::<AppState>().tabs.lock()?.reorder(new_order);
    if changed {
        emit_tabs(app)?;
    }
    Ok(changed)
}

pub fn reopen_closed_tab(app: &AppHandle) -> Result<Option<Tab>> {
    let closed = app.state::<AppState>().closed_tabs.lock()?.pop();
    match closed {
        Some(closed) => open_tab(app, Some(closed.url), Some(closed.title)).map(Some),
        None => Ok(None),
    }
}

fn active_index(app: &AppHandle) -> Result<usize> {
    let state = app.state::<AppState>();
    let tabs = state.tabs.lock()?;
    tabs.active_id()
        .and_then(|id| tabs.index_of(id))
        .ok_or(BrowserError::NoActiveTab)
}

fn active_webview(app: &AppHandle) -> Result<Webview> {
    let label = app
        .state::<AppState>()
        .tabs
        .lock()?
        .active()
        .map(|t| t.webview_label.clone())
        .ok_or(BrowserError::NoActiveTab)?;
    app.get_webview(&label).ok_or(BrowserError::NoActiveTab)
}

/// Loads URL-field text in the active tab. Returns the URL actually loaded.
pub fn navigate(app: &AppHandle, input: &str) -> Result<String> {
    let url = {
        let state = app.state::<AppState>();
        let settings = state.settings.read()?;
        smart_parse_url(input, &settings)
    };
    active_webview(app)?.navigate(Url::parse(&url)?)?;
    log::info!("[Navigation] {}", url);
    Ok(url)
}

pub fn go_home(app: &AppHandle) -> Result<String> {
    let homepage = app.state::<AppState>().settings.read()?.homepage.clone();
    navigate(app, &homepage)
}

pub fn go_back(app: &AppHandle) -> Result<()> {
    active_webview(app)?.eval("window.history.back()")?;
    Ok(())
}

pub fn go_forward(app: &AppHandle) -> Result<()> {
    active_webview(app)?.eval("window.history.forward()")?;
    Ok(())
}

pub fn reload(app: &AppHandle) -> Result<()> {
    active_webview(app)?.eval("window.location.reload()")?;
    Ok(())
}

pub fn toggle_fullscreen(app: &AppHandle) -> Result<DisplayMode> {
    let mode = app.state::<AppState>().fullscreen.lock()?.toggle();
    let window = main_window(app)?;
    match mode {
        DisplayMode::Fullscreen => window.set_fullscreen(true)?,
        DisplayMode::Maximized => {
            window.set_fullscreen(false)?;
            window.maximize()?;
        }
    }
    log::info!("[Window] Display mode: {:?}", mode);
    Ok(mode)
}

pub fn focus_url_bar(app: &AppHandle) -> Result<()> {
    main_window(app)?.set_focus()?;
    if let Some(toolbar) = app.get_webview(TOOLBAR_WEBVIEW) {
        toolbar.set_focus()?;
    }
    app.emit("focus-url-bar", ())?;
    Ok(())
}

pub fn tab_at_position(app: &AppHandle, x: f64, scroll_left: f64) -> Result<Option<usize>> {
    let width = logical_size(&main_window(app)?)?.width;
    let count = app.state::<AppState>().tabs.lock()?.len();
    Ok(layout::tab_at(x, scroll_left, width, count))
}

pub fn tabs_snapshot(app: &AppHandle) -> Result<TabsSnapshot> {
    let width = logical_size(&main_window(app)?)?.width;
    let snapshot = app.state::<AppState>().tabs.lock()?.snapshot(width);
    Ok(snapshot)
}

fn emit_tabs(app: &AppHandle) -> Result<()> {
    app.emit("update-tabs", tabs_snapshot(app)?)?;
    Ok(())
}

/// Shows the webview for `label` and hides every other tab.
fn show_only(app: &AppHandle, label: &str) -> Result<()> {
    let labels: Vec<String> = app
        .state::<AppState>()
        .tabs
        .lock()?
        .tabs()
        .iter()
        .map(|t| t.webview_label.clone())
        .collect();

    for other in labels.iter().filter(|l| l.as_str() != label) {
        if let Some(webview) = app.get_webview(other) {
            webview.hide()?;
        }
    }
    if let Some(webview) = app.get_webview(label) {
        webview.show()?;
    }
    Ok(())
}

fn relayout(app: &AppHandle) -> Result<()> {
    let size = logical_size(&main_window(app)?)?;

    if let Some(toolbar) = app.get_webview(TOOLBAR_WEBVIEW) {
        toolbar.set_bounds(to_bounds(layout::toolbar_bounds(size.width)))?;
    }

    let content = layout::content_bounds(size.width, size.height);
    let labels: Vec<String> = app
        .state::<AppState>()
        .tabs
        .lock()?
        .tabs()
        .iter()
        .map(|t| t.webview_label.clone())
        .collect();
    for label in labels {
        if let Some(webview) = app.get_webview(&label) {
            webview.set_bounds(to_bounds(content))?;
        }
    }

    // Tab widths follow the window width
    emit_tabs(app)
}

/// Mirrors page-load notifications into the tab model and the toolbar.
fn handle_page_load(webview: Webview, payload: PageLoadPayload<'_>) {
    let app = webview.app_handle();
    let label = webview.label();
    let url = payload.url().as_str();

    let changed = {
        let state = app.state::<AppState>();
        let mut tabs = match state.tabs.lock() {
            Ok(tabs) => tabs,
            Err(_) => {
                log::warn!("[Tabs] State poisoned, dropping page-load event for {}", label);
                return;
            }
        };
        let url_changed = tabs.set_url(label, url);
        let loading_changed = match payload.event() {
            PageLoadEvent::Started => tabs.set_loading(label, true),
            PageLoadEvent::Finished => tabs.set_loading(label, false),
        };
        url_changed || loading_changed
    };

    log::debug!("[Navigation] {} {:?} {}", label, payload.event(), url);
    if changed {
        if let Err(e) = emit_tabs(app) {
            log::warn!("[Tabs] Failed to emit update: {}", e);
        }
    }
}
