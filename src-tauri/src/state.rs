// Shared state managed by Tauri.
// Holds the pure models; the webviews themselves live in the Tauri runtime.

use std::sync::{Arc, Mutex, RwLock};

use crate::modules::closed_tabs::ClosedTabs;
use crate::modules::fullscreen::FullscreenState;
use crate::modules::tabs::TabSet;
use crate::settings::Settings;

pub struct AppState {
    pub settings: Arc<RwLock<Settings>>,
    pub tabs: Arc<Mutex<TabSet>>,
    pub fullscreen: Arc<Mutex<FullscreenState>>,
    pub closed_tabs: Arc<Mutex<ClosedTabs>>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            tabs: Arc::new(Mutex::new(TabSet::new())),
            fullscreen: Arc::new(Mutex::new(FullscreenState::new())),
            closed_tabs: Arc::new(Mutex::new(ClosedTabs::new())),
        }
    }
}
