use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tauri::AppHandle;
use tauri::Manager;

use crate::error::Result;
use crate::modules::shortcut::validate_accelerator;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum SearchEngine {
    DuckDuckGo,
    #[default]
    Google,
    Bing,
    Brave,
}

impl SearchEngine {
    pub fn query_url(&self, query: &str) -> String {
        let q = urlencoding::encode(query);
        match self {
            Self::DuckDuckGo => format!("https://duckduckgo.com/?q={}", q),
            Self::Google => format!("https://google.com/search?q={}", q),
            Self::Bing => format!("https://bing.com/search?q={}", q),
            Self::Brave => format!("https://search.brave.com/search?q={}", q),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub homepage: String,
    pub search_engine: SearchEngine,
    pub https_only: bool,
    pub window_title: String,
    pub window_width: f64,
    pub window_height: f64,
    pub window_x: f64,
    pub window_y: f64,
    pub start_maximized: bool,
    /// Accelerator string, e.g. "F11" or "CmdOrCtrl+Shift+F".
    pub fullscreen_shortcut: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            homepage: "http://google.com".to_string(),
            search_engine: SearchEngine::default(),
            https_only: true,
            window_title: "Tabbed Browser".to_string(),
            window_width: 800.0,
            window_height: 600.0,
            window_x: 100.0,
            window_y: 100.0,
            start_maximized: true,
            fullscreen_shortcut: "F11".to_string(),
        }
    }
}

impl Settings {
    pub fn get_path(app: &AppHandle) -> Result<PathBuf> {
        Ok(app.path().app_data_dir()?.join(SETTINGS_FILE))
    }

    pub fn load(app: &AppHandle) -> Self {
        match Self::get_path(app) {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                log::warn!("[Settings] No app data dir ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Rejects values that would otherwise be dropped silently downstream.
    pub fn validate(&self) -> Result<()> {
        validate_accelerator(&self.fullscreen_shortcut)
    }

    pub fn save(&self, app: &AppHandle) -> Result<()> {
        self.save_to(&Self::get_path(app)?)
    }

    /// Missing or unreadable files fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::warn!("[Settings] No settings file at {:?}, returning defaults", path);
            return Self::default();
        }
        let mut settings: Self = match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("[Settings] Failed to parse settings: {}, returning defaults", e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("[Settings] Failed to read file: {}, returning defaults", e);
                Self::default()
            }
        };

        if let Err(e) = settings.validate() {
            log::warn!("[Settings] {}, using the default shortcut", e);
            settings.fullscreen_shortcut = Self::default().fullscreen_shortcut;
        }
        settings
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let tmp_path = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;

        // Write to tmp, then rename, so a crash never leaves a half-written file.
        fs::write(&tmp_path, json)?;
        fs::rename(tmp_path, path)?;

        log::debug!("[Settings] Saved to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::tempdir;

    #[rstest]
    #[case(SearchEngine::DuckDuckGo, "https://duckduckgo.com/?q=rust%20lang")]
    #[case(SearchEngine::Google, "https://google.com/search?q=rust%20lang")]
    #[case(SearchEngine::Bing, "https://bing.com/search?q=rust%20lang")]
    #[case(SearchEngine::Brave, "https://search.brave.com/search?q=rust%20lang")]
    fn test_query_url(#[case] engine: SearchEngine, #[case] expected: &str) {
        assert_eq!(engine.query_url("rust lang"), expected);
    }

    #[test]
    fn test_defaults_match_window_geometry() {
        let settings = Settings::default();
        assert_eq!(settings.homepage, "http://google.com");
        assert_eq!((settings.window_width, settings.window_height), (800.0, 600.0));
        assert_eq!((settings.window_x, settings.window_y), (100.0, 100.0));
        assert!(settings.start_maximized);
        assert_eq!(settings.fullscreen_shortcut, "F11");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.homepage = "https://example.org".to_string();
        settings.search_engine = SearchEngine::Brave;
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Settings::load_from(&dir.path().join("nope.json")), Settings::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_validate_rejects_bad_shortcut() {
        assert!(Settings::default().validate().is_ok());

        let settings = Settings {
            fullscreen_shortcut: "Ctrl+Nope".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(crate::error::BrowserError::InvalidShortcut(s)) if s == "Ctrl+Nope"
        ));
    }

    #[test]
    fn test_bad_shortcut_on_disk_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "homepage": "https://rust-lang.org", "fullscreen_shortcut": "Hyper+F" }"#).unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.fullscreen_shortcut, "F11");
        assert_eq!(settings.homepage, "https://rust-lang.org");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "homepage": "https://rust-lang.org" }"#).unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.homepage, "https://rust-lang.org");
        assert_eq!(settings.window_title, "Tabbed Browser");
    }
}
