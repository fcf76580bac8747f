// Crate-wide error type.
// Commands return it to the toolbar, so it serializes as its display string.

use serde::{Serialize, Serializer};

#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("tab index {index} is out of range ({len} tabs open)")]
    TabIndexOutOfRange { index: usize, len: usize },

    #[error("no tab with id '{0}'")]
    UnknownTab(String),

    #[error("no active tab")]
    NoActiveTab,

    #[error("window '{0}' is not available")]
    MissingWindow(String),

    #[error("'{0}' is not a valid keyboard shortcut")]
    InvalidShortcut(String),

    #[error("shared state lock was poisoned")]
    Poisoned,

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Tauri(#[from] tauri::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl<T> From<std::sync::PoisonError<T>> for BrowserError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::Poisoned
    }
}

impl Serialize for BrowserError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BrowserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_display_string() {
        let err = BrowserError::TabIndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            "\"tab index 4 is out of range (2 tabs open)\""
        );
    }

    #[test]
    fn poison_maps_to_poisoned() {
        let lock = std::sync::Arc::new(std::sync::Mutex::new(0));
        let cloned = lock.clone();
        let _ = std::thread::spawn(move || {
            let _guard = cloned.lock().unwrap();
            panic!("poison");
        })
        .join();
        let err: BrowserError = lock.lock().unwrap_err().into();
        assert!(matches!(err, BrowserError::Poisoned));
    }
}
