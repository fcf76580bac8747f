// Fullscreen flag - pure logic, no Tauri imports.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum DisplayMode {
    #[default]
    Maximized,
    Fullscreen,
}

#[derive(Debug, Default)]
pub struct FullscreenState {
    mode: DisplayMode,
}

impl FullscreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_fullscreen(&self) -> bool {
        self.mode == DisplayMode::Fullscreen
    }

    /// Flips the flag and returns the mode the window should switch to.
    pub fn toggle(&mut self) -> DisplayMode {
        self.mode = match self.mode {
            DisplayMode::Maximized => DisplayMode::Fullscreen,
            DisplayMode::Fullscreen => DisplayMode::Maximized,
        };
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_maximized() {
        let state = FullscreenState::new();
        assert_eq!(state.mode(), DisplayMode::Maximized);
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = FullscreenState::new();
        assert_eq!(state.toggle(), DisplayMode::Fullscreen);
        assert!(state.is_fullscreen());
        assert_eq!(state.toggle(), DisplayMode::Maximized);
        assert!(!state.is_fullscreen());
    }
}
