// Accelerator validation - pure logic, no Tauri imports.
// Menu builders silently drop accelerators they can't parse, so settings are
// checked here before they reach the menu.

use crate::error::{BrowserError, Result};

const MODIFIERS: [&str; 11] = [
    "cmdorctrl", "commandorcontrol", "cmd", "command", "super", "ctrl", "control", "alt",
    "option", "shift", "meta",
];

const NAMED_KEYS: [&str; 22] = [
    "space", "enter", "return", "tab", "backspace", "delete", "escape", "esc", "home", "end",
    "pageup", "pagedown", "insert", "up", "down", "left", "right", "plus", "minus", "comma",
    "period", "slash",
];

fn is_key(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();

    // F1..F24
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        return (1..=24).contains(&n);
    }

    let mut chars = lower.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_ascii_alphanumeric() || "[];',./\\`=-".contains(c);
    }

    NAMED_KEYS.contains(&lower.as_str())
}

/// Checks an accelerator like "F11" or "CmdOrCtrl+Shift+F": any number of
/// distinct modifiers followed by exactly one key.
pub fn validate_accelerator(accelerator: &str) -> Result<()> {
    let invalid = || BrowserError::InvalidShortcut(accelerator.to_string());

    let tokens: Vec<&str> = accelerator.split('+').map(str::trim).collect();
    let (key, modifiers) = tokens.split_last().ok_or_else(invalid)?;
    if !is_key(key) {
        return Err(invalid());
    }

    let mut seen = Vec::with_capacity(modifiers.len());
    for modifier in modifiers {
        let lower = modifier.to_ascii_lowercase();
        if !MODIFIERS.contains(&lower.as_str()) || seen.contains(&lower) {
            return Err(invalid());
        }
        seen.push(lower);
    }
    Ok(())
}
