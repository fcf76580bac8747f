// Module exports for pure logic
pub mod closed_tabs;   // Recently closed tabs stack
pub mod fullscreen;    // Two-state display mode
pub mod layout;        // Toolbar/content geometry and tab hit-testing
pub mod navigation;    // URL field parsing
pub mod shortcut;      // Menu accelerator validation
pub mod tabs;          // Tab model
