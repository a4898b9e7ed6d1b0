//! Platform-specific configuration

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Step jump hint for the status bar
/// - macOS: function keys usually need the fn modifier
/// - Linux/Windows: plain F1-F3
#[cfg(target_os = "macos")]
pub const STEP_JUMP_HINT: &str = "fn+F1-F3:step";

#[cfg(not(target_os = "macos"))]
pub const STEP_JUMP_HINT: &str = "F1-F3:step";
