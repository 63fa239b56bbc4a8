//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut.
/// Ctrl+S on every platform, Cmd+S is usually swallowed by the terminal on macOS.
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Toggle hint for the neighborhood list
/// - macOS: "Space/Return"
/// - Linux/Windows: "Space/Enter"
#[cfg(target_os = "macos")]
pub const TOGGLE_SHORTCUT: &str = "Space/Return";

#[cfg(not(target_os = "macos"))]
pub const TOGGLE_SHORTCUT: &str = "Space/Enter";
