//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the Next shortcut: Cmd on macOS, Ctrl elsewhere
#[cfg(target_os = "macos")]
pub const NEXT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const NEXT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// How the Next shortcut is shown in hints
#[cfg(target_os = "macos")]
pub const NEXT_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const NEXT_SHORTCUT: &str = "Ctrl+N";
