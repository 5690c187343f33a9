//! Accessibility preference model and store.
//!
//! This module provides:
//! - The preference set with defaults, range clamping, and partial updates
//! - The preference store tying persistence and presentation together
//! - The apply algorithm that projects a preference set onto a surface

pub mod set;
pub mod store;

// Re-export primary types
pub use set::{ColorBlindMode, PreferenceSet, PreferenceUpdate};
pub use store::{apply_settings, PreferenceStore, SETTINGS_KEY};
