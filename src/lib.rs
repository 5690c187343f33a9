//! Nexus Access - Accessibility Preference Engine
//!
//! The accessibility core of the Nexus productivity hub: a persisted store
//! of named accessibility preferences and the idempotent application of
//! their presentation side effects. Storage and the document are trait
//! seams, so the engine runs headless and tests need no rendering
//! environment.

pub mod onboarding;
pub mod preferences;
pub mod presentation;
pub mod storage;

// Re-export commonly used types
pub use onboarding::{OnboardingFlow, OnboardingStep};
pub use preferences::{ColorBlindMode, PreferenceSet, PreferenceStore, PreferenceUpdate};
pub use presentation::{Announcer, DocumentState, PresentationSurface, Target};
pub use storage::{FileStorage, MemoryStorage, SettingsStorage, StorageError};
