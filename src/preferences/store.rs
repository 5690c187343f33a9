//! The preference store.
//!
//! Owns the authoritative in-memory [`PreferenceSet`] and its two
//! collaborators: a durable storage backend and a presentation surface.
//! Every mutation persists the set and re-applies its side effects; both
//! steps tolerate a broken backend so the UI stays consistent even when
//! persistence is unavailable.

use crate::presentation::surface::{
    color_blind_class, Politeness, PresentationSurface, Target, BASE_FONT_SIZE_VAR,
    COLOR_BLIND_CLASSES, DARK_CLASS, HIGH_CONTRAST_CLASS, LIVE_REGION_ID, REDUCED_MOTION_CLASS,
    REDUCED_MOTION_VAR, SCREEN_READER_CLASS,
};
use crate::storage::SettingsStorage;

use super::set::{PreferenceSet, PreferenceUpdate};

/// Storage key the preference set is persisted under.
pub const SETTINGS_KEY: &str = "nexus-settings";

/// Accessibility preference store.
///
/// One instance exists per user session. It is an owned value handed to the
/// UI, not ambient global state, so tests can run it against an in-memory
/// storage and document.
pub struct PreferenceStore<S, P> {
    settings: PreferenceSet,
    storage: S,
    surface: P,
}

impl<S: SettingsStorage, P: PresentationSurface> PreferenceStore<S, P> {
    /// Create a store, loading persisted settings over defaults and applying
    /// their side effects immediately.
    pub fn new(storage: S, surface: P) -> Self {
        let settings = load_settings(&storage);
        let mut store = Self {
            settings,
            storage,
            surface,
        };
        store.reapply();
        store
    }

    /// The current preference set.
    pub fn settings(&self) -> &PreferenceSet {
        &self.settings
    }

    /// The presentation surface.
    pub fn surface(&self) -> &P {
        &self.surface
    }

    /// Mutable access to the presentation surface (announcement flushing).
    pub fn surface_mut(&mut self) -> &mut P {
        &mut self.surface
    }

    /// Merge a partial update into the current set, persist it, and apply
    /// its side effects. Field-level last-write-wins; safe to call on every
    /// tick of a dragged slider.
    pub fn update(&mut self, update: PreferenceUpdate) -> &PreferenceSet {
        self.settings.merge_update(&update);
        self.settings.clamp_ranges();
        self.persist();
        self.reapply();
        &self.settings
    }

    /// Like [`update`](Self::update), but unconditionally marks onboarding
    /// as completed.
    pub fn complete_onboarding(&mut self, mut update: PreferenceUpdate) -> &PreferenceSet {
        update.onboarding_completed = Some(true);
        tracing::info!("onboarding completed");
        self.update(update)
    }

    /// Restore defaults, clear the stored entry, and apply the defaults.
    pub fn reset(&mut self) -> &PreferenceSet {
        self.settings = PreferenceSet::default();
        if let Err(err) = self.storage.remove(SETTINGS_KEY) {
            tracing::warn!("failed to clear stored settings: {}", err);
        }
        self.reapply();
        &self.settings
    }

    /// Apply an arbitrary preference set to the surface. Out-of-range values
    /// are clamped before any effect is produced.
    pub fn apply(&mut self, settings: &PreferenceSet) {
        apply_settings(settings, &mut self.surface);
    }

    /// Re-apply the current set, e.g. after the surface was rebuilt.
    pub fn reapply(&mut self) {
        apply_settings(&self.settings, &mut self.surface);
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.settings) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(SETTINGS_KEY, &raw) {
                    tracing::warn!("failed to persist settings, keeping in-memory state: {}", err);
                }
            }
            Err(err) => {
                tracing::warn!("failed to serialize settings: {}", err);
            }
        }
    }
}

/// Read the persisted set, merged over defaults. Absent or malformed data
/// yields defaults; this never fails.
fn load_settings<S: SettingsStorage>(storage: &S) -> PreferenceSet {
    match storage.get(SETTINGS_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<PreferenceSet>(&raw) {
            Ok(parsed) => parsed.clamped(),
            Err(err) => {
                tracing::warn!("stored settings are malformed, using defaults: {}", err);
                PreferenceSet::default()
            }
        },
        Ok(None) => PreferenceSet::default(),
        Err(err) => {
            tracing::warn!("failed to read stored settings, using defaults: {}", err);
            PreferenceSet::default()
        }
    }
}

/// Project a preference set onto a surface.
///
/// Idempotent: applying the same set twice leaves the surface in the same
/// state, with no duplicated classes or live regions.
pub fn apply_settings(settings: &PreferenceSet, surface: &mut impl PresentationSurface) {
    let settings = settings.clamped();

    surface.set_style_var(BASE_FONT_SIZE_VAR, &format!("{}px", settings.font_size_px));

    if settings.high_contrast {
        surface.add_class(Target::Root, HIGH_CONTRAST_CLASS);
    } else {
        surface.remove_class(Target::Root, HIGH_CONTRAST_CLASS);
    }

    if settings.dark_mode {
        surface.add_class(Target::Root, DARK_CLASS);
        surface.add_class(Target::Body, DARK_CLASS);
    } else {
        surface.remove_class(Target::Root, DARK_CLASS);
        surface.remove_class(Target::Body, DARK_CLASS);
    }

    if settings.reduced_motion {
        surface.add_class(Target::Root, REDUCED_MOTION_CLASS);
        surface.add_class(Target::Body, REDUCED_MOTION_CLASS);
        surface.set_style_var(REDUCED_MOTION_VAR, "1");
    } else {
        surface.remove_class(Target::Root, REDUCED_MOTION_CLASS);
        surface.remove_class(Target::Body, REDUCED_MOTION_CLASS);
        surface.set_style_var(REDUCED_MOTION_VAR, "0");
    }

    if settings.screen_reader {
        surface.add_class(Target::Body, SCREEN_READER_CLASS);
        surface.ensure_live_region(LIVE_REGION_ID, Politeness::Polite, true);
    } else {
        surface.remove_class(Target::Body, SCREEN_READER_CLASS);
        surface.remove_live_region(LIVE_REGION_ID);
    }

    // Clear all simulation classes before adding the active one, so a mode
    // switch never leaves two modes on the root at once.
    for class in COLOR_BLIND_CLASSES {
        surface.remove_class(Target::Root, class);
    }
    if let Some(class) = color_blind_class(settings.color_blind_mode) {
        surface.add_class(Target::Root, class);
    }

    tracing::debug!(
        font_size_px = settings.font_size_px,
        dark_mode = settings.dark_mode,
        color_blind_mode = %settings.color_blind_mode,
        "applied accessibility settings"
    );
}
