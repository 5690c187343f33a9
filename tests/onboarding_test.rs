//! Integration tests for the onboarding flow feeding the preference store.

use nexus_access::{
    DocumentState, MemoryStorage, OnboardingFlow, OnboardingStep, PreferenceStore,
    PreferenceUpdate,
};

fn new_store() -> PreferenceStore<MemoryStorage, DocumentState> {
    PreferenceStore::new(MemoryStorage::new(), DocumentState::new())
}

#[test]
fn test_full_wizard_run() {
    let mut store = new_store();
    let mut flow = OnboardingFlow::new();

    assert!(flow.should_show(store.settings()));
    assert_eq!(flow.current_step(), OnboardingStep::Welcome);
    flow.next_step();

    assert_eq!(flow.current_step(), OnboardingStep::NeedsSelection);
    flow.toggle_need("low-vision");
    flow.toggle_need("screen-reader");
    flow.next_step();

    assert_eq!(flow.current_step(), OnboardingStep::DisplayPreferences);
    *flow.draft_mut() = PreferenceUpdate::new()
        .with_font_size(22)
        .with_high_contrast(true)
        .with_screen_reader(true);
    flow.next_step();

    assert_eq!(flow.current_step(), OnboardingStep::Complete);
    let settings = flow.finish(&mut store).clone();

    assert!(settings.onboarding_completed);
    assert_eq!(settings.font_size_px, 22);
    assert!(settings.high_contrast);
    assert_eq!(settings.selected_needs, vec!["low-vision", "screen-reader"]);

    // Side effects landed on the surface too
    assert_eq!(store.surface().live_region_count(), 1);

    // A new flow against the finished settings stays hidden
    let flow = OnboardingFlow::new();
    assert!(!flow.should_show(store.settings()));
}

#[test]
fn test_skip_leaves_preferences_untouched() {
    let store = new_store();
    let mut flow = OnboardingFlow::new();

    flow.skip();
    assert!(flow.is_skipped());
    assert!(!flow.should_show(store.settings()));
    assert!(!store.settings().onboarding_completed);
}

#[test]
fn test_restart_clears_selections_and_draft() {
    let mut flow = OnboardingFlow::new();
    flow.toggle_need("motor");
    *flow.draft_mut() = PreferenceUpdate::new().with_dark_mode(true);
    flow.next_step();

    flow.restart();
    assert_eq!(flow.current_step(), OnboardingStep::Welcome);
    assert!(flow.selected_needs().is_empty());
    assert!(flow.draft().is_empty());
    assert_eq!(flow.progress_percent(), 0);
}

#[test]
fn test_finish_persists_through_storage() {
    let mut store = new_store();
    let mut flow = OnboardingFlow::new();
    flow.toggle_need("hearing");
    flow.finish(&mut store);

    assert!(store.settings().onboarding_completed);
    assert_eq!(store.settings().selected_needs, vec!["hearing"]);
}
