//! Onboarding module for first-time user experience.
//!
//! A short guided wizard: welcome, pick accessibility needs, tune display
//! preferences, done. The flow accumulates a draft preference update and the
//! selected need tags, then submits both through the store's
//! `complete_onboarding`.

pub mod steps;

// Re-export types
pub use steps::OnboardingStep;

use crate::preferences::{PreferenceSet, PreferenceStore, PreferenceUpdate};
use crate::presentation::PresentationSurface;
use crate::storage::SettingsStorage;

/// Need tags offered during onboarding. Free-form tags are accepted too.
pub fn suggested_needs() -> &'static [&'static str] {
    &[
        "low-vision",
        "color-blind",
        "screen-reader",
        "motor",
        "hearing",
        "cognitive",
    ]
}

/// State of the onboarding wizard.
#[derive(Debug, Clone, Default)]
pub struct OnboardingFlow {
    current_step: OnboardingStep,
    completed_steps: Vec<OnboardingStep>,
    skipped: bool,
    selected_needs: Vec<String>,
    draft: PreferenceUpdate,
}

impl OnboardingFlow {
    /// Create a flow at the welcome step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current step.
    pub fn current_step(&self) -> OnboardingStep {
        self.current_step
    }

    /// Check if a specific step has been completed.
    pub fn is_step_complete(&self, step: OnboardingStep) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Check whether the wizard should be shown for the given settings.
    pub fn should_show(&self, settings: &PreferenceSet) -> bool {
        !settings.onboarding_completed && !self.skipped
    }

    /// Mark the current step as complete and advance.
    pub fn next_step(&mut self) {
        if !self.completed_steps.contains(&self.current_step) {
            self.completed_steps.push(self.current_step);
        }
        if let Some(next) = self.current_step.next() {
            self.current_step = next;
        }
    }

    /// Go back to the previous step.
    pub fn previous_step(&mut self) {
        if let Some(prev) = self.current_step.previous() {
            self.current_step = prev;
        }
    }

    /// Skip the wizard without submitting any preferences.
    pub fn skip(&mut self) {
        self.skipped = true;
    }

    /// Check whether the user chose to skip.
    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    /// Restart from the welcome step, clearing selections and the draft.
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// Get progress as a percentage (0-100).
    pub fn progress_percent(&self) -> u8 {
        let total = OnboardingStep::all().len();
        let completed = self.completed_steps.len().min(total);
        ((completed * 100) / total) as u8
    }

    /// Toggle a need tag. First selection order is preserved; toggling a
    /// selected tag removes it.
    pub fn toggle_need(&mut self, need: &str) {
        if let Some(pos) = self.selected_needs.iter().position(|n| n == need) {
            self.selected_needs.remove(pos);
        } else {
            self.selected_needs.push(need.to_string());
        }
    }

    /// Check whether a need tag is selected.
    pub fn has_need(&self, need: &str) -> bool {
        self.selected_needs.iter().any(|n| n == need)
    }

    /// The selected need tags, in selection order.
    pub fn selected_needs(&self) -> &[String] {
        &self.selected_needs
    }

    /// The draft preference update built up during the wizard.
    pub fn draft(&self) -> &PreferenceUpdate {
        &self.draft
    }

    /// Mutable access to the draft for the preference steps.
    pub fn draft_mut(&mut self) -> &mut PreferenceUpdate {
        &mut self.draft
    }

    /// Submit the draft and selected needs through the store, marking
    /// onboarding as completed.
    pub fn finish<'a, S, P>(mut self, store: &'a mut PreferenceStore<S, P>) -> &'a PreferenceSet
    where
        S: SettingsStorage,
        P: PresentationSurface,
    {
        self.draft.selected_needs = Some(self.selected_needs);
        store.complete_onboarding(self.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        let mut flow = OnboardingFlow::new();
        assert_eq!(flow.current_step(), OnboardingStep::Welcome);

        flow.next_step();
        assert_eq!(flow.current_step(), OnboardingStep::NeedsSelection);
        assert!(flow.is_step_complete(OnboardingStep::Welcome));

        flow.previous_step();
        assert_eq!(flow.current_step(), OnboardingStep::Welcome);
    }

    #[test]
    fn test_toggle_need_preserves_order() {
        let mut flow = OnboardingFlow::new();
        flow.toggle_need("low-vision");
        flow.toggle_need("hearing");
        flow.toggle_need("low-vision");
        flow.toggle_need("motor");

        assert_eq!(flow.selected_needs(), &["hearing", "motor"]);
        assert!(!flow.has_need("low-vision"));
    }

    #[test]
    fn test_suggested_needs_are_unique() {
        let needs = suggested_needs();
        let unique: std::collections::BTreeSet<_> = needs.iter().collect();
        assert_eq!(unique.len(), needs.len());
        assert!(!needs.is_empty());
    }

    #[test]
    fn test_progress_percent() {
        let mut flow = OnboardingFlow::new();
        assert_eq!(flow.progress_percent(), 0);
        flow.next_step();
        assert_eq!(flow.progress_percent(), 25);
    }
}
