//! Onboarding wizard steps.

use serde::{Deserialize, Serialize};

/// Steps in the accessibility onboarding wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OnboardingStep {
    /// Welcome screen with overview
    #[default]
    Welcome,
    /// Pick the accessibility needs that apply
    NeedsSelection,
    /// Tune display preferences (text size, contrast, motion)
    DisplayPreferences,
    /// Completion screen
    Complete,
}

impl OnboardingStep {
    /// Get all steps in order.
    pub fn all() -> &'static [OnboardingStep] {
        &[
            OnboardingStep::Welcome,
            OnboardingStep::NeedsSelection,
            OnboardingStep::DisplayPreferences,
            OnboardingStep::Complete,
        ]
    }

    /// Get the step index (0-based).
    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    /// Get the next step, if any.
    pub fn next(&self) -> Option<OnboardingStep> {
        let steps = Self::all();
        let idx = self.index();
        if idx + 1 < steps.len() {
            Some(steps[idx + 1])
        } else {
            None
        }
    }

    /// Get the previous step, if any.
    pub fn previous(&self) -> Option<OnboardingStep> {
        let steps = Self::all();
        let idx = self.index();
        if idx > 0 {
            Some(steps[idx - 1])
        } else {
            None
        }
    }

    /// Get the title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "Welcome to Nexus",
            OnboardingStep::NeedsSelection => "Your Needs",
            OnboardingStep::DisplayPreferences => "Display Preferences",
            OnboardingStep::Complete => "All Set!",
        }
    }

    /// Get the description for this step.
    pub fn description(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "Let's tailor Nexus to the way you work.",
            OnboardingStep::NeedsSelection => {
                "Pick anything that applies. You can change this anytime."
            }
            OnboardingStep::DisplayPreferences => {
                "Adjust text size, contrast, and motion to what feels right."
            }
            OnboardingStep::Complete => "Your preferences are saved and active.",
        }
    }

    /// Check if this step can be skipped.
    pub fn is_skippable(&self) -> bool {
        match self {
            OnboardingStep::Welcome => false,
            OnboardingStep::NeedsSelection => true, // Needs can be picked later
            OnboardingStep::DisplayPreferences => true, // Defaults are usable
            OnboardingStep::Complete => false,
        }
    }

    /// Check if this is the first step.
    pub fn is_first(&self) -> bool {
        *self == OnboardingStep::Welcome
    }

    /// Check if this is the last step.
    pub fn is_last(&self) -> bool {
        *self == OnboardingStep::Complete
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
