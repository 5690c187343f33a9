//! The abstract surface preferences are projected onto.
//!
//! Class and variable names match the stylesheet the Nexus web client ships,
//! so a DOM-backed implementation is a direct passthrough.

use crate::preferences::ColorBlindMode;

/// Style variable holding the base font size (`<n>px`).
pub const BASE_FONT_SIZE_VAR: &str = "--base-font-size";
/// Style variable components check for reduced motion (`"1"` or `"0"`).
pub const REDUCED_MOTION_VAR: &str = "--reduced-motion";

/// Root class for the high contrast theme.
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";
/// Root and body class for the dark theme.
pub const DARK_CLASS: &str = "dark";
/// Root and body class for reduced motion.
pub const REDUCED_MOTION_CLASS: &str = "reduced-motion";
/// Body class for screen reader optimizations.
pub const SCREEN_READER_CLASS: &str = "screen-reader-optimized";

/// Identifier of the single live-announcement region.
pub const LIVE_REGION_ID: &str = "sr-announcements";

/// Root classes for the color-blind simulation modes. Cleared as a group
/// before the active mode's class is added, so stale modes never linger.
pub const COLOR_BLIND_CLASSES: [&str; 3] = [
    "colorblind-protanopia",
    "colorblind-deuteranopia",
    "colorblind-tritanopia",
];

/// The class for a color-blind mode, or `None` for no simulation.
pub fn color_blind_class(mode: ColorBlindMode) -> Option<&'static str> {
    match mode {
        ColorBlindMode::None => None,
        ColorBlindMode::Protanopia => Some(COLOR_BLIND_CLASSES[0]),
        ColorBlindMode::Deuteranopia => Some(COLOR_BLIND_CLASSES[1]),
        ColorBlindMode::Tritanopia => Some(COLOR_BLIND_CLASSES[2]),
    }
}

/// Element a class applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The document root element
    Root,
    /// The body element
    Body,
}

/// Assertiveness of a live region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Politeness {
    /// Announced at the next graceful opportunity
    #[default]
    Polite,
    /// Interrupts current speech
    Assertive,
}

impl Politeness {
    /// The `aria-live` attribute value for this politeness.
    pub fn as_aria_value(&self) -> &'static str {
        match self {
            Politeness::Polite => "polite",
            Politeness::Assertive => "assertive",
        }
    }
}

/// Handle to the document's styling and classification state.
///
/// All operations are idempotent: adding a present class, removing an absent
/// one, ensuring an existing live region, or removing a missing one are all
/// no-ops.
pub trait PresentationSurface {
    /// Set a style variable on the root element.
    fn set_style_var(&mut self, name: &str, value: &str);

    /// Add a class to the target element.
    fn add_class(&mut self, target: Target, class: &str);

    /// Remove a class from the target element.
    fn remove_class(&mut self, target: Target, class: &str);

    /// Create the live-announcement region if it does not already exist.
    fn ensure_live_region(&mut self, id: &str, politeness: Politeness, atomic: bool);

    /// Remove the live-announcement region, tolerating absence.
    fn remove_live_region(&mut self, id: &str);

    /// Check whether the live-announcement region exists.
    fn has_live_region(&self, id: &str) -> bool;

    /// Replace the text content of the live-announcement region. No-op when
    /// the region does not exist.
    fn set_live_region_text(&mut self, id: &str, text: &str);
}
