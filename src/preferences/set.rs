//! The accessibility preference set and its partial-update type.
//!
//! Preferences are persisted as a flat JSON object using the field names the
//! Nexus web client wrote (`fontSize`, `colorBlindMode`, ...), so settings
//! saved by older builds load unchanged. Missing fields keep their defaults
//! and unknown fields are ignored, which is what lets the schema grow.

use serde::{Deserialize, Deserializer, Serialize};

/// Minimum base font size in pixels.
pub const FONT_SIZE_MIN: u32 = 12;
/// Maximum base font size in pixels.
pub const FONT_SIZE_MAX: u32 = 32;
/// Minimum voice playback speed multiplier.
pub const VOICE_SPEED_MIN: f32 = 0.5;
/// Maximum voice playback speed multiplier.
pub const VOICE_SPEED_MAX: f32 = 2.0;

/// Color vision deficiency simulation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBlindMode {
    /// No simulation
    #[default]
    None,
    /// Red-blind (~1% of males)
    Protanopia,
    /// Green-blind (most common)
    Deuteranopia,
    /// Blue-blind (very rare)
    Tritanopia,
}

impl ColorBlindMode {
    /// Parse a stored mode string, falling back to `None` for anything
    /// unrecognized. Stored data is never trusted to stay in range.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "protanopia" => ColorBlindMode::Protanopia,
            "deuteranopia" => ColorBlindMode::Deuteranopia,
            "tritanopia" => ColorBlindMode::Tritanopia,
            _ => ColorBlindMode::None,
        }
    }

    /// The serialized form of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorBlindMode::None => "none",
            ColorBlindMode::Protanopia => "protanopia",
            ColorBlindMode::Deuteranopia => "deuteranopia",
            ColorBlindMode::Tritanopia => "tritanopia",
        }
    }

    /// All simulation modes (excluding `None`).
    pub fn simulations() -> &'static [ColorBlindMode] {
        &[
            ColorBlindMode::Protanopia,
            ColorBlindMode::Deuteranopia,
            ColorBlindMode::Tritanopia,
        ]
    }
}

impl<'de> Deserialize<'de> for ColorBlindMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(ColorBlindMode::from_str_lossy(&value))
    }
}

impl std::fmt::Display for ColorBlindMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorBlindMode::None => write!(f, "None"),
            ColorBlindMode::Protanopia => write!(f, "Protanopia (Red-Blind)"),
            ColorBlindMode::Deuteranopia => write!(f, "Deuteranopia (Green-Blind)"),
            ColorBlindMode::Tritanopia => write!(f, "Tritanopia (Blue-Blind)"),
        }
    }
}

/// A complete set of accessibility preferences for one user session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceSet {
    /// Base font size in pixels (12-32)
    #[serde(rename = "fontSize")]
    pub font_size_px: u32,
    /// Voice playback speed multiplier (0.5-2.0)
    pub voice_speed: f32,
    /// High contrast theme
    pub high_contrast: bool,
    /// Dark theme
    pub dark_mode: bool,
    /// Disable animations and transitions
    pub reduced_motion: bool,
    /// Color vision deficiency simulation
    pub color_blind_mode: ColorBlindMode,
    /// Hotkeys enabled
    pub keyboard_shortcuts: bool,
    /// Screen reader optimizations (NVDA, JAWS, VoiceOver)
    pub screen_reader: bool,
    /// Need tags chosen during onboarding, in selection order
    pub selected_needs: Vec<String>,
    /// Whether the onboarding wizard has been completed
    pub onboarding_completed: bool,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            font_size_px: 16,
            voice_speed: 1.0,
            high_contrast: false,
            dark_mode: false,
            reduced_motion: false,
            color_blind_mode: ColorBlindMode::None,
            keyboard_shortcuts: true,
            screen_reader: false,
            selected_needs: Vec::new(),
            onboarding_completed: false,
        }
    }
}

impl PreferenceSet {
    /// Clamp ranged fields in place.
    pub fn clamp_ranges(&mut self) {
        self.font_size_px = self.font_size_px.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        self.voice_speed = self.voice_speed.clamp(VOICE_SPEED_MIN, VOICE_SPEED_MAX);
    }

    /// A copy with ranged fields clamped.
    pub fn clamped(&self) -> Self {
        let mut set = self.clone();
        set.clamp_ranges();
        set
    }

    /// Merge a partial update into this set. Field-level last-write-wins;
    /// `None` fields leave the current value untouched.
    pub fn merge_update(&mut self, update: &PreferenceUpdate) {
        if let Some(font_size_px) = update.font_size_px {
            self.font_size_px = font_size_px;
        }
        if let Some(voice_speed) = update.voice_speed {
            self.voice_speed = voice_speed;
        }
        if let Some(high_contrast) = update.high_contrast {
            self.high_contrast = high_contrast;
        }
        if let Some(dark_mode) = update.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(reduced_motion) = update.reduced_motion {
            self.reduced_motion = reduced_motion;
        }
        if let Some(color_blind_mode) = update.color_blind_mode {
            self.color_blind_mode = color_blind_mode;
        }
        if let Some(keyboard_shortcuts) = update.keyboard_shortcuts {
            self.keyboard_shortcuts = keyboard_shortcuts;
        }
        if let Some(screen_reader) = update.screen_reader {
            self.screen_reader = screen_reader;
        }
        if let Some(selected_needs) = &update.selected_needs {
            self.selected_needs = selected_needs.clone();
        }
        if let Some(onboarding_completed) = update.onboarding_completed {
            self.onboarding_completed = onboarding_completed;
        }
    }
}

/// A partial update to a [`PreferenceSet`]. Every field is optional; set
/// fields overwrite, unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceUpdate {
    #[serde(rename = "fontSize", skip_serializing_if = "Option::is_none")]
    pub font_size_px: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_blind_mode: Option<ColorBlindMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard_shortcuts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_reader: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_needs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_completed: Option<bool>,
}

impl PreferenceUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether any field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set the base font size.
    pub fn with_font_size(mut self, px: u32) -> Self {
        self.font_size_px = Some(px);
        self
    }

    /// Set the voice speed multiplier.
    pub fn with_voice_speed(mut self, speed: f32) -> Self {
        self.voice_speed = Some(speed);
        self
    }

    /// Set high contrast on or off.
    pub fn with_high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = Some(enabled);
        self
    }

    /// Set dark mode on or off.
    pub fn with_dark_mode(mut self, enabled: bool) -> Self {
        self.dark_mode = Some(enabled);
        self
    }

    /// Set reduced motion on or off.
    pub fn with_reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = Some(enabled);
        self
    }

    /// Set the color-blind simulation mode.
    pub fn with_color_blind_mode(mut self, mode: ColorBlindMode) -> Self {
        self.color_blind_mode = Some(mode);
        self
    }

    /// Set keyboard shortcuts on or off.
    pub fn with_keyboard_shortcuts(mut self, enabled: bool) -> Self {
        self.keyboard_shortcuts = Some(enabled);
        self
    }

    /// Set screen reader mode on or off.
    pub fn with_screen_reader(mut self, enabled: bool) -> Self {
        self.screen_reader = Some(enabled);
        self
    }

    /// Set the selected need tags.
    pub fn with_selected_needs(mut self, needs: Vec<String>) -> Self {
        self.selected_needs = Some(needs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let set = PreferenceSet::default();
        assert_eq!(set.font_size_px, 16);
        assert_eq!(set.voice_speed, 1.0);
        assert!(set.keyboard_shortcuts);
        assert!(!set.dark_mode);
        assert_eq!(set.color_blind_mode, ColorBlindMode::None);
        assert!(set.selected_needs.is_empty());
        assert!(!set.onboarding_completed);
    }

    #[test]
    fn test_clamp_ranges() {
        let mut set = PreferenceSet {
            font_size_px: 40,
            voice_speed: 0.1,
            ..Default::default()
        };
        set.clamp_ranges();
        assert_eq!(set.font_size_px, 32);
        assert_eq!(set.voice_speed, 0.5);

        let mut set = PreferenceSet {
            font_size_px: 5,
            voice_speed: 3.0,
            ..Default::default()
        };
        set.clamp_ranges();
        assert_eq!(set.font_size_px, 12);
        assert_eq!(set.voice_speed, 2.0);
    }

    #[test]
    fn test_merge_update_is_field_level() {
        let mut set = PreferenceSet::default();
        set.merge_update(&PreferenceUpdate::new().with_dark_mode(true));
        set.merge_update(&PreferenceUpdate::new().with_font_size(20));

        assert!(set.dark_mode);
        assert_eq!(set.font_size_px, 20);
        // Untouched fields keep their values
        assert!(set.keyboard_shortcuts);
    }

    #[test]
    fn test_color_blind_mode_lossy_parse() {
        assert_eq!(
            ColorBlindMode::from_str_lossy("deuteranopia"),
            ColorBlindMode::Deuteranopia
        );
        assert_eq!(
            ColorBlindMode::from_str_lossy("monochromacy"),
            ColorBlindMode::None
        );
        assert_eq!(ColorBlindMode::from_str_lossy(""), ColorBlindMode::None);
    }

    #[test]
    fn test_serializes_with_web_client_field_names() {
        let set = PreferenceSet::default();
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"fontSize\":16"));
        assert!(json.contains("\"colorBlindMode\":\"none\""));
        assert!(json.contains("\"keyboardShortcuts\":true"));
    }

    #[test]
    fn test_partial_update_from_json() {
        let update: PreferenceUpdate =
            serde_json::from_str(r#"{"fontSize": 24, "darkMode": true}"#).unwrap();
        assert_eq!(update.font_size_px, Some(24));
        assert_eq!(update.dark_mode, Some(true));
        assert_eq!(update.voice_speed, None);
    }
}
