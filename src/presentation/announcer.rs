//! Queued screen reader announcements.
//!
//! Messages are queued while the UI is busy and drained one at a time into
//! the live-announcement region the preference store maintains. Urgent
//! messages (errors, alerts) drain before polite ones.

use std::collections::VecDeque;

use super::surface::{PresentationSurface, LIVE_REGION_ID};

/// Announcement queues for screen reader users.
#[derive(Debug, Default)]
pub struct Announcer {
    enabled: bool,
    polite: VecDeque<String>,
    urgent: VecDeque<String>,
}

impl Announcer {
    /// Create a disabled announcer. Enable it when screen reader mode is on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether announcements are being collected.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable announcement collection. Disabling clears both
    /// queues so stale messages are not read out later.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.polite.clear();
            self.urgent.clear();
        }
    }

    /// Queue a polite announcement.
    pub fn announce(&mut self, message: impl Into<String>) {
        if self.enabled {
            let message = message.into();
            tracing::debug!("screen reader announce: {}", message);
            self.polite.push_back(message);
        }
    }

    /// Queue an urgent announcement, drained before polite ones.
    pub fn announce_urgent(&mut self, message: impl Into<String>) {
        if self.enabled {
            let message = message.into();
            tracing::debug!("screen reader urgent: {}", message);
            self.urgent.push_back(message);
        }
    }

    /// Check whether any announcement is waiting.
    pub fn has_pending(&self) -> bool {
        !self.polite.is_empty() || !self.urgent.is_empty()
    }

    /// Write the next pending message into the live-announcement region.
    ///
    /// Messages stay queued until the region exists, so nothing is lost when
    /// screen reader mode is toggled on just after an announcement.
    pub fn flush(&mut self, surface: &mut impl PresentationSurface) -> Option<String> {
        if !surface.has_live_region(LIVE_REGION_ID) {
            return None;
        }
        let message = self.urgent.pop_front().or_else(|| self.polite.pop_front())?;
        surface.set_live_region_text(LIVE_REGION_ID, &message);
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::document::DocumentState;
    use crate::presentation::surface::Politeness;

    fn doc_with_region() -> DocumentState {
        let mut doc = DocumentState::new();
        doc.ensure_live_region(LIVE_REGION_ID, Politeness::Polite, true);
        doc
    }

    #[test]
    fn test_disabled_announcer_collects_nothing() {
        let mut announcer = Announcer::new();
        announcer.announce("ignored");
        assert!(!announcer.has_pending());
    }

    #[test]
    fn test_urgent_drains_before_polite() {
        let mut announcer = Announcer::new();
        announcer.set_enabled(true);
        announcer.announce("settings saved");
        announcer.announce_urgent("connection lost");

        let mut doc = doc_with_region();
        assert_eq!(
            announcer.flush(&mut doc),
            Some("connection lost".to_string())
        );
        assert_eq!(announcer.flush(&mut doc), Some("settings saved".to_string()));
        assert_eq!(announcer.flush(&mut doc), None);
    }

    #[test]
    fn test_messages_wait_for_live_region() {
        let mut announcer = Announcer::new();
        announcer.set_enabled(true);
        announcer.announce("settings saved");

        let mut doc = DocumentState::new();
        assert_eq!(announcer.flush(&mut doc), None);
        assert!(announcer.has_pending());

        doc.ensure_live_region(LIVE_REGION_ID, Politeness::Polite, true);
        assert_eq!(announcer.flush(&mut doc), Some("settings saved".to_string()));
        assert_eq!(doc.live_region(LIVE_REGION_ID).unwrap().text, "settings saved");
    }

    #[test]
    fn test_disabling_clears_queues() {
        let mut announcer = Announcer::new();
        announcer.set_enabled(true);
        announcer.announce("stale");
        announcer.set_enabled(false);
        assert!(!announcer.has_pending());
    }
}
