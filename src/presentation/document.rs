//! In-memory document model.
//!
//! [`DocumentState`] implements [`PresentationSurface`] over plain
//! collections so the engine can run headless (CLI, tests) and so tests can
//! inspect exactly which classes, variables, and regions an apply produced.

use std::collections::{BTreeMap, BTreeSet};

use super::surface::{Politeness, PresentationSurface, Target};

/// A live-announcement region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRegion {
    /// Well-known identifier
    pub id: String,
    /// Announcement assertiveness
    pub politeness: Politeness,
    /// Whether the whole region is re-announced on change
    pub atomic: bool,
    /// Current text content
    pub text: String,
}

/// In-memory implementation of [`PresentationSurface`].
///
/// Live regions are kept in a list rather than a map so a duplicate-creation
/// bug shows up as a count of two instead of being silently collapsed.
#[derive(Debug, Clone, Default)]
pub struct DocumentState {
    style_vars: BTreeMap<String, String>,
    root_classes: BTreeSet<String>,
    body_classes: BTreeSet<String>,
    live_regions: Vec<LiveRegion>,
}

impl DocumentState {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a style variable, if set.
    pub fn style_var(&self, name: &str) -> Option<&str> {
        self.style_vars.get(name).map(String::as_str)
    }

    /// Check whether a class is present on the target element.
    pub fn has_class(&self, target: Target, class: &str) -> bool {
        self.classes(target).contains(class)
    }

    /// The class set of the target element.
    pub fn classes(&self, target: Target) -> &BTreeSet<String> {
        match target {
            Target::Root => &self.root_classes,
            Target::Body => &self.body_classes,
        }
    }

    /// Get a live region by id.
    pub fn live_region(&self, id: &str) -> Option<&LiveRegion> {
        self.live_regions.iter().find(|region| region.id == id)
    }

    /// Number of live regions in the document.
    pub fn live_region_count(&self) -> usize {
        self.live_regions.len()
    }

    fn classes_mut(&mut self, target: Target) -> &mut BTreeSet<String> {
        match target {
            Target::Root => &mut self.root_classes,
            Target::Body => &mut self.body_classes,
        }
    }
}

impl PresentationSurface for DocumentState {
    fn set_style_var(&mut self, name: &str, value: &str) {
        self.style_vars.insert(name.to_string(), value.to_string());
    }

    fn add_class(&mut self, target: Target, class: &str) {
        self.classes_mut(target).insert(class.to_string());
    }

    fn remove_class(&mut self, target: Target, class: &str) {
        self.classes_mut(target).remove(class);
    }

    fn ensure_live_region(&mut self, id: &str, politeness: Politeness, atomic: bool) {
        if self.has_live_region(id) {
            return;
        }
        self.live_regions.push(LiveRegion {
            id: id.to_string(),
            politeness,
            atomic,
            text: String::new(),
        });
    }

    fn remove_live_region(&mut self, id: &str) {
        self.live_regions.retain(|region| region.id != id);
    }

    fn has_live_region(&self, id: &str) -> bool {
        self.live_regions.iter().any(|region| region.id == id)
    }

    fn set_live_region_text(&mut self, id: &str, text: &str) {
        if let Some(region) = self.live_regions.iter_mut().find(|region| region.id == id) {
            region.text = text.to_string();
        }
    }
}
