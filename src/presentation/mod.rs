//! Presentation-effect surface.
//!
//! The preference engine never touches a real document directly. It talks to
//! the [`PresentationSurface`] trait, which a web shell implements over the
//! DOM and which [`DocumentState`] implements in memory for headless use and
//! tests.

pub mod announcer;
pub mod document;
pub mod surface;

// Re-export primary types
pub use announcer::Announcer;
pub use document::{DocumentState, LiveRegion};
pub use surface::{color_blind_class, Politeness, PresentationSurface, Target};
