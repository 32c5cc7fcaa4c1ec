//! Folio Core - viewport activation and scroll-spy engine
//!
//! This crate provides the toolkit-independent pieces of Folio:
//! - Intersection and scroll notification primitives, with native implementations
//! - One-shot (or repeating) visibility tracking per region
//! - Active region resolution for navigation highlighting
//! - A coordinator that owns all of the above for a document of sections

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod intersection;
pub mod paths;
pub mod region;
pub mod resolver;
pub mod scroll;
pub mod spy;
pub mod tracker;

// Re-exports for convenience
pub use config::{FolioConfig, SpySettings};
pub use document::{Document, Section};
pub use error::{FolioError, Result};
pub use intersection::{
    ActivationMode, IntersectionEvent, IntersectionSource, IntersectionStream, ObserverConfig,
    Viewport, ViewportObserver,
};
pub use region::{Region, RegionId};
pub use resolver::ActiveRegionResolver;
pub use scroll::{ScrollFeed, ScrollListener, ScrollSource};
pub use spy::{ScrollSpy, ScrollUpdate};
pub use tracker::ViewportActivationTracker;
