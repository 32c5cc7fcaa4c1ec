//! Viewport intersection primitive
//!
//! The platform side of visibility tracking: something that can watch a
//! region and report how much of it intersects the viewport. Policy (what a
//! given ratio means for a region) lives in the tracker, not here.

mod viewport;

pub use viewport::{intersection_ratio, Viewport, ViewportObserver};

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::constants::tracker::{DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLD};
use crate::error::{non_negative, FolioError, Result};
use crate::region::{Region, RegionId};

/// Whether a region's visibility can revert once set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationMode {
    /// Flip to visible once and stay there
    #[default]
    Once,
    /// Follow the threshold in both directions
    Repeat,
}

/// Options for observing a single region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Fraction of the region that must intersect, in (0, 1]
    pub threshold: f64,
    /// Expansion of the comparison window on both edges
    pub root_margin: f64,
    pub mode: ActivationMode,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN,
            mode: ActivationMode::Once,
        }
    }
}

impl ObserverConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_root_margin(mut self, root_margin: f64) -> Self {
        self.root_margin = root_margin;
        self
    }

    pub fn with_mode(mut self, mode: ActivationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check ranges; NaN fails both checks
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(FolioError::InvalidThreshold(self.threshold));
        }
        if !non_negative(self.root_margin) {
            return Err(FolioError::InvalidRootMargin(self.root_margin));
        }
        Ok(())
    }
}

/// One intersection notification
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEvent {
    pub region: RegionId,
    /// Intersecting fraction of the region, in [0, 1]
    pub ratio: f64,
}

impl IntersectionEvent {
    pub fn new(region: impl Into<RegionId>, ratio: f64) -> Self {
        Self {
            region: region.into(),
            ratio,
        }
    }
}

/// Lazy, unbounded sequence of intersection events for one region
///
/// Ends when the source stops observing the region.
#[derive(Debug)]
pub struct IntersectionStream {
    rx: mpsc::UnboundedReceiver<IntersectionEvent>,
}

impl IntersectionStream {
    /// Create a stream and the sender a source uses to feed it
    pub fn channel() -> (mpsc::UnboundedSender<IntersectionEvent>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Next already-delivered event, without waiting
    pub fn try_recv(&mut self) -> Option<IntersectionEvent> {
        self.rx.try_recv().ok()
    }
}

impl Stream for IntersectionStream {
    type Item = IntersectionEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

/// A platform primitive that reports viewport intersections
pub trait IntersectionSource {
    /// Begin observing `region`, replacing any previous observation of it
    fn observe(&mut self, region: &Region, config: &ObserverConfig) -> IntersectionStream;

    /// Stop observing and release everything held for `id`
    fn unobserve(&mut self, id: &RegionId);

    /// Number of live observations
    fn active_observers(&self) -> usize;
}
