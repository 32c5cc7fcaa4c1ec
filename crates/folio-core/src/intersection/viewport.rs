//! Native intersection source driven by layout and scroll position

use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::debug;

use super::{IntersectionEvent, IntersectionSource, IntersectionStream, ObserverConfig};
use crate::region::{Region, RegionId};

/// The visible window of the document
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub top: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Window grown by `margin` on both edges
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            top: self.top - margin,
            height: self.height + 2.0 * margin,
        }
    }
}

/// Fraction of the extent `[top, top + height)` that lies inside `window`
///
/// A zero-height extent is fully intersecting when its top lies inside the
/// window (edges included) and not intersecting otherwise.
pub fn intersection_ratio(top: f64, height: f64, window: Viewport) -> f64 {
    if height <= 0.0 {
        return if top >= window.top && top <= window.bottom() {
            1.0
        } else {
            0.0
        };
    }
    let overlap = (top + height).min(window.bottom()) - top.max(window.top);
    (overlap / height).clamp(0.0, 1.0)
}

/// Per-region observation state
struct Observation {
    config: ObserverConfig,
    sender: mpsc::UnboundedSender<IntersectionEvent>,
    /// Threshold state last reported, `None` before the first report
    last_met: Option<bool>,
}

impl Observation {
    /// Report when the threshold state changes. Returns false once the
    /// receiving side is gone.
    fn evaluate(&mut self, id: &RegionId, top: f64, height: f64, viewport: Viewport) -> bool {
        let window = viewport.expanded(self.config.root_margin);
        let ratio = intersection_ratio(top, height, window);
        let met = ratio >= self.config.threshold;
        if self.last_met == Some(met) {
            return true;
        }
        self.last_met = Some(met);
        self.sender
            .send(IntersectionEvent {
                region: id.clone(),
                ratio,
            })
            .is_ok()
    }
}

/// Computes intersection ratios from laid-out extents and the current viewport
///
/// The host reports extents as it lays regions out and the viewport as it
/// scrolls or resizes; every observed region with a known extent is
/// re-evaluated and notified when it crosses its threshold, plus once on the
/// first evaluation.
#[derive(Default)]
pub struct ViewportObserver {
    observations: HashMap<RegionId, Observation>,
    extents: HashMap<RegionId, (f64, f64)>,
    viewport: Option<Viewport>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the laid-out extent of a region
    pub fn set_extent(&mut self, id: &RegionId, top: f64, height: f64) {
        let changed = self.extents.insert(id.clone(), (top, height)) != Some((top, height));
        if changed {
            self.evaluate_one(id);
        }
    }

    /// Forget a region's extent
    pub fn clear_extent(&mut self, id: &RegionId) {
        self.extents.remove(id);
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Move or resize the viewport and re-evaluate every observed region
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == Some(viewport) {
            return;
        }
        self.viewport = Some(viewport);

        let extents = &self.extents;
        self.observations.retain(|id, obs| match extents.get(id) {
            Some(&(top, height)) => {
                let alive = obs.evaluate(id, top, height, viewport);
                if !alive {
                    debug!(region = %id, "Dropping observation with closed stream");
                }
                alive
            }
            None => true,
        });
    }

    fn evaluate_one(&mut self, id: &RegionId) {
        let (Some(viewport), Some(&(top, height))) = (self.viewport, self.extents.get(id)) else {
            return;
        };
        let alive = match self.observations.get_mut(id) {
            Some(obs) => obs.evaluate(id, top, height, viewport),
            None => return,
        };
        if !alive {
            debug!(region = %id, "Dropping observation with closed stream");
            self.observations.remove(id);
        }
    }
}

impl IntersectionSource for ViewportObserver {
    fn observe(&mut self, region: &Region, config: &ObserverConfig) -> IntersectionStream {
        let (sender, stream) = IntersectionStream::channel();
        self.observations.insert(
            region.id.clone(),
            Observation {
                config: *config,
                sender,
                last_met: None,
            },
        );
        match region.height {
            Some(height) => self.set_extent(&region.id, region.offset, height),
            None => self.evaluate_one(&region.id),
        }
        // set_extent skips evaluation when the extent was already known
        if self
            .observations
            .get(&region.id)
            .is_some_and(|obs| obs.last_met.is_none())
        {
            self.evaluate_one(&region.id);
        }
        stream
    }

    fn unobserve(&mut self, id: &RegionId) {
        if self.observations.remove(id).is_some() {
            debug!(region = %id, "Stopped observing region");
        }
    }

    fn active_observers(&self) -> usize {
        self.observations.len()
    }
}
