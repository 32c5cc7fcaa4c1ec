//! Viewport activation tracking
//!
//! Turns a stream of intersection ratios into a per-region visibility flag.
//! In [`ActivationMode::Once`] the flag is monotonic: the first event at or
//! above the threshold sets it and nothing clears it.

use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::intersection::{ActivationMode, IntersectionSource, IntersectionStream, ObserverConfig};
use crate::region::{Region, RegionId};

struct Registration {
    config: ObserverConfig,
    stream: IntersectionStream,
}

/// Tracks which regions have become visible enough to activate
pub struct ViewportActivationTracker<S: IntersectionSource> {
    source: S,
    registrations: HashMap<RegionId, Registration>,
    visibility: HashMap<RegionId, bool>,
    /// false -> true flips per region
    transitions: HashMap<RegionId, u32>,
}

impl<S: IntersectionSource> ViewportActivationTracker<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            registrations: HashMap::new(),
            visibility: HashMap::new(),
            transitions: HashMap::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Start observing a region
    ///
    /// Observing a region that is already registered does nothing; the
    /// existing observation and its state are kept.
    pub fn observe(&mut self, region: &Region, config: ObserverConfig) -> Result<()> {
        config.validate()?;
        if self.registrations.contains_key(&region.id) {
            debug!(region = %region.id, "Region already observed");
            return Ok(());
        }

        let stream = self.source.observe(region, &config);
        self.visibility.entry(region.id.clone()).or_insert(false);
        self.registrations
            .insert(region.id.clone(), Registration { config, stream });
        debug!(region = %region.id, threshold = config.threshold, "Observing region");
        Ok(())
    }

    /// Observe when a region reference exists; a missing region is a no-op
    pub fn observe_opt(&mut self, region: Option<&Region>, config: ObserverConfig) -> Result<()> {
        match region {
            Some(region) => self.observe(region, config),
            None => Ok(()),
        }
    }

    /// Stop observing a region. Its visibility state is kept but never
    /// changes again. Returns whether the region was observed.
    pub fn unobserve(&mut self, id: &RegionId) -> bool {
        if self.registrations.remove(id).is_none() {
            return false;
        }
        self.source.unobserve(id);
        debug!(region = %id, "Unobserved region");
        true
    }

    /// Stop observing and drop all state for a region
    pub fn release(&mut self, id: &RegionId) {
        self.unobserve(id);
        self.visibility.remove(id);
        self.transitions.remove(id);
    }

    pub fn is_observing(&self, id: &RegionId) -> bool {
        self.registrations.contains_key(id)
    }

    pub fn is_visible(&self, id: &RegionId) -> bool {
        self.visibility.get(id).copied().unwrap_or(false)
    }

    /// How many times a region flipped from hidden to visible
    pub fn transitions(&self, id: &RegionId) -> u32 {
        self.transitions.get(id).copied().unwrap_or(0)
    }

    /// Apply every delivered event. Returns the regions that became visible,
    /// sorted by id.
    pub fn pump(&mut self) -> Vec<RegionId> {
        let mut revealed = Vec::new();

        for (id, registration) in self.registrations.iter_mut() {
            while let Some(event) = registration.stream.try_recv() {
                if event.region != *id {
                    continue;
                }
                let visible = self.visibility.entry(id.clone()).or_insert(false);
                let met = event.ratio >= registration.config.threshold;

                match (*visible, met, registration.config.mode) {
                    (false, true, _) => {
                        *visible = true;
                        *self.transitions.entry(id.clone()).or_insert(0) += 1;
                        debug!(region = %id, ratio = event.ratio, "Region became visible");
                        revealed.push(id.clone());
                    }
                    (true, false, ActivationMode::Repeat) => {
                        *visible = false;
                        debug!(region = %id, ratio = event.ratio, "Region left viewport");
                    }
                    _ => {}
                }
            }
        }

        revealed.sort();
        revealed
    }
}
