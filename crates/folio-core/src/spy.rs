//! Scroll-spy coordinator
//!
//! Single owner of the region list, the activation tracker and the active
//! region pointer. Views read it by reference; only the coordinator writes.

use tracing::{debug, warn};

use crate::config::FolioConfig;
use crate::error::Result;
use crate::intersection::{IntersectionSource, ObserverConfig, Viewport, ViewportObserver};
use crate::region::{Region, RegionId};
use crate::resolver::{is_document_ordered, ActiveRegionResolver};
use crate::scroll::{ScrollListener, ScrollSource};
use crate::tracker::ViewportActivationTracker;

/// What changed as the result of a scroll or layout pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollUpdate {
    pub active_changed: bool,
    pub scrolled_changed: bool,
    /// Regions that became visible, sorted by id
    pub revealed: Vec<RegionId>,
}

impl ScrollUpdate {
    pub fn is_empty(&self) -> bool {
        !self.active_changed && !self.scrolled_changed && self.revealed.is_empty()
    }

    fn merge(&mut self, other: ScrollUpdate) {
        self.active_changed |= other.active_changed;
        self.scrolled_changed |= other.scrolled_changed;
        for id in other.revealed {
            if !self.revealed.contains(&id) {
                self.revealed.push(id);
            }
        }
        self.revealed.sort();
    }
}

pub struct ScrollSpy {
    regions: Vec<Region>,
    tracker: ViewportActivationTracker<ViewportObserver>,
    resolver: ActiveRegionResolver,
    observer_config: ObserverConfig,
    scrolled_threshold: f64,
    active: Option<RegionId>,
    scrolled: bool,
    scroll_offset: f64,
    viewport_height: f64,
    listener: Option<ScrollListener>,
    warned_out_of_order: bool,
}

impl ScrollSpy {
    pub fn new(config: &FolioConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            regions: Vec::new(),
            tracker: ViewportActivationTracker::new(ViewportObserver::new()),
            resolver: ActiveRegionResolver::new(config.spy.look_ahead)?,
            observer_config: config.tracker,
            scrolled_threshold: config.spy.scrolled_threshold,
            active: None,
            scrolled: false,
            scroll_offset: 0.0,
            viewport_height: 0.0,
            listener: None,
            warned_out_of_order: false,
        })
    }

    // =========================================================================
    // Regions
    // =========================================================================

    /// Register a region, or update its position if already mounted
    pub fn mount(&mut self, region: Region) -> Result<ScrollUpdate> {
        match self.regions.iter_mut().find(|r| r.id == region.id) {
            Some(existing) => *existing = region.clone(),
            None => self.regions.push(region.clone()),
        }
        if let Some(height) = region.height {
            self.tracker
                .source_mut()
                .set_extent(&region.id, region.offset, height);
        }
        self.tracker.observe(&region, self.observer_config)?;
        self.check_order();
        Ok(self.settle())
    }

    /// Tear a region down: stop observing it and forget its state
    pub fn unmount(&mut self, id: &RegionId) -> bool {
        let before = self.regions.len();
        self.regions.retain(|r| r.id != *id);
        if self.regions.len() == before {
            return false;
        }
        self.tracker.release(id);
        self.tracker.source_mut().clear_extent(id);
        if self.active.as_ref() == Some(id) {
            self.refresh_active();
        }
        true
    }

    /// Replace the whole layout in document order
    ///
    /// Regions missing from `regions` are unmounted, the rest are mounted or
    /// moved. Visibility of regions that stay mounted is preserved.
    pub fn layout(&mut self, regions: Vec<Region>) -> Result<ScrollUpdate> {
        let stale: Vec<RegionId> = self
            .regions
            .iter()
            .filter(|old| !regions.iter().any(|r| r.id == old.id))
            .map(|r| r.id.clone())
            .collect();
        for id in &stale {
            self.unmount(id);
        }

        for region in &regions {
            if let Some(height) = region.height {
                self.tracker
                    .source_mut()
                    .set_extent(&region.id, region.offset, height);
            }
            self.tracker.observe(region, self.observer_config)?;
        }
        self.regions = regions;
        self.check_order();
        Ok(self.settle())
    }

    fn check_order(&mut self) {
        if self.warned_out_of_order || is_document_ordered(&self.regions) {
            return;
        }
        self.warned_out_of_order = true;
        warn!(
            regions = self.regions.len(),
            "Region offsets are not in document order; active region may be wrong"
        );
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Listen to a scroll source; replaces any previous listener
    pub fn attach(&mut self, source: &mut impl ScrollSource) {
        self.listener = Some(source.subscribe());
    }

    /// Stop listening for scroll positions
    pub fn detach(&mut self) {
        self.listener = None;
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Viewport height used for intersection ratios
    pub fn set_viewport_height(&mut self, height: f64) -> ScrollUpdate {
        self.viewport_height = height.max(0.0);
        self.settle()
    }

    /// Handle one scroll position
    pub fn on_scroll(&mut self, offset: f64) -> ScrollUpdate {
        self.scroll_offset = offset.max(0.0);
        self.settle()
    }

    /// Drain every position delivered to the attached listener, then any
    /// pending intersection events
    pub fn poll(&mut self) -> ScrollUpdate {
        let mut update = ScrollUpdate::default();
        let mut positions = Vec::new();
        if let Some(listener) = self.listener.as_mut() {
            while let Some(position) = listener.try_recv() {
                positions.push(position);
            }
        }
        for position in positions {
            update.merge(self.on_scroll(position));
        }
        update.merge(ScrollUpdate {
            revealed: self.tracker.pump(),
            ..Default::default()
        });
        update
    }

    /// Recompute everything derived from offset, viewport and layout
    fn settle(&mut self) -> ScrollUpdate {
        let scrolled = self.scroll_offset > self.scrolled_threshold;
        let scrolled_changed = scrolled != self.scrolled;
        self.scrolled = scrolled;

        self.tracker
            .source_mut()
            .set_viewport(Viewport::new(self.scroll_offset, self.viewport_height));

        ScrollUpdate {
            active_changed: self.refresh_active(),
            scrolled_changed,
            revealed: self.tracker.pump(),
        }
    }

    fn refresh_active(&mut self) -> bool {
        let next = self
            .resolver
            .resolve(&self.regions, self.scroll_offset)
            .map(|r| r.id.clone());
        if next == self.active {
            return false;
        }
        debug!(
            from = ?self.active.as_ref().map(RegionId::as_str),
            to = ?next.as_ref().map(RegionId::as_str),
            offset = self.scroll_offset,
            "Active region changed"
        );
        self.active = next;
        true
    }

    // =========================================================================
    // Read-only state
    // =========================================================================

    pub fn active(&self) -> Option<&RegionId> {
        self.active.as_ref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_ref().is_some_and(|a| a.as_str() == id)
    }

    pub fn is_visible(&self, id: &RegionId) -> bool {
        self.tracker.is_visible(id)
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn visible_count(&self) -> usize {
        self.regions
            .iter()
            .filter(|r| self.tracker.is_visible(&r.id))
            .count()
    }

    pub fn active_observers(&self) -> usize {
        self.tracker.source().active_observers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpySettings;
    use crate::scroll::ScrollFeed;

    fn config() -> FolioConfig {
        FolioConfig {
            tracker: ObserverConfig::default(),
            spy: SpySettings {
                look_ahead: 100.0,
                scrolled_threshold: 50.0,
            },
        }
    }

    fn page() -> Vec<Region> {
        vec![
            Region::new("about", 0.0).with_height(800.0),
            Region::new("projects", 800.0).with_height(800.0),
            Region::new("contact", 1600.0).with_height(400.0),
        ]
    }

    fn spy() -> ScrollSpy {
        let mut spy = ScrollSpy::new(&config()).unwrap();
        spy.set_viewport_height(600.0);
        spy.layout(page()).unwrap();
        spy
    }

    #[test]
    fn test_active_follows_scroll() {
        let mut spy = spy();
        assert!(spy.is_active("about"));

        let update = spy.on_scroll(750.0);
        assert!(update.active_changed);
        assert!(spy.is_active("projects"));

        assert!(!spy.on_scroll(760.0).active_changed);

        spy.on_scroll(5000.0);
        assert!(spy.is_active("contact"));

        spy.on_scroll(0.0);
        assert!(spy.is_active("about"));
    }

    #[test]
    fn test_reveal_on_scroll() {
        let mut spy = spy();
        let about = RegionId::new("about");
        let contact = RegionId::new("contact");
        assert!(spy.is_visible(&about));
        assert!(!spy.is_visible(&contact));

        let update = spy.on_scroll(1200.0);
        assert_eq!(update.revealed, vec![contact.clone(), RegionId::new("projects")]);

        spy.on_scroll(0.0);
        assert!(spy.is_visible(&contact));
        assert_eq!(spy.visible_count(), 3);
    }

    #[test]
    fn test_scrolled_flag() {
        let mut spy = spy();
        assert!(!spy.is_scrolled());
        assert!(!spy.on_scroll(50.0).scrolled_changed);
        assert!(spy.on_scroll(51.0).scrolled_changed);
        assert!(spy.is_scrolled());
        spy.on_scroll(0.0);
        assert!(!spy.is_scrolled());
    }

    #[test]
    fn test_poll_drains_attached_feed() {
        let mut spy = spy();
        let mut feed = ScrollFeed::new();
        spy.attach(&mut feed);
        assert_eq!(feed.listeners(), 1);

        feed.publish(300.0);
        feed.publish(1700.0);
        let update = spy.poll();
        assert!(spy.is_active("contact"));
        assert!(update.active_changed);
        assert!(update.revealed.contains(&RegionId::new("contact")));

        spy.detach();
        assert_eq!(feed.listeners(), 0);
        feed.publish(0.0);
        assert!(spy.poll().is_empty());
        assert!(spy.is_active("contact"));
    }

    #[test]
    fn test_unmount_releases_observer() {
        let mut spy = spy();
        assert_eq!(spy.active_observers(), 3);

        spy.on_scroll(1700.0);
        assert!(spy.unmount(&RegionId::new("contact")));
        assert_eq!(spy.active_observers(), 2);
        assert!(spy.is_active("projects"));
        assert!(!spy.unmount(&RegionId::new("contact")));
    }

    #[test]
    fn test_relayout_keeps_visibility() {
        let mut spy = spy();
        spy.on_scroll(1700.0);

        let taller: Vec<Region> = page()
            .into_iter()
            .map(|r| {
                let offset = r.offset * 2.0;
                Region::new(r.id, offset).with_height(r.height.unwrap_or(0.0) * 2.0)
            })
            .collect();
        let update = spy.layout(taller).unwrap();
        assert!(update.revealed.is_empty());
        assert!(spy.is_visible(&RegionId::new("contact")));
        assert!(spy.is_active("projects"));
        assert_eq!(spy.active_observers(), 3);
    }

    #[test]
    fn test_mount_is_idempotent() {
        let mut spy = ScrollSpy::new(&config()).unwrap();
        spy.set_viewport_height(600.0);
        let region = Region::new("about", 0.0).with_height(100.0);

        let first = spy.mount(region.clone()).unwrap();
        let second = spy.mount(region).unwrap();
        assert_eq!(first.revealed.len(), 1);
        assert!(second.revealed.is_empty());
        assert_eq!(spy.regions().len(), 1);
        assert_eq!(spy.active_observers(), 1);
    }

    #[test]
    fn test_out_of_order_layout_still_resolves() {
        let mut spy = ScrollSpy::new(&config()).unwrap();
        spy.layout(vec![
            Region::new("b", 800.0).with_height(10.0),
            Region::new("a", 0.0).with_height(10.0),
        ])
        .unwrap();
        spy.on_scroll(1000.0);
        // Last qualifying in list order wins, even though it is higher up
        assert!(spy.is_active("a"));
    }
}
