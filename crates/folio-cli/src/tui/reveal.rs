//! Entrance animations for newly revealed sections

use std::collections::HashMap;
use std::time::{Duration, Instant};

use folio_core::RegionId;

/// Default fade-in duration
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Tracks in-flight fade-ins, keyed by region
#[derive(Debug)]
pub struct RevealAnimations {
    started: HashMap<RegionId, Instant>,
    duration: Duration,
}

impl Default for RevealAnimations {
    fn default() -> Self {
        Self::new(REVEAL_DURATION)
    }
}

impl RevealAnimations {
    pub fn new(duration: Duration) -> Self {
        Self {
            started: HashMap::new(),
            duration,
        }
    }

    /// Begin a fade-in; restarting one already running is ignored
    pub fn start(&mut self, id: RegionId) {
        self.started.entry(id).or_insert_with(Instant::now);
    }

    /// 0.0 = still hidden, 1.0 = fully shown
    pub fn progress(&self, id: &RegionId, visible: bool) -> f32 {
        if !visible {
            return 0.0;
        }
        match self.started.get(id) {
            Some(start) if !self.duration.is_zero() => {
                (start.elapsed().as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
            _ => 1.0,
        }
    }

    /// Drop finished animations, returns true while any are still running
    pub fn tick(&mut self) -> bool {
        let duration = self.duration;
        self.started.retain(|_, start| start.elapsed() < duration);
        !self.started.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        !self.started.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_sections_have_no_progress() {
        let mut reveals = RevealAnimations::default();
        let id = RegionId::new("skills");
        reveals.start(id.clone());
        assert_eq!(reveals.progress(&id, false), 0.0);
    }

    #[test]
    fn test_visible_without_animation_is_complete() {
        let reveals = RevealAnimations::default();
        assert_eq!(reveals.progress(&RegionId::new("about"), true), 1.0);
    }

    #[test]
    fn test_running_animation_is_partial() {
        let mut reveals = RevealAnimations::new(Duration::from_secs(60));
        let id = RegionId::new("projects");
        reveals.start(id.clone());
        assert!(reveals.progress(&id, true) < 1.0);
        assert!(reveals.tick());
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut reveals = RevealAnimations::new(Duration::ZERO);
        let id = RegionId::new("contact");
        reveals.start(id.clone());
        assert_eq!(reveals.progress(&id, true), 1.0);
        assert!(!reveals.tick());
        assert!(!reveals.is_animating());
    }
}
