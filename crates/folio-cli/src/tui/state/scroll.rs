//! Scroll State - document scroll position
//!
//! Owns the row offset of the body viewport and keeps it inside the document.

/// Manages scroll state for the document body
#[derive(Debug, Default)]
pub struct ScrollState {
    /// Current scroll offset (0 = top, max = bottom)
    pub offset: usize,
    /// Maximum scroll offset for bounds checking
    pub max_scroll: usize,
    /// Rows visible in the body
    pub viewport_height: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Core Scroll Operations
    // =========================================================================

    /// Scroll up by the given amount
    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    /// Scroll down by the given amount
    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = self.offset.saturating_add(amount).min(self.max_scroll);
    }

    /// Scroll one viewport up, keeping one row of overlap
    pub fn page_up(&mut self) {
        self.scroll_up(self.page_size());
    }

    /// Scroll one viewport down, keeping one row of overlap
    pub fn page_down(&mut self) {
        self.scroll_down(self.page_size());
    }

    /// Scroll to a specific line
    pub fn scroll_to_line(&mut self, line: usize) {
        self.offset = line.min(self.max_scroll);
    }

    /// Jump to the bottom
    pub fn scroll_to_end(&mut self) {
        self.offset = self.max_scroll;
    }

    fn page_size(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }

    // =========================================================================
    // Max Scroll Updates
    // =========================================================================

    /// Update the maximum scroll value based on total lines and viewport height
    pub fn update_max_scroll(&mut self, total_lines: usize, viewport_height: u16) {
        self.viewport_height = viewport_height as usize;
        self.max_scroll = total_lines.saturating_sub(self.viewport_height);

        // Clamp current offset to valid range
        if self.offset > self.max_scroll {
            self.offset = self.max_scroll;
        }
    }

    /// Check if can scroll up (not at top)
    pub fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    /// Check if can scroll down (not at bottom)
    pub fn can_scroll_down(&self) -> bool {
        self.offset < self.max_scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_bounds() {
        let mut scroll = ScrollState::new();
        scroll.update_max_scroll(100, 20);
        assert_eq!(scroll.max_scroll, 80);

        scroll.scroll_up(5);
        assert_eq!(scroll.offset, 0);
        assert!(!scroll.can_scroll_up());

        scroll.scroll_down(500);
        assert_eq!(scroll.offset, 80);
        assert!(!scroll.can_scroll_down());
    }

    #[test]
    fn test_paging_overlaps_one_row() {
        let mut scroll = ScrollState::new();
        scroll.update_max_scroll(100, 20);
        scroll.page_down();
        assert_eq!(scroll.offset, 19);
        scroll.page_up();
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_shrinking_document_clamps_offset() {
        let mut scroll = ScrollState::new();
        scroll.update_max_scroll(100, 20);
        scroll.scroll_to_end();
        scroll.update_max_scroll(30, 20);
        assert_eq!(scroll.offset, 10);

        scroll.update_max_scroll(10, 20);
        assert_eq!(scroll.offset, 0);
        scroll.scroll_to_line(4);
        assert_eq!(scroll.offset, 0);
    }
}
