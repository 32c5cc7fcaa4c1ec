//! Layout State - cached screen areas
//!
//! Updated on resize, used for rendering and mouse routing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header height (nav row plus bottom border)
pub const HEADER_HEIGHT: u16 = 2;

/// Footer (status line) height
pub const FOOTER_HEIGHT: u16 = 1;

/// Cached layout areas
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LayoutState {
    /// Whole terminal
    pub screen: Rect,
    /// Navigation header
    pub header_area: Rect,
    /// Scrollable document body
    pub body_area: Rect,
    /// Scrollbar track along the right edge of the body
    pub scrollbar_area: Rect,
    /// Status line
    pub footer_area: Rect,
}

impl LayoutState {
    /// Split the terminal into header, body and footer
    pub fn compute(screen: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(screen);

        let full_body = chunks[1];
        let body_area = Rect {
            width: full_body.width.saturating_sub(1),
            ..full_body
        };
        let scrollbar_area = Rect {
            x: full_body.x + body_area.width,
            width: full_body.width.min(1),
            ..full_body
        };

        Self {
            screen,
            header_area: chunks[0],
            body_area,
            scrollbar_area,
            footer_area: chunks[2],
        }
    }

    /// Whether a screen cell lies inside the body
    pub fn in_body(&self, x: u16, y: u16) -> bool {
        self.body_area.contains(ratatui::layout::Position::new(x, y))
    }
}
