//! Mouse event handling - wheel scrolling over the body

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::tui::app::App;

/// Rows moved per wheel notch
pub const WHEEL_LINES: usize = 3;

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if !self.layout.in_body(mouse.column, mouse.row) {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll.scroll_up(WHEEL_LINES),
            MouseEventKind::ScrollDown => self.scroll.scroll_down(WHEEL_LINES),
            _ => return,
        }
        self.scrolled();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use folio_core::{Document, FolioConfig};
    use ratatui::layout::Rect;

    use super::*;

    fn wheel(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_wheel_scrolls_body() {
        let mut app = App::new(
            Document::sample().unwrap(),
            &FolioConfig::terminal(),
            "midnight",
        )
        .unwrap();
        app.resize(Rect::new(0, 0, 80, 24)).unwrap();

        app.handle_mouse_event(wheel(MouseEventKind::ScrollDown, 10, 5));
        assert_eq!(app.scroll.offset, WHEEL_LINES);
        app.handle_mouse_event(wheel(MouseEventKind::ScrollUp, 10, 5));
        assert_eq!(app.scroll.offset, 0);
    }

    #[test]
    fn test_wheel_outside_body_ignored() {
        let mut app = App::new(
            Document::sample().unwrap(),
            &FolioConfig::terminal(),
            "midnight",
        )
        .unwrap();
        app.resize(Rect::new(0, 0, 80, 24)).unwrap();

        // Header row
        app.handle_mouse_event(wheel(MouseEventKind::ScrollDown, 10, 0));
        assert_eq!(app.scroll.offset, 0);
    }
}
