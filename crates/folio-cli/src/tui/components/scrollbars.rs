//! Document scrollbar
//!
//! A one-column track beside the body. The thumb covers the rows currently on
//! screen and every section after the first leaves a tick where it starts, so
//! the bar doubles as a coarse map of the document.

use std::ops::Range;

use ratatui::{buffer::Buffer, layout::Rect, style::Color, Frame};

use crate::tui::themes::Theme;

const TRACK: char = '░';
const THUMB: char = '█';
const SECTION_TICK: char = '┄';

/// Shortest thumb drawn, so it stays visible on long documents
const MIN_THUMB_ROWS: usize = 2;

/// Where a document row lands on a track `track_rows` tall
fn track_row(line: usize, total: usize, track_rows: usize) -> usize {
    if total == 0 {
        return 0;
    }
    line * track_rows / total
}

/// Track rows covered by the thumb, `None` when the whole document fits
pub fn thumb_rows(offset: usize, total: usize, visible: usize, track_rows: usize) -> Option<Range<usize>> {
    if total <= visible || track_rows == 0 {
        return None;
    }
    let len = (visible * track_rows)
        .div_ceil(total)
        .clamp(MIN_THUMB_ROWS.min(track_rows), track_rows);
    let travel = track_rows - len;
    let max_offset = total - visible;
    let start = (offset.min(max_offset) * travel + max_offset / 2) / max_offset;
    Some(start..start + len)
}

/// Draw the scrollbar into `buf`, blanking the column when nothing scrolls
pub fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    section_starts: &[usize],
    theme: &Theme,
) {
    if area.width == 0 {
        return;
    }
    let track_rows = area.height as usize;
    let thumb = thumb_rows(offset, total, visible, track_rows);
    let ticks: Vec<usize> = section_starts
        .iter()
        .skip(1)
        .map(|&start| track_row(start, total, track_rows))
        .collect();

    for row in 0..track_rows {
        let (glyph, color) = match &thumb {
            None => (' ', Color::Reset),
            Some(span) if span.contains(&row) => (THUMB, theme.accent_color),
            Some(_) if ticks.contains(&row) => (SECTION_TICK, theme.accent_color),
            Some(_) => (TRACK, theme.scrollbar_bg_color),
        };
        if let Some(cell) = buf.cell_mut((area.x, area.y + row as u16)) {
            cell.set_char(glyph).set_fg(color);
        }
    }
}

/// Render the scrollbar for the document body
pub fn render_document_scrollbar(
    f: &mut Frame,
    area: Rect,
    offset: usize,
    total_lines: usize,
    visible_height: usize,
    section_starts: &[usize],
    theme: &Theme,
) {
    render_scrollbar(
        f.buffer_mut(),
        area,
        offset,
        total_lines,
        visible_height,
        section_starts,
        theme,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;

    fn column(buf: &Buffer, area: Rect) -> String {
        (0..area.height)
            .map(|y| buf[(area.x, area.y + y)].symbol().to_string())
            .collect()
    }

    fn draw(offset: usize, total: usize, starts: &[usize]) -> String {
        let area = Rect::new(0, 0, 1, 10);
        let mut buf = Buffer::empty(area);
        let theme = THEME_REGISTRY.get_or_default("midnight");
        render_scrollbar(&mut buf, area, offset, total, 10, starts, theme);
        column(&buf, area)
    }

    #[test]
    fn test_thumb_rows() {
        assert_eq!(thumb_rows(0, 5, 10, 10), None);
        assert_eq!(thumb_rows(0, 100, 10, 10), Some(0..2));
        assert_eq!(thumb_rows(90, 100, 10, 10), Some(8..10));
        assert_eq!(thumb_rows(0, 20, 10, 10), Some(0..5));
        assert_eq!(thumb_rows(10, 20, 10, 10), Some(5..10));
    }

    #[test]
    fn test_blank_when_content_fits() {
        assert_eq!(draw(0, 5, &[0]), " ".repeat(10));
    }

    #[test]
    fn test_thumb_follows_offset() {
        assert!(draw(0, 100, &[]).starts_with("██"));
        assert!(draw(90, 100, &[]).ends_with("██"));
    }

    #[test]
    fn test_section_ticks_on_track() {
        let bar = draw(0, 100, &[0, 50]);
        assert_eq!(bar.chars().nth(5), Some('┄'));
        // First section starts under the thumb and leaves no tick
        assert_eq!(bar.matches('┄').count(), 1);
    }
}
