//! Navigation header - document title and one entry per section
//!
//! The entry for the active section is highlighted. Once the document has
//! been scrolled the header draws a bottom border to separate it from the
//! body.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use folio_core::{Document, ScrollSpy};

use crate::tui::themes::Theme;

/// Marker drawn before the active entry
const ACTIVE_MARKER: &str = "•";

/// Build the nav line, dropping the title when the entries alone need the room
pub fn nav_line<'a>(document: &'a Document, spy: &ScrollSpy, theme: &Theme, width: u16) -> Line<'a> {
    let mut entries = Vec::new();
    let mut entries_width = 0usize;

    for section in &document.sections {
        let active = spy.is_active(&section.id);
        let (marker, style) = if active {
            (
                ACTIVE_MARKER,
                Style::default()
                    .fg(theme.accent_color)
                    .bg(theme.highlight_bg_color)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (" ", Style::default().fg(theme.dim_color))
        };
        let text = format!("{marker}{} ", section.label);
        entries_width += text.width() + 1;
        entries.push(Span::styled(text, style));
        entries.push(Span::raw(" "));
    }

    let mut spans = Vec::new();
    let title_width = document.title.width() + 3;
    if !document.title.is_empty() && title_width + entries_width <= width as usize {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            document.title.as_str(),
            Style::default()
                .fg(theme.text_color)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
    } else {
        spans.push(Span::raw(" "));
    }
    spans.extend(entries);
    Line::from(spans)
}

/// Render the navigation header
pub fn render_nav_bar(f: &mut Frame, area: Rect, theme: &Theme, document: &Document, spy: &ScrollSpy) {
    let border_color = if spy.is_scrolled() {
        theme.border_color
    } else {
        theme.bg_color
    };
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_color));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let line = nav_line(document, spy, theme, inner.width);
    f.render_widget(Paragraph::new(line), inner);
}
