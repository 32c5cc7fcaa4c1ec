//! Status bar component - bottom line with active section and position

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

/// Key hints shown on the right
const HINTS: &str = "↑↓ scroll  PgUp/PgDn page  q quit ";

/// What the status bar shows
pub struct StatusInfo<'a> {
    pub active_label: Option<&'a str>,
    pub revealed: usize,
    pub total_sections: usize,
    pub offset: usize,
    pub max_scroll: usize,
    pub more_above: bool,
    pub more_below: bool,
}

/// Scroll position as a percentage, 100 when nothing scrolls
pub fn scroll_percent(offset: usize, max_scroll: usize) -> u16 {
    if max_scroll == 0 {
        return 100;
    }
    ((offset.min(max_scroll) as f64 / max_scroll as f64) * 100.0).round() as u16
}

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(f: &mut Frame, area: Rect, theme: &Theme, info: &StatusInfo<'_>) {
    // Background
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let active = info.active_label.unwrap_or("-");
    let left_spans = vec![
        Span::raw(" "),
        Span::styled(active, Style::default().fg(theme.accent_color)),
        Span::styled(" │ ", Style::default().fg(theme.dim_color)),
        Span::styled(
            format!("{}/{} revealed", info.revealed, info.total_sections),
            Style::default().fg(theme.dim_color),
        ),
        Span::styled(" │ ", Style::default().fg(theme.dim_color)),
        Span::styled(
            format!("{:>3}%", scroll_percent(info.offset, info.max_scroll)),
            Style::default().fg(theme.dim_color),
        ),
        Span::styled(
            match (info.more_above, info.more_below) {
                (true, true) => " ↕",
                (true, false) => " ↑",
                (false, true) => " ↓",
                (false, false) => "",
            },
            Style::default().fg(theme.accent_color),
        ),
    ];

    let hints_width = HINTS.width() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints_width)])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(left_spans)).style(Style::default().bg(theme.status_bar_bg_color)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(HINTS, Style::default().fg(theme.dim_color)))
            .alignment(Alignment::Right)
            .style(Style::default().bg(theme.status_bar_bg_color)),
        chunks[1],
    );
}
