//! Document body - the visible window of wrapped section rows
//!
//! Rows of sections that have not been revealed yet are drawn in the theme's
//! hidden color; revealed sections fade towards their normal colors.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use crate::tui::document::{DocLine, DocumentLayout, LineKind, BODY_PADDING};
use crate::tui::themes::{blend, Theme};

/// Style for one row given its section's reveal progress (0.0 - 1.0)
pub fn line_style(line: &DocLine, progress: f32, theme: &Theme) -> Style {
    let base = Style::default().bg(theme.bg_color);
    match line.kind {
        LineKind::Heading => base
            .fg(blend(theme.hidden_color, theme.accent_color, progress))
            .add_modifier(Modifier::BOLD),
        LineKind::Body => base.fg(blend(theme.hidden_color, theme.text_color, progress)),
        LineKind::Blank => base,
        LineKind::Footer => base
            .fg(theme.dim_color)
            .add_modifier(Modifier::ITALIC),
    }
}

/// Render the body window starting at row `offset`
///
/// `progress_of` maps a section index to its reveal progress.
pub fn render_sections(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    layout: &DocumentLayout,
    offset: usize,
    progress_of: impl Fn(usize) -> f32,
) {
    let lines: Vec<Line> = layout
        .window(offset, area.height as usize)
        .iter()
        .map(|line| {
            let progress = line.section.map(&progress_of).unwrap_or(1.0);
            Line::styled(line.text.as_str(), line_style(line, progress, theme))
        })
        .collect();

    let block = Block::default()
        .padding(Padding::horizontal(BODY_PADDING))
        .style(Style::default().bg(theme.bg_color));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;

    fn line(kind: LineKind) -> DocLine {
        DocLine {
            section: Some(0),
            kind,
            text: "text".to_string(),
        }
    }

    #[test]
    fn test_hidden_rows_use_hidden_color() {
        let theme = THEME_REGISTRY.get_or_default("midnight");
        let style = line_style(&line(LineKind::Body), 0.0, theme);
        assert_eq!(style.fg, Some(theme.hidden_color));
    }

    #[test]
    fn test_revealed_rows_use_full_color() {
        let theme = THEME_REGISTRY.get_or_default("midnight");
        assert_eq!(
            line_style(&line(LineKind::Body), 1.0, theme).fg,
            Some(theme.text_color)
        );
        assert_eq!(
            line_style(&line(LineKind::Heading), 1.0, theme).fg,
            Some(theme.accent_color)
        );
    }
}
