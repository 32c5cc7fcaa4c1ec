//! Application state and main loop

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, style::Style, widgets::Block, Frame, Terminal};
use tracing::{debug, info};

use folio_core::{Document, FolioConfig, ScrollFeed, ScrollSpy, ScrollUpdate};

use crate::tui::components::{
    render_document_scrollbar, render_nav_bar, render_sections, render_status_bar, StatusInfo,
};
use crate::tui::document::DocumentLayout;
use crate::tui::reveal::RevealAnimations;
use crate::tui::state::{LayoutState, ScrollState};
use crate::tui::themes::{Theme, THEME_REGISTRY};

/// Frame interval while idle
const FRAME_TIMEOUT: Duration = Duration::from_millis(16);

pub struct App {
    pub document: Document,
    /// The document wrapped to the current body width
    pub doc_layout: DocumentLayout,
    pub spy: ScrollSpy,
    /// Scroll notifications the spy listens to
    pub feed: ScrollFeed,
    pub scroll: ScrollState,
    pub reveals: RevealAnimations,
    pub theme: &'static Theme,
    pub layout: LayoutState,
    pub should_quit: bool,
    needs_redraw: bool,
}

impl App {
    pub fn new(document: Document, config: &FolioConfig, theme_name: &str) -> Result<Self> {
        let mut spy = ScrollSpy::new(config)?;
        let mut feed = ScrollFeed::new();
        spy.attach(&mut feed);

        Ok(Self {
            document,
            doc_layout: DocumentLayout::default(),
            spy,
            feed,
            scroll: ScrollState::new(),
            reveals: RevealAnimations::default(),
            theme: THEME_REGISTRY.get_or_default(theme_name),
            layout: LayoutState::default(),
            should_quit: false,
            needs_redraw: true,
        })
    }

    /// Recompute areas for a new terminal size and re-lay the document out
    pub fn resize(&mut self, screen: Rect) -> Result<()> {
        self.layout = LayoutState::compute(screen);
        let body = self.layout.body_area;

        if self.doc_layout.width != body.width || self.doc_layout.regions.is_empty() {
            self.doc_layout = DocumentLayout::build(&self.document, body.width);
            debug!(
                width = body.width,
                lines = self.doc_layout.total_lines(),
                "Document laid out"
            );
        }
        self.scroll
            .update_max_scroll(self.doc_layout.total_lines(), body.height);

        let update = self.spy.set_viewport_height(body.height as f64);
        self.apply_update(update);
        let update = self.spy.layout(self.doc_layout.regions.clone())?;
        self.apply_update(update);

        // Offset may have been clamped by the new bounds
        self.feed.publish(self.scroll.offset as f64);
        self.needs_redraw = true;
        Ok(())
    }

    /// Publish the current offset after the scroll state moved
    pub fn scrolled(&mut self) {
        if self.feed.position() != self.scroll.offset as f64 {
            self.feed.publish(self.scroll.offset as f64);
        }
        self.needs_redraw = true;
    }

    /// Drain scroll and intersection events, advance fade-ins
    pub fn tick(&mut self) {
        let update = self.spy.poll();
        self.apply_update(update);

        // One more frame after the last fade-in finishes
        if self.reveals.is_animating() {
            self.reveals.tick();
            self.needs_redraw = true;
        }
    }

    fn apply_update(&mut self, update: ScrollUpdate) {
        if update.is_empty() {
            return;
        }
        for id in update.revealed {
            debug!(section = %id, "Section revealed");
            self.reveals.start(id);
        }
        self.needs_redraw = true;
    }

    /// Reveal progress of the section at `index`
    pub fn section_progress(&self, index: usize) -> f32 {
        self.doc_layout
            .regions
            .get(index)
            .map(|r| self.reveals.progress(&r.id, self.spy.is_visible(&r.id)))
            .unwrap_or(0.0)
    }

    fn active_label(&self) -> Option<&str> {
        let active = self.spy.active()?;
        self.document
            .section(active.as_str())
            .map(|s| s.label.as_str())
    }

    pub fn ui(&self, f: &mut Frame) {
        let theme = self.theme;
        f.render_widget(
            Block::default().style(Style::default().bg(theme.bg_color)),
            f.area(),
        );

        render_nav_bar(f, self.layout.header_area, theme, &self.document, &self.spy);
        render_sections(
            f,
            self.layout.body_area,
            theme,
            &self.doc_layout,
            self.scroll.offset,
            |index| self.section_progress(index),
        );

        let section_starts: Vec<usize> = (0..self.doc_layout.regions.len())
            .filter_map(|i| self.doc_layout.section_start(i))
            .collect();
        render_document_scrollbar(
            f,
            self.layout.scrollbar_area,
            self.scroll.offset,
            self.doc_layout.total_lines(),
            self.scroll.viewport_height,
            &section_starts,
            theme,
        );

        let info = StatusInfo {
            active_label: self.active_label(),
            revealed: self.spy.visible_count(),
            total_sections: self.document.sections.len(),
            offset: self.scroll.offset,
            max_scroll: self.scroll.max_scroll,
            more_above: self.scroll.can_scroll_up(),
            more_below: self.scroll.can_scroll_down(),
        };
        render_status_bar(f, self.layout.footer_area, theme, &info);
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        info!(
            sections = self.document.sections.len(),
            theme = %self.theme.name,
            "Starting viewer"
        );

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            let size = terminal.size()?;
            let screen = Rect::new(0, 0, size.width, size.height);
            if screen != self.layout.screen {
                self.resize(screen)?;
            }

            self.tick();

            // Only render if something changed
            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased; // Prefer events over timeout when both are ready

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) => self.handle_key(key),
                        Some(Ok(Event::Mouse(mouse))) => self.handle_mouse_event(mouse),
                        Some(Ok(Event::Resize(_, _))) => self.needs_redraw = true,
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e.into()),
                        None => break,
                    }
                }
                _ = tokio::time::sleep(FRAME_TIMEOUT) => {
                    // Timeout - continue loop for fade-ins and pending events
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let document = Document::sample().unwrap();
        let mut app = App::new(document, &FolioConfig::terminal(), "midnight").unwrap();
        app.resize(Rect::new(0, 0, 80, 24)).unwrap();
        app
    }

    #[test]
    fn test_first_section_active_after_layout() {
        let app = app();
        assert_eq!(app.spy.active().map(|id| id.as_str()), Some("about"));
        assert!(app.spy.is_visible(&"about".into()));
        assert!(!app.spy.is_scrolled());
    }

    #[test]
    fn test_scrolling_moves_active_section() {
        let mut app = app();
        let projects = app.doc_layout.regions[2].offset as usize;
        app.scroll.scroll_to_line(projects);
        app.scrolled();
        app.tick();

        assert_eq!(app.spy.active().map(|id| id.as_str()), Some("projects"));
        assert!(app.spy.is_scrolled());
        assert!(app.spy.is_visible(&"projects".into()));
    }

    #[test]
    fn test_revealed_sections_stay_revealed() {
        let mut app = app();
        let contact = app.doc_layout.regions[5].offset as usize;
        app.scroll.scroll_to_line(contact);
        app.scrolled();
        app.tick();
        app.scroll.scroll_to_line(0);
        app.scrolled();
        app.tick();

        assert!(app.spy.is_visible(&"skills".into()));
        assert_eq!(app.spy.active().map(|id| id.as_str()), Some("about"));
    }

    #[test]
    fn test_resize_rewraps_and_keeps_observers() {
        let mut app = app();
        let wide = app.doc_layout.total_lines();
        app.resize(Rect::new(0, 0, 40, 24)).unwrap();

        assert!(app.doc_layout.total_lines() > wide);
        assert_eq!(app.spy.active_observers(), app.document.sections.len());
    }

    #[test]
    fn test_ui_renders_header_and_status() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..80).map(|x| buffer[(x, y)].symbol().to_string()).collect()
        };
        assert!(row(0).contains("•About"));
        assert!(row(23).contains("About"));
        assert!(row(23).contains("q quit"));
    }
}
