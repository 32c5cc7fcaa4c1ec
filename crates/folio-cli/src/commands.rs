//! Headless subcommands
//!
//! Both run the same layout and scroll-spy code as the viewer, without a
//! terminal.

use anyhow::Result;

use folio_core::{Document, FolioConfig, RegionId, ScrollSpy};

use crate::tui::document::DocumentLayout;

/// One row of `folio sections`
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRow {
    pub id: String,
    pub label: String,
    pub offset: f64,
    pub height: f64,
}

/// Result of `folio resolve`
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub active: Option<RegionId>,
    /// Sections intersecting the viewport at this offset
    pub visible: Vec<RegionId>,
    pub scrolled: bool,
}

/// Sections with the offsets they get when wrapped to `width` columns
pub fn list_sections(document: &Document, width: u16) -> Vec<SectionRow> {
    let layout = DocumentLayout::build(document, width);
    document
        .sections
        .iter()
        .zip(&layout.regions)
        .map(|(section, region)| SectionRow {
            id: section.id.clone(),
            label: section.label.clone(),
            offset: region.offset,
            height: region.height.unwrap_or_default(),
        })
        .collect()
}

/// Scroll a `width` x `height` body to `offset` and report what the spy sees
pub fn resolve(
    document: &Document,
    config: &FolioConfig,
    width: u16,
    height: u16,
    offset: f64,
) -> Result<Resolution> {
    let layout = DocumentLayout::build(document, width);
    let mut spy = ScrollSpy::new(config)?;
    spy.set_viewport_height(height as f64);
    spy.layout(layout.regions)?;
    spy.on_scroll(offset);

    let visible = spy
        .regions()
        .iter()
        .filter(|r| spy.is_visible(&r.id))
        .map(|r| r.id.clone())
        .collect();

    Ok(Resolution {
        active: spy.active().cloned(),
        visible,
        scrolled: spy.is_scrolled(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sections_in_document_order() {
        let document = Document::sample().unwrap();
        let rows = list_sections(&document, 80);

        assert_eq!(rows.len(), document.sections.len());
        assert_eq!(rows[0].id, "about");
        assert_eq!(rows[0].offset, 0.0);
        for pair in rows.windows(2) {
            assert_eq!(pair[1].offset, pair[0].offset + pair[0].height);
        }
    }

    #[test]
    fn test_resolve_top_and_bottom() {
        let document = Document::sample().unwrap();
        let config = FolioConfig::terminal();

        let top = resolve(&document, &config, 80, 20, 0.0).unwrap();
        assert_eq!(top.active.as_ref().map(RegionId::as_str), Some("about"));
        assert!(!top.scrolled);
        assert!(top.visible.iter().any(|id| id.as_str() == "about"));

        let bottom = resolve(&document, &config, 80, 20, 10_000.0).unwrap();
        assert_eq!(bottom.active.as_ref().map(RegionId::as_str), Some("contact"));
        assert!(bottom.scrolled);
    }

    #[test]
    fn test_resolve_uses_look_ahead() {
        let document = Document::sample().unwrap();
        let rows = list_sections(&document, 80);
        let projects = rows[2].offset;

        let mut config = FolioConfig::terminal();
        config.spy.look_ahead = 3.0;
        let before = resolve(&document, &config, 80, 20, projects - 3.0).unwrap();
        assert_eq!(before.active.as_ref().map(RegionId::as_str), Some("projects"));

        let early = resolve(&document, &config, 80, 20, projects - 4.0).unwrap();
        assert_eq!(early.active.as_ref().map(RegionId::as_str), Some("education"));
    }
}
