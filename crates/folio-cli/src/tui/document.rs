//! Wrapping a section document into terminal rows

use std::collections::HashMap;

use folio_core::{Document, Region};

/// Horizontal padding on each side of the body
pub const BODY_PADDING: u16 = 2;

/// Narrowest wrap width, so tiny terminals still lay out
const MIN_WRAP_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Body,
    Blank,
    Footer,
}

/// One rendered row of the document
#[derive(Debug, Clone, PartialEq)]
pub struct DocLine {
    /// Index of the owning section, `None` for the footer
    pub section: Option<usize>,
    pub kind: LineKind,
    pub text: String,
}

/// A document wrapped to a given width, with one region per section
#[derive(Debug, Clone, Default)]
pub struct DocumentLayout {
    pub lines: Vec<DocLine>,
    pub regions: Vec<Region>,
    pub width: u16,
}

impl DocumentLayout {
    /// Wrap `document` for a body `width` columns wide (padding included)
    pub fn build(document: &Document, width: u16) -> Self {
        let wrap_width = (width.saturating_sub(2 * BODY_PADDING) as usize).max(MIN_WRAP_WIDTH);
        let mut lines = Vec::new();
        let mut heights = HashMap::new();

        for (index, section) in document.sections.iter().enumerate() {
            let start = lines.len();
            let row = |kind, text: String| DocLine {
                section: Some(index),
                kind,
                text,
            };

            lines.push(row(LineKind::Heading, section.heading().to_string()));
            lines.push(row(LineKind::Blank, String::new()));
            for paragraph in &section.body {
                for wrapped in textwrap::wrap(paragraph, wrap_width) {
                    lines.push(row(LineKind::Body, wrapped.into_owned()));
                }
                lines.push(row(LineKind::Blank, String::new()));
            }
            lines.push(row(LineKind::Blank, String::new()));

            heights.insert(section.id.as_str(), (lines.len() - start) as f64);
        }

        if let Some(footer) = &document.footer {
            for wrapped in textwrap::wrap(footer, wrap_width) {
                lines.push(DocLine {
                    section: None,
                    kind: LineKind::Footer,
                    text: wrapped.into_owned(),
                });
            }
        }

        let regions = document.layout(|section| {
            heights
                .get(section.id.as_str())
                .copied()
                .unwrap_or_default()
        });

        Self {
            lines,
            regions,
            width,
        }
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Rows starting at `offset`, at most `height` of them
    pub fn window(&self, offset: usize, height: usize) -> &[DocLine] {
        let start = offset.min(self.lines.len());
        let end = offset.saturating_add(height).min(self.lines.len());
        &self.lines[start..end]
    }

    /// First row of the section at `index`
    pub fn section_start(&self, index: usize) -> Option<usize> {
        self.regions.get(index).map(|r| r.offset as usize)
    }
}
