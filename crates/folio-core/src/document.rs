//! Section documents
//!
//! A document is an ordered list of sections, each of which becomes a region
//! once laid out. Documents are authored in TOML:
//!
//! ```toml
//! title = "Portfolio"
//!
//! [[section]]
//! id = "about"
//! label = "About"
//! body = ["First paragraph", "Second paragraph"]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FolioError, Result};
use crate::region::Region;

const SAMPLE_DOCUMENT: &str = include_str!("../assets/sample.toml");

/// One section of a document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub id: String,
    /// Short name shown in navigation
    pub label: String,
    /// Heading shown above the body, defaults to the label
    #[serde(default)]
    pub heading: Option<String>,
    /// Paragraphs
    #[serde(default)]
    pub body: Vec<String>,
}

impl Section {
    pub fn heading(&self) -> &str {
        self.heading.as_deref().unwrap_or(&self.label)
    }
}

/// An ordered list of sections
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(rename = "section", default)]
    pub sections: Vec<Section>,
}

impl Document {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let document: Self = toml::from_str(raw).map_err(FolioError::DocumentParse)?;
        document.validate()?;
        Ok(document)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// The bundled sample portfolio
    pub fn sample() -> Result<Self> {
        Self::from_toml_str(SAMPLE_DOCUMENT)
    }

    fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(FolioError::EmptyDocument);
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(FolioError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(())
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Stack sections top to bottom using the host's measured heights
    pub fn layout(&self, mut height_of: impl FnMut(&Section) -> f64) -> Vec<Region> {
        let mut offset = 0.0;
        self.sections
            .iter()
            .map(|section| {
                let height = height_of(section).max(0.0);
                let region = Region::new(section.id.as_str(), offset).with_height(height);
                offset += height;
                region
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_document_parses() {
        let document = Document::sample().unwrap();
        let ids: Vec<_> = document.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            ["about", "education", "projects", "experience", "skills", "contact"]
        );
    }

    #[test]
    fn test_heading_defaults_to_label() {
        let document =
            Document::from_toml_str("[[section]]\nid = \"a\"\nlabel = \"Alpha\"\n").unwrap();
        assert_eq!(document.sections[0].heading(), "Alpha");
        assert!(document.sections[0].body.is_empty());
    }

    #[test]
    fn test_rejects_empty_and_duplicate() {
        assert!(matches!(
            Document::from_toml_str("title = \"x\"\n"),
            Err(FolioError::EmptyDocument)
        ));

        let raw = "[[section]]\nid = \"a\"\nlabel = \"A\"\n[[section]]\nid = \"a\"\nlabel = \"B\"\n";
        assert!(matches!(
            Document::from_toml_str(raw),
            Err(FolioError::DuplicateSection(id)) if id == "a"
        ));
    }

    #[test]
    fn test_layout_stacks_offsets() {
        let document = Document::sample().unwrap();
        let regions = document.layout(|section| 10.0 + section.body.len() as f64);

        assert_eq!(regions.len(), document.sections.len());
        assert_eq!(regions[0].offset, 0.0);
        for pair in regions.windows(2) {
            assert_eq!(pair[1].offset, pair[0].bottom().unwrap());
        }
    }
}
