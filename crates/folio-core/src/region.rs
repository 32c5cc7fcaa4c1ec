//! Regions - named, positioned areas of a document

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a region
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for RegionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A tracked area of the document
///
/// `offset` is the distance from the top of the document. `height` is the
/// laid-out extent, known once the host has measured the region; sources that
/// compute intersection ratios need it, the active-region resolver does not.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub offset: f64,
    pub height: Option<f64>,
}

impl Region {
    pub fn new(id: impl Into<RegionId>, offset: f64) -> Self {
        Self {
            id: id.into(),
            offset,
            height: None,
        }
    }

    /// Attach a measured height
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Bottom edge, when the height is known
    pub fn bottom(&self) -> Option<f64> {
        self.height.map(|h| self.offset + h)
    }
}
