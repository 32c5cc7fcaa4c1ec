//! Active region resolution (scroll-spy)

use crate::constants::spy::DEFAULT_LOOK_AHEAD;
use crate::error::{non_negative, FolioError, Result};
use crate::region::Region;

/// Picks the region the reader is currently "in"
///
/// The active region is the last one, in list order, whose offset does not
/// exceed `scroll_offset + look_ahead`. When none qualifies the first region
/// is used. List order is assumed to be document order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveRegionResolver {
    look_ahead: f64,
}

impl Default for ActiveRegionResolver {
    fn default() -> Self {
        Self {
            look_ahead: DEFAULT_LOOK_AHEAD,
        }
    }
}

impl ActiveRegionResolver {
    pub fn new(look_ahead: f64) -> Result<Self> {
        if !non_negative(look_ahead) {
            return Err(FolioError::InvalidLookAhead(look_ahead));
        }
        Ok(Self { look_ahead })
    }

    pub fn look_ahead(&self) -> f64 {
        self.look_ahead
    }

    /// Resolve the active region. `None` only for an empty list.
    pub fn resolve<'a>(&self, regions: &'a [Region], scroll_offset: f64) -> Option<&'a Region> {
        let target = scroll_offset + self.look_ahead;
        regions
            .iter()
            .rev()
            .find(|region| region.offset <= target)
            .or_else(|| regions.first())
    }
}

/// Whether offsets never decrease along the list
pub fn is_document_ordered(regions: &[Region]) -> bool {
    regions.windows(2).all(|pair| pair[0].offset <= pair[1].offset)
}
