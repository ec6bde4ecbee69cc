//! Region registry
//!
//! Maps region indices to user-assigned names and to a fixed example
//! palette. Regions are added in index order and each one takes the palette
//! slot with the same index. The last slot is never handed out: it belongs
//! to whichever region is named [`SKIN_NAME`].

use crate::error::{SessionError, SessionResult};
use linefill_core::Rgb;

/// Example palette, one entry per slot
pub const EXAMPLE_PALETTE: [Rgb; 7] = [
    Rgb::new(228, 36, 38),
    Rgb::new(242, 143, 32),
    Rgb::new(241, 231, 13),
    Rgb::new(10, 144, 93),
    Rgb::new(32, 114, 178),
    Rgb::new(110, 57, 141),
    Rgb::new(255, 210, 87),
];

/// Palette slot used by the region named [`SKIN_NAME`]
pub const SKIN_COLOR_INDEX: usize = 6;

/// Region name that redirects a region to [`SKIN_COLOR_INDEX`]
pub const SKIN_NAME: &str = "skin";

/// Number of regions that can be registered
pub const MAX_REGIONS: usize = SKIN_COLOR_INDEX;

/// A registered color region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionEntry {
    index: usize,
    name: String,
}

impl RegionEntry {
    /// Region index, equal to its own palette slot
    pub fn index(&self) -> usize {
        self.index
    }

    /// User-assigned name, empty until set
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this region is filled with the skin color
    pub fn is_skin(&self) -> bool {
        self.name == SKIN_NAME
    }

    /// Palette slot used when filling this region
    pub fn color_index(&self) -> usize {
        if self.is_skin() {
            SKIN_COLOR_INDEX
        } else {
            self.index
        }
    }

    /// Palette entry used when filling this region
    pub fn color(&self) -> Rgb {
        EXAMPLE_PALETTE[self.color_index()]
    }
}

/// Ordered set of color regions for one template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionRegistry {
    entries: Vec<RegionEntry>,
}

impl RegionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding region 0 with an empty name
    pub fn with_first_region() -> Self {
        Self {
            entries: vec![RegionEntry {
                index: 0,
                name: String::new(),
            }],
        }
    }

    /// Register the next region with an empty name and return its index.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::RegistryFull`] once [`MAX_REGIONS`] regions
    /// exist.
    pub fn add_region(&mut self) -> SessionResult<usize> {
        if !self.can_add() {
            return Err(SessionError::RegistryFull {
                capacity: MAX_REGIONS,
            });
        }
        let index = self.entries.len();
        self.entries.push(RegionEntry {
            index,
            name: String::new(),
        });
        Ok(index)
    }

    /// Rename a region.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownRegion`] if `index` is not registered.
    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> SessionResult<()> {
        let registered = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(SessionError::UnknownRegion { index, registered })?;
        entry.name = name.into();
        Ok(())
    }

    /// Get a region by index
    pub fn get(&self, index: usize) -> Option<&RegionEntry> {
        self.entries.get(index)
    }

    /// Name of a region
    pub fn name(&self, index: usize) -> Option<&str> {
        self.get(index).map(RegionEntry::name)
    }

    /// Palette slot used when filling a region
    pub fn color_index(&self, index: usize) -> Option<usize> {
        self.get(index).map(RegionEntry::color_index)
    }

    /// Palette entry shown for and filled into a region
    pub fn display_color(&self, index: usize) -> Option<Rgb> {
        self.get(index).map(RegionEntry::color)
    }

    /// Number of registered regions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no region is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether another region can be added
    pub fn can_add(&self) -> bool {
        self.entries.len() < MAX_REGIONS
    }

    /// Iterate over the registered regions in index order
    pub fn iter(&self) -> impl Iterator<Item = &RegionEntry> {
        self.entries.iter()
    }
}
