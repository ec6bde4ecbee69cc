//! Editing session
//!
//! A [`FillSession`] owns the template buffer, the region registry and the
//! fill ledger for one loaded template. Fills are committed with
//! [`FillSession::commit`] and reverted, newest first, with
//! [`FillSession::undo_last`].

use crate::error::{SessionError, SessionResult};
use crate::ledger::{Coord, FillLedger, FillRecord};
use crate::record::{RegionFill, TemplateRecord};
use crate::registry::{EXAMPLE_PALETTE, RegionRegistry};
use linefill_color::{TransformMode, apply_transform};
use linefill_core::{PixelBuffer, Rgba};
use linefill_region::{FillOutcome, FloodFillOptions, RegionError, Tolerance, floodfill};

/// Options for a fill session
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Tolerance used by every committed fill
    pub tolerance: Tolerance,
}

impl SessionOptions {
    /// Set the fill tolerance
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = Tolerance::new(tolerance);
        self
    }

    fn fill_options(&self) -> FloodFillOptions {
        FloodFillOptions {
            tolerance: self.tolerance,
        }
    }
}

/// Template metadata captured at load time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateInfo {
    /// Template image name
    pub image: String,
    /// Species, lowercased
    pub species: String,
    /// Gender, lowercased
    pub gender: String,
}

impl TemplateInfo {
    /// Create template metadata, lowercasing species and gender
    pub fn new(image: impl Into<String>, species: &str, gender: &str) -> Self {
        Self {
            image: image.into(),
            species: species.to_lowercase(),
            gender: gender.to_lowercase(),
        }
    }
}

/// State of one template being colored
#[derive(Debug, Clone)]
pub struct FillSession {
    info: TemplateInfo,
    buffer: PixelBuffer,
    registry: RegionRegistry,
    ledger: FillLedger,
    options: SessionOptions,
}

impl FillSession {
    /// Start a session on a freshly loaded template.
    ///
    /// Region 0 is registered so a fill can be made right away.
    pub fn load_template(info: TemplateInfo, buffer: PixelBuffer, options: SessionOptions) -> Self {
        tracing::info!(
            image = %info.image,
            width = buffer.width(),
            height = buffer.height(),
            "template loaded"
        );
        let mut ledger = FillLedger::new();
        ledger.add_region();
        Self {
            info,
            buffer,
            registry: RegionRegistry::with_first_region(),
            ledger,
            options,
        }
    }

    /// Register the next color region and return its index.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::RegistryFull`] when every slot is taken.
    pub fn add_region(&mut self) -> SessionResult<usize> {
        let index = self.registry.add_region()?;
        let recorded = self.ledger.add_region();
        debug_assert_eq!(index, recorded);
        Ok(index)
    }

    /// Name a region. Naming it `"skin"` switches its fill color.
    pub fn set_region_name(&mut self, index: usize, name: impl Into<String>) -> SessionResult<()> {
        self.registry.set_name(index, name)
    }

    /// Fill color a commit in `region` and `mode` would use
    pub fn fill_color(&self, region: usize, mode: TransformMode) -> SessionResult<Rgba> {
        let color_index = self
            .registry
            .color_index(region)
            .ok_or_else(|| self.unknown_region(region))?;
        Ok(apply_transform(EXAMPLE_PALETTE[color_index], mode).into())
    }

    /// Fill the area at `coord` with the region's palette color
    /// transformed by `mode`, and record the fill.
    ///
    /// The fill is recorded even when it changes no pixel, so every commit
    /// can be undone.
    ///
    /// # Errors
    ///
    /// - [`SessionError::UnknownRegion`] if `region` is not registered
    /// - [`SessionError::Region`] if `coord` is outside the buffer
    ///
    /// On error neither the buffer nor the ledger is modified.
    pub fn commit(
        &mut self,
        region: usize,
        mode: TransformMode,
        coord: Coord,
    ) -> SessionResult<FillOutcome> {
        let color = self.fill_color(region, mode)?;
        self.commit_color(region, mode, coord, color)
    }

    /// Like [`commit`](Self::commit) with an explicit fill color; the fill
    /// is still recorded under `region` and `mode`.
    pub fn commit_color(
        &mut self,
        region: usize,
        mode: TransformMode,
        coord: Coord,
        color: Rgba,
    ) -> SessionResult<FillOutcome> {
        if self.ledger.record(region).is_none() {
            return Err(self.unknown_region(region));
        }
        let (x, y) = coord;
        if !self.buffer.contains(x, y) {
            return Err(RegionError::InvalidSeed {
                x,
                y,
                width: self.buffer.width(),
                height: self.buffer.height(),
            }
            .into());
        }

        let snapshot = self.buffer.clone();
        let outcome = floodfill(&mut self.buffer, x, y, color, &self.options.fill_options())?;
        self.ledger.push(region, mode, coord, snapshot);

        tracing::debug!(
            region,
            mode = %mode,
            x,
            y,
            color = %color,
            pixels = outcome.pixels_filled,
            depth = self.ledger.depth(),
            "fill committed"
        );
        Ok(outcome)
    }

    /// Revert the newest fill. Returns `false` if there is nothing to undo.
    pub fn undo_last(&mut self) -> bool {
        let Some((entry, coord)) = self.ledger.pop() else {
            return false;
        };
        self.buffer = entry.snapshot;
        tracing::debug!(
            region = entry.region,
            mode = %entry.mode,
            coord = ?coord,
            depth = self.ledger.depth(),
            "fill undone"
        );
        true
    }

    /// Number of fills that can be undone
    pub fn undo_depth(&self) -> usize {
        self.ledger.depth()
    }

    /// Current buffer
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Consume the session and return its buffer
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    /// Template metadata
    pub fn info(&self) -> &TemplateInfo {
        &self.info
    }

    /// Region registry
    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    /// Session options
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Per-region fill records, in region order
    pub fn records(&self) -> &[FillRecord] {
        self.ledger.records()
    }

    /// Build the serializable record of this session
    pub fn record(&self) -> TemplateRecord {
        let fill = self
            .ledger
            .records()
            .iter()
            .map(|rec| {
                let name = self.registry.name(rec.region()).unwrap_or_default();
                RegionFill::from_record(name, rec)
            })
            .collect();
        TemplateRecord {
            image: self.info.image.clone(),
            species: self.info.species.clone(),
            gender: self.info.gender.clone(),
            fill,
        }
    }

    fn unknown_region(&self, index: usize) -> SessionError {
        SessionError::UnknownRegion {
            index,
            registered: self.registry.len(),
        }
    }
}
