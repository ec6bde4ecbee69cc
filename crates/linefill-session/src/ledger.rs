//! Fill ledger
//!
//! Two views of the same history: per-region coordinate lists keyed by
//! transform mode, and a stack of pre-fill snapshots. Every push and pop
//! touches both, so the stack depth always equals the number of recorded
//! coordinates.

use linefill_color::TransformMode;
use linefill_core::PixelBuffer;
use std::collections::BTreeMap;

/// A fill position in buffer coordinates
pub type Coord = (u32, u32);

/// Coordinates filled for one region, grouped by transform mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillRecord {
    region: usize,
    coords: BTreeMap<TransformMode, Vec<Coord>>,
}

impl FillRecord {
    /// Create an empty record for a region
    pub fn new(region: usize) -> Self {
        Self {
            region,
            coords: BTreeMap::new(),
        }
    }

    /// Region index this record belongs to
    pub fn region(&self) -> usize {
        self.region
    }

    /// Coordinates filled in `mode`, oldest first
    pub fn coords(&self, mode: TransformMode) -> &[Coord] {
        self.coords.get(&mode).map(Vec::as_slice).unwrap_or_default()
    }

    /// Modes with at least one coordinate, in mode order
    pub fn modes(&self) -> impl Iterator<Item = (TransformMode, &[Coord])> {
        self.coords.iter().map(|(&mode, list)| (mode, list.as_slice()))
    }

    /// Total number of coordinates across all modes
    pub fn len(&self) -> usize {
        self.coords.values().map(Vec::len).sum()
    }

    /// Whether no coordinate is recorded
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    fn push(&mut self, mode: TransformMode, coord: Coord) {
        self.coords.entry(mode).or_default().push(coord);
    }

    fn pop(&mut self, mode: TransformMode) -> Option<Coord> {
        let list = self.coords.get_mut(&mode)?;
        let coord = list.pop();
        if list.is_empty() {
            self.coords.remove(&mode);
        }
        coord
    }
}

/// One committed fill, as remembered for undo
#[derive(Debug, Clone)]
pub struct UndoEntry {
    /// Buffer contents immediately before the fill
    pub snapshot: PixelBuffer,
    /// Region the fill was recorded under
    pub region: usize,
    /// Mode the fill was recorded under
    pub mode: TransformMode,
}

/// Coordinate records plus the undo stack
#[derive(Debug, Clone, Default)]
pub struct FillLedger {
    records: Vec<FillRecord>,
    undo: Vec<UndoEntry>,
}

impl FillLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty record for the next region and return its index
    pub fn add_region(&mut self) -> usize {
        let region = self.records.len();
        self.records.push(FillRecord::new(region));
        region
    }

    /// Records in region order
    pub fn records(&self) -> &[FillRecord] {
        &self.records
    }

    /// Record of one region
    pub fn record(&self, region: usize) -> Option<&FillRecord> {
        self.records.get(region)
    }

    /// Record a fill. Returns `false` without recording when `region` has
    /// no record.
    pub fn push(
        &mut self,
        region: usize,
        mode: TransformMode,
        coord: Coord,
        snapshot: PixelBuffer,
    ) -> bool {
        let Some(record) = self.records.get_mut(region) else {
            return false;
        };
        record.push(mode, coord);
        self.undo.push(UndoEntry {
            snapshot,
            region,
            mode,
        });
        true
    }

    /// Remove the newest fill, returning its undo entry and coordinate
    pub fn pop(&mut self) -> Option<(UndoEntry, Option<Coord>)> {
        let entry = self.undo.pop()?;
        let coord = self
            .records
            .get_mut(entry.region)
            .and_then(|record| record.pop(entry.mode));
        Some((entry, coord))
    }

    /// Number of fills that can be undone
    pub fn depth(&self) -> usize {
        self.undo.len()
    }

    /// Total number of recorded coordinates
    pub fn coord_count(&self) -> usize {
        self.records.iter().map(FillRecord::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linefill_core::Rgba;

    fn snapshot() -> PixelBuffer {
        PixelBuffer::new_filled(2, 2, Rgba::WHITE).unwrap()
    }

    #[test]
    fn test_push_pop_keep_counts_equal() {
        let mut ledger = FillLedger::new();
        ledger.add_region();
        ledger.add_region();

        assert!(ledger.push(0, TransformMode::None, (1, 1), snapshot()));
        assert!(ledger.push(1, TransformMode::Tint, (0, 1), snapshot()));
        assert!(ledger.push(0, TransformMode::None, (0, 0), snapshot()));
        assert_eq!(ledger.depth(), 3);
        assert_eq!(ledger.coord_count(), 3);

        let (entry, coord) = ledger.pop().unwrap();
        assert_eq!((entry.region, entry.mode, coord), (0, TransformMode::None, Some((0, 0))));
        assert_eq!(ledger.depth(), ledger.coord_count());
    }

    #[test]
    fn test_empty_mode_is_pruned() {
        let mut ledger = FillLedger::new();
        ledger.add_region();
        ledger.push(0, TransformMode::Shade, (3, 4), snapshot());
        assert_eq!(ledger.record(0).unwrap().coords(TransformMode::Shade), &[(3, 4)]);

        ledger.pop();
        let record = ledger.record(0).unwrap();
        assert!(record.is_empty());
        assert_eq!(record.modes().count(), 0);
        assert!(ledger.pop().is_none());
    }

    #[test]
    fn test_unregistered_region_is_not_recorded() {
        let mut ledger = FillLedger::new();
        assert!(!ledger.push(0, TransformMode::None, (0, 0), snapshot()));
        assert_eq!(ledger.depth(), 0);
    }
}
