//! Serialized template records
//!
//! A [`TemplateRecord`] is the JSON form of a session: template metadata
//! and, per region, the coordinates filled in each transform mode.
//!
//! ```json
//! {"image":"cat.png","species":"cat","gender":"woman",
//!  "fill":[{"region":"hair","coords-norm":[[3,4]],"coords-shade":[[5,6]]}]}
//! ```
//!
//! Modes without coordinates are omitted. [`replay`] turns a record back
//! into a session by committing every stored coordinate on a template.

use crate::error::SessionResult;
use crate::ledger::{Coord, FillRecord};
use crate::session::{FillSession, SessionOptions, TemplateInfo};
use linefill_color::TransformMode;
use linefill_core::PixelBuffer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serialized session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub image: String,
    pub species: String,
    pub gender: String,
    pub fill: Vec<RegionFill>,
}

/// Serialized fills of one region, keyed by record coordinate key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionFill {
    pub region: String,
    #[serde(flatten)]
    pub coords: BTreeMap<String, Vec<Coord>>,
}

impl RegionFill {
    /// Build the serialized form of a ledger record
    pub fn from_record(name: &str, record: &FillRecord) -> Self {
        let coords = record
            .modes()
            .map(|(mode, list)| (mode.coord_key().to_string(), list.to_vec()))
            .collect();
        Self {
            region: name.to_string(),
            coords,
        }
    }

    /// Coordinate lists in mode order.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Color`](crate::SessionError::Color) for a
    /// key that names no transform mode.
    pub fn modes(&self) -> SessionResult<Vec<(TransformMode, &[Coord])>> {
        let mut modes = self
            .coords
            .iter()
            .map(|(key, list)| -> SessionResult<_> {
                Ok((TransformMode::from_coord_key(key)?, list.as_slice()))
            })
            .collect::<SessionResult<Vec<_>>>()?;
        modes.sort_by_key(|&(mode, _)| mode);
        Ok(modes)
    }
}

impl TemplateRecord {
    /// Template metadata of this record
    pub fn info(&self) -> TemplateInfo {
        TemplateInfo::new(self.image.clone(), &self.species, &self.gender)
    }

    /// Number of coordinates across all regions and modes
    pub fn coord_count(&self) -> usize {
        self.fill
            .iter()
            .flat_map(|f| f.coords.values())
            .map(Vec::len)
            .sum()
    }

    /// Encode as compact JSON
    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON
    pub fn to_json_pretty(&self) -> SessionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON
    pub fn from_json(s: &str) -> SessionResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Rebuild a session by replaying a record on a template.
///
/// Regions are registered in record order and named from the record. Fills
/// are committed region by region, each region's modes in mode order and
/// each mode's coordinates oldest first. The record does not keep the
/// interleaving of fills across regions, so overlapping fills from
/// different regions may resolve differently than in the original session.
///
/// The session always starts with region 0, so a record with an empty
/// `fill` list replays to one unnamed region without coordinates. Replaying
/// that result again gives the same record.
///
/// # Errors
///
/// Fails on unknown coordinate keys, on more regions than the registry
/// holds, and on coordinates outside the template.
pub fn replay(
    template: PixelBuffer,
    record: &TemplateRecord,
    options: SessionOptions,
) -> SessionResult<FillSession> {
    let mut session = FillSession::load_template(record.info(), template, options);

    for (index, region) in record.fill.iter().enumerate() {
        if index > 0 {
            session.add_region()?;
        }
        session.set_region_name(index, region.region.clone())?;
    }

    for (index, region) in record.fill.iter().enumerate() {
        for (mode, coords) in region.modes()? {
            for &coord in coords {
                session.commit(index, mode, coord)?;
            }
        }
    }

    tracing::info!(
        image = %record.image,
        regions = record.fill.len(),
        fills = session.undo_depth(),
        "record replayed"
    );
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionError;
    use linefill_color::ColorError;

    #[test]
    fn test_json_shape() {
        let mut coords = BTreeMap::new();
        coords.insert("coords-norm".to_string(), vec![(3, 4)]);
        let record = TemplateRecord {
            image: "cat.png".into(),
            species: "cat".into(),
            gender: "woman".into(),
            fill: vec![RegionFill {
                region: "hair".into(),
                coords,
            }],
        };
        let json = record.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"image":"cat.png","species":"cat","gender":"woman","fill":[{"region":"hair","coords-norm":[[3,4]]}]}"#
        );
        assert_eq!(TemplateRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn test_modes_sorted_by_mode() {
        let fill: RegionFill = serde_json::from_str(
            r#"{"region":"a","coords-analogcw":[[1,1]],"coords-norm":[[0,0]],"coords-tint":[[2,2]]}"#,
        )
        .unwrap();
        let modes: Vec<TransformMode> = fill.modes().unwrap().into_iter().map(|(m, _)| m).collect();
        assert_eq!(
            modes,
            vec![TransformMode::None, TransformMode::Tint, TransformMode::AnalogCw]
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let fill: RegionFill =
            serde_json::from_str(r#"{"region":"a","coords-sepia":[[1,1]]}"#).unwrap();
        assert!(matches!(
            fill.modes(),
            Err(SessionError::Color(ColorError::UnknownTransform(_)))
        ));
    }

    #[test]
    fn test_empty_record_replays_to_first_region() {
        let template = PixelBuffer::new(4, 4).unwrap();
        let empty = TemplateRecord::from_json(
            r#"{"image":"t.png","species":"cat","gender":"man","fill":[]}"#,
        )
        .unwrap();

        let session = replay(template.clone(), &empty, SessionOptions::default()).unwrap();
        assert_eq!(session.undo_depth(), 0);
        assert_eq!(session.buffer(), &template);
        let first = session.record();
        assert_eq!(first.fill, vec![RegionFill::default()]);
        assert_eq!(first.coord_count(), 0);

        let second = replay(template, &first, SessionOptions::default())
            .unwrap()
            .record();
        assert_eq!(second, first);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            TemplateRecord::from_json("{\"image\": 3}"),
            Err(SessionError::Json(_))
        ));
    }
}
