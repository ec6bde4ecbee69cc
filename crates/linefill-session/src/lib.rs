//! linefill-session - Fill sessions for linefill
//!
//! This crate ties the color and region crates into an editing session:
//!
//! - **Registry** ([`registry`]) - region names and their palette slots
//! - **Ledger** ([`ledger`]) - recorded fill coordinates and the undo stack
//! - **Session** ([`session`]) - commit and undo fills on a template buffer
//! - **Record** ([`record`]) - JSON template records and replay
//!
//! # Examples
//!
//! ```
//! use linefill_color::TransformMode;
//! use linefill_core::{PixelBuffer, Rgba};
//! use linefill_session::{FillSession, SessionOptions, TemplateInfo};
//!
//! let template = PixelBuffer::new_filled(8, 8, Rgba::WHITE).unwrap();
//! let info = TemplateInfo::new("cat.png", "Cat", "Woman");
//! let mut session = FillSession::load_template(info, template, SessionOptions::default());
//!
//! session.set_region_name(0, "hair").unwrap();
//! session.commit(0, TransformMode::Shade, (2, 3)).unwrap();
//! assert_eq!(session.undo_depth(), 1);
//!
//! let json = session.record().to_json().unwrap();
//! assert!(json.contains(r#""coords-shade":[[2,3]]"#));
//!
//! assert!(session.undo_last());
//! ```

pub mod error;
pub mod ledger;
pub mod record;
pub mod registry;
pub mod session;

// Re-export core types
pub use linefill_core;

// Re-export error types
pub use error::{SessionError, SessionResult};

pub use ledger::{Coord, FillLedger, FillRecord, UndoEntry};
pub use record::{RegionFill, TemplateRecord, replay};
pub use registry::{
    EXAMPLE_PALETTE, MAX_REGIONS, RegionEntry, RegionRegistry, SKIN_COLOR_INDEX, SKIN_NAME,
};
pub use session::{FillSession, SessionOptions, TemplateInfo};
