//! linefill - Line-art coloring
//!
//! Colors the areas of a line-art template with a tolerance-aware flood
//! fill, derives fill colors from a small palette through shade, tint and
//! hue transforms, and records every fill so it can be undone or replayed.
//!
//! # Overview
//!
//! - [`color`] - RGB/HSL conversion and palette transforms
//! - [`region`] - scanline flood fill
//! - [`session`] - fill sessions, region registry, template records
//! - [`io`] - PNG template loading and saving
//!
//! # Example
//!
//! ```
//! use linefill::{PixelBuffer, Rgba};
//! use linefill::color::TransformMode;
//! use linefill::session::{FillSession, SessionOptions, TemplateInfo};
//!
//! let template = PixelBuffer::new_filled(4, 4, Rgba::WHITE).unwrap();
//! let info = TemplateInfo::new("blank.png", "cat", "woman");
//! let mut session = FillSession::load_template(info, template, SessionOptions::default());
//!
//! let outcome = session.commit(0, TransformMode::Tint, (0, 0)).unwrap();
//! assert_eq!(outcome.pixels_filled, 16);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use linefill_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use linefill_color as color;
pub use linefill_io as io;
pub use linefill_region as region;
pub use linefill_session as session;
