//! linefill-test - Regression test support for linefill
//!
//! This crate provides the harness shared by every crate's `tests/`
//! directory:
//!
//! - [`RegParams`] - numbered value, byte and buffer comparisons that
//!   collect failures instead of panicking
//! - [`fixtures`] - synthetic line-art templates
//!
//! # Usage
//!
//! ```ignore
//! use linefill_test::RegParams;
//!
//! let mut rp = RegParams::new("seedfill");
//! rp.compare_values(16.0, outcome.pixels_filled as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

pub mod fixtures;
mod params;

pub use params::RegParams;
