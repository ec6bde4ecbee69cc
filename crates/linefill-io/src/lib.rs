//! linefill-io - Template image I/O
//!
//! Templates are PNG files decoded to RGBA8 [`PixelBuffer`]s. Finished
//! drawings are written back as 8-bit RGBA PNGs.
//!
//! # Examples
//!
//! ```no_run
//! use linefill_io::{read_template, write_template};
//!
//! let buf = read_template("templates/cat.png").unwrap();
//! write_template(&buf, "out.png").unwrap();
//! ```

pub mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use png::{read_png, write_png};

use linefill_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a template PNG from a file path
pub fn read_template<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let buf = read_png(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        width = buf.width(),
        height = buf.height(),
        "loaded template"
    );
    Ok(buf)
}

/// Write a buffer to a file path as PNG
pub fn write_template<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_png(buffer, BufWriter::new(file))?;
    tracing::info!(path = %path.display(), "wrote image");
    Ok(())
}
