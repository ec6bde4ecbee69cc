//! PNG template I/O regression test
//!
//! Writes synthetic templates to disk, reads them back, and checks that
//! every pixel survives, including translucent antialiased strokes.

use linefill_core::Rgba;
use linefill_io::{IoError, read_template, write_template};
use linefill_test::RegParams;
use linefill_test::fixtures;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("linefill_{}_{}.png", std::process::id(), name))
}

#[test]
fn png_reg() {
    let mut rp = RegParams::new("png");

    // Line art with an opaque box and a translucent stroke
    let mut template = fixtures::outlined_box(24, 16, 3, 3, 20, 12);
    fixtures::draw_vline(&mut template, 10, Rgba::new(120, 120, 120, 96));
    template.set_pixel(0, 0, Rgba::TRANSPARENT).unwrap();

    let path = temp_path("template");
    write_template(&template, &path).unwrap();
    let back = read_template(&path).unwrap();
    rp.compare_values(24.0, back.width() as f64, 0.0);
    rp.compare_values(16.0, back.height() as f64, 0.0);
    rp.compare_buffers(&template, &back);
    rp.compare_bytes(template.as_bytes(), back.as_bytes());
    let _ = std::fs::remove_file(&path);

    // A single pixel survives too
    let dot = fixtures::uniform(1, 1, Rgba::new(1, 2, 3, 4));
    let path = temp_path("dot");
    write_template(&dot, &path).unwrap();
    rp.compare_buffers(&dot, &read_template(&path).unwrap());
    let _ = std::fs::remove_file(&path);

    assert!(rp.cleanup());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = read_template(temp_path("does_not_exist")).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
}
