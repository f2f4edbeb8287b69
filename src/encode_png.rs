//! PNG encoding of an RGBA8 frame.
//!
//! The write path is staged: open the destination file, configure the encoder
//! handle, write the header (which yields the active writer), stream every
//! row through a row writer, then write the trailer. Each stage owns the one
//! before it, so any failure releases exactly the stages acquired so far, in
//! reverse order, with nothing torn down twice. The whole sequence runs under
//! a single error scope; every library failure surfaces as one
//! [`SoftframeError`] carrying the captured message.

use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

use crate::{
    error::{SoftframeError, SoftframeResult},
    frame::FrameRgba,
};

/// Encodes `frame` as an 8-bit RGBA, non-interlaced PNG at `path`, with the
/// library's default filter and compression settings.
///
/// An existing file at `path` is truncated. On failure the file may exist but
/// be partially written; no handle or table survives the call either way.
#[tracing::instrument(skip(frame))]
pub fn save_png(path: &Path, frame: &FrameRgba) -> SoftframeResult<()> {
    let file = File::create(path)?;
    let sink = BufWriter::new(file);

    let mut encoder = png::Encoder::new(sink, frame.width(), frame.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let writer = encoder.write_header().map_err(write_stage)?;
    let mut row_writer = writer.into_stream_writer().map_err(setup_stage)?;

    for row in frame.rows() {
        row_writer.write_all(row).map_err(row_stage)?;
    }
    row_writer.finish().map_err(write_stage)?;

    tracing::debug!(
        path = %path.display(),
        width = frame.width(),
        height = frame.height(),
        "encoded png"
    );
    Ok(())
}

/// Failure while constructing the row writer on top of the handle.
fn setup_stage(err: png::EncodingError) -> SoftframeError {
    match err {
        png::EncodingError::IoError(io) => SoftframeError::Io(io),
        other => SoftframeError::setup(other.to_string()),
    }
}

/// Failure while writing the header, rows, or the trailer.
fn write_stage(err: png::EncodingError) -> SoftframeError {
    match err {
        png::EncodingError::IoError(io) => SoftframeError::Io(io),
        other => SoftframeError::encoding(other.to_string()),
    }
}

/// Row writes go through `std::io::Write`, which folds the library's own
/// failures into `io::Error`. Unwrap those back into encoding errors so the
/// captured message is reported; keep genuine OS-level failures as i/o.
fn row_stage(err: std::io::Error) -> SoftframeError {
    let from_library = err
        .get_ref()
        .is_some_and(|inner| inner.is::<png::EncodingError>());
    if from_library {
        SoftframeError::encoding(err.to_string())
    } else {
        SoftframeError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_stage_keeps_io_errors_as_io() {
        let err = setup_stage(png::EncodingError::IoError(std::io::Error::other("disk")));
        assert!(matches!(err, SoftframeError::Io(_)));
    }

    #[test]
    fn header_rejection_surfaces_as_encoding() {
        // Indexed output without a palette is refused at header time.
        let mut encoder = png::Encoder::new(Vec::new(), 4, 4);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);

        let err = encoder
            .write_header()
            .map_err(write_stage)
            .err()
            .expect("header write should fail");
        assert!(matches!(err, SoftframeError::Encoding { .. }), "got {err}");
    }

    #[test]
    fn write_stage_captures_library_message() {
        let err = write_stage(png::EncodingError::LimitsExceeded);
        let SoftframeError::Encoding { message } = err else {
            panic!("expected an encoding error");
        };
        assert!(!message.is_empty());
    }

    #[test]
    fn row_stage_keeps_os_errors_as_io() {
        let err = row_stage(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(matches!(err, SoftframeError::Io(_)));
    }

    #[test]
    fn row_stage_unwraps_wrapped_library_errors() {
        let wrapped = std::io::Error::other(png::EncodingError::LimitsExceeded);
        assert!(matches!(
            row_stage(wrapped),
            SoftframeError::Encoding { .. }
        ));
    }
}
