use crate::error::{SoftframeError, SoftframeResult};

/// Bytes per pixel: 8-bit red, green, blue, alpha.
pub const BYTES_PER_PIXEL: usize = 4;

/// An owned `width * height` RGBA8 pixel buffer, row-major, top row first.
///
/// Construction validates dimensions and length, so every `FrameRgba` in
/// circulation is well-formed and the encoder can assume its preconditions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameRgba {
    /// Wraps existing pixel data. `data.len()` must be exactly
    /// `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> SoftframeResult<Self> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(SoftframeError::validation(format!(
                "pixel data size mismatch: got {} bytes, expected {} ({}x{} rgba8)",
                data.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocates a frame filled with one color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> SoftframeResult<Self> {
        let len = Self::byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / BYTES_PER_PIXEL {
            data.extend_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn byte_len(width: u32, height: u32) -> SoftframeResult<usize> {
        if width == 0 || height == 0 {
            return Err(SoftframeError::validation(
                "frame width and height must be non-zero",
            ));
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(|| {
                SoftframeError::allocation(format!(
                    "{width}x{height} rgba8 buffer size overflows usize"
                ))
            })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    fn row_len(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Borrowed view of the rows, top row first. This is the row table the
    /// encoder walks: `height` slices into this frame's buffer, never a copy.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> {
        self.data.chunks_exact(self.row_len())
    }

    pub fn rows_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [u8]> {
        let row_len = self.row_len();
        self.data.chunks_exact_mut(row_len)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[at..at + BYTES_PER_PIXEL]);
        Some(px)
    }
}
