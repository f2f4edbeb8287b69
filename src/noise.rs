//! Byte-stream corruption for resilience testing.
//!
//! Copies a reader to a writer in fixed-size chunks, flipping each byte with
//! an independent probability by adding a random 0-255 offset. Consumers
//! feed it their own transport (a pipe, usually) and check how the system on
//! the other end copes.

use std::io::{Read, Write};

use nanorand::{Rng, WyRand};

use crate::error::SoftframeResult;

/// Default per-byte corruption probability.
pub const DEFAULT_PROBABILITY: f32 = 0.0005;

const CHUNK_SIZE: usize = 4096;

/// Per-byte corruption probability, clamped into [0, 1] at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseConfig {
    probability: f32,
}

impl NoiseConfig {
    /// Out-of-range values saturate: anything above 1 corrupts every byte,
    /// anything below 0 (and NaN) corrupts none.
    pub fn new(probability: f32) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self { probability }
    }

    pub fn probability(&self) -> f32 {
        self.probability
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            probability: DEFAULT_PROBABILITY,
        }
    }
}

/// Corrupts each byte of `buf` with the configured probability by adding a
/// random offset (which may be zero, leaving the byte intact).
pub fn corrupt_in_place(buf: &mut [u8], cfg: NoiseConfig, rng: &mut WyRand) {
    for byte in buf {
        let roll = rng.generate::<u32>() as f32 / u32::MAX as f32;
        if roll < cfg.probability {
            *byte = byte.wrapping_add(rng.generate::<u8>());
        }
    }
}

/// Pumps `reader` to `writer` until EOF, corrupting bytes along the way.
/// Returns the number of bytes copied.
pub fn run_filter<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    cfg: NoiseConfig,
    rng: &mut WyRand,
) -> SoftframeResult<u64> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        corrupt_in_place(&mut buf[..n], cfg, rng);
        writer.write_all(&buf[..n])?;
        total += n as u64;
    }
}
