#![forbid(unsafe_code)]

pub mod encode_png;
pub mod error;
pub mod frame;
pub mod noise;
pub mod render_cpu;

pub use encode_png::save_png;
pub use error::{NO_MESSAGE, SoftframeError, SoftframeResult};
pub use frame::{BYTES_PER_PIXEL, FrameRgba};
pub use noise::{DEFAULT_PROBABILITY, NoiseConfig, corrupt_in_place, run_filter};
pub use render_cpu::render_scene;
