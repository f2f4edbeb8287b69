//! The built-in scene, rasterized in software.
//!
//! One triangle with per-vertex colors over an opaque black clear. Vertices
//! are in normalized device coordinates (x right, y up, both in [-1, 1]) and
//! colors are interpolated barycentrically, so the picture scales with any
//! frame size.

use crate::{
    error::SoftframeResult,
    frame::{BYTES_PER_PIXEL, FrameRgba},
};

/// Clear color behind the triangle.
const CLEAR_RGBA: [u8; 4] = [0, 0, 0, 255];

/// Triangle vertices: position in NDC plus an RGBA color.
/// Red top-right, green bottom-left, blue bottom-right.
const SCENE_TRIANGLE: [([f32; 2], [u8; 4]); 3] = [
    ([1.0, 1.0], [255, 0, 0, 255]),
    ([-1.0, -1.0], [0, 255, 0, 255]),
    ([1.0, -1.0], [0, 0, 255, 255]),
];

/// Renders the scene into a freshly allocated `width` x `height` frame.
pub fn render_scene(width: u32, height: u32) -> SoftframeResult<FrameRgba> {
    let mut frame = FrameRgba::filled(width, height, CLEAR_RGBA)?;
    draw_triangle(&mut frame, &SCENE_TRIANGLE);
    tracing::debug!(width, height, "rendered scene");
    Ok(frame)
}

/// Maps an NDC position to pixel space (origin top-left, y down).
fn to_pixel_space(ndc: [f32; 2], width: u32, height: u32) -> [f32; 2] {
    [
        (ndc[0] + 1.0) * 0.5 * width as f32,
        (1.0 - ndc[1]) * 0.5 * height as f32,
    ]
}

/// Twice the signed area of the triangle `a`, `b`, `c`.
fn edge(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

fn draw_triangle(frame: &mut FrameRgba, tri: &[([f32; 2], [u8; 4]); 3]) {
    let width = frame.width();
    let height = frame.height();

    let [v0, v1, v2] = [
        to_pixel_space(tri[0].0, width, height),
        to_pixel_space(tri[1].0, width, height),
        to_pixel_space(tri[2].0, width, height),
    ];
    let [c0, c1, c2] = [tri[0].1, tri[1].1, tri[2].1];

    let area = edge(v0, v1, v2);
    if area == 0.0 {
        // A degenerate triangle covers no pixel centers.
        return;
    }

    for (y, row) in frame.rows_mut().enumerate() {
        let py = y as f32 + 0.5;
        for (x, px_bytes) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let p = [x as f32 + 0.5, py];

            // Barycentric weights, normalized by the signed area so either
            // vertex winding is accepted.
            let w0 = edge(v1, v2, p) / area;
            let w1 = edge(v2, v0, p) / area;
            let w2 = edge(v0, v1, p) / area;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            for ch in 0..4 {
                let value = w0 * c0[ch] as f32 + w1 * c1[ch] as f32 + w2 * c2[ch] as f32;
                px_bytes[ch] = value.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}
