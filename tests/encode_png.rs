use std::path::PathBuf;

use nanorand::{Rng, WyRand};
use softframe::{FrameRgba, SoftframeError, save_png};

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("encode_png").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn decode_rgba(path: &std::path::Path) -> (u32, u32, Vec<u8>) {
    let img = image::open(path).unwrap().to_rgba8();
    let (w, h) = img.dimensions();
    (w, h, img.into_raw())
}

#[test]
fn two_by_two_round_trips_exact_pixels() {
    init_tracing();
    let path = out_dir("rt2x2").join("out.png");

    // Red, green, blue, transparent black.
    let pixels: Vec<u8> = [
        [255u8, 0, 0, 255],
        [0, 255, 0, 255],
        [0, 0, 255, 255],
        [0, 0, 0, 0],
    ]
    .concat();
    let frame = FrameRgba::new(2, 2, pixels.clone()).unwrap();

    save_png(&path, &frame).unwrap();

    let (w, h, decoded) = decode_rgba(&path);
    assert_eq!((w, h), (2, 2));
    assert_eq!(decoded, pixels);
}

#[test]
fn one_by_one_round_trips() {
    let path = out_dir("rt1x1").join("out.png");
    let frame = FrameRgba::new(1, 1, vec![12, 34, 56, 78]).unwrap();

    save_png(&path, &frame).unwrap();

    let (w, h, decoded) = decode_rgba(&path);
    assert_eq!((w, h), (1, 1));
    assert_eq!(decoded, vec![12, 34, 56, 78]);
}

#[test]
fn random_frame_round_trips_exact_bytes() {
    let path = out_dir("rt_random").join("out.png");

    let mut rng = WyRand::new_seed(0xDEAD_BEEF);
    let data: Vec<u8> = (0..31 * 17 * 4).map(|_| rng.generate::<u8>()).collect();
    let frame = FrameRgba::new(31, 17, data.clone()).unwrap();

    save_png(&path, &frame).unwrap();

    let (w, h, decoded) = decode_rgba(&path);
    assert_eq!((w, h), (31, 17));
    assert_eq!(decoded, data);
}

#[test]
fn rendered_scene_round_trips() {
    let path = out_dir("rt_scene").join("out.png");
    let frame = softframe::render_scene(64, 48).unwrap();

    save_png(&path, &frame).unwrap();

    let (w, h, decoded) = decode_rgba(&path);
    assert_eq!((w, h), (64, 48));
    assert_eq!(decoded, frame.data());
}

#[test]
fn missing_directory_is_an_io_error() {
    let path = out_dir("missing")
        .join("no")
        .join("such")
        .join("dir")
        .join("out.png");
    let frame = FrameRgba::new(1, 1, vec![0, 0, 0, 255]).unwrap();

    let err = save_png(&path, &frame).unwrap_err();
    assert!(matches!(err, SoftframeError::Io(_)), "got {err}");
    assert!(!path.exists());
}

#[test]
fn overwrite_truncates_previous_file() {
    let path = out_dir("overwrite").join("out.png");

    let big = softframe::render_scene(64, 64).unwrap();
    save_png(&path, &big).unwrap();

    let small = FrameRgba::new(1, 1, vec![9, 9, 9, 255]).unwrap();
    save_png(&path, &small).unwrap();

    let (w, h, decoded) = decode_rgba(&path);
    assert_eq!((w, h), (1, 1));
    assert_eq!(decoded, vec![9, 9, 9, 255]);
}

#[cfg(target_os = "linux")]
#[test]
fn repeated_failing_encodes_leak_no_file_descriptors() {
    fn open_fd_count() -> usize {
        std::fs::read_dir("/proc/self/fd").unwrap().count()
    }

    let path = out_dir("fd_leak")
        .join("no")
        .join("such")
        .join("dir")
        .join("out.png");
    let frame = FrameRgba::new(4, 4, vec![0u8; 4 * 4 * 4]).unwrap();

    // Warm up any lazily-opened descriptors before measuring.
    assert!(save_png(&path, &frame).is_err());
    let before = open_fd_count();

    for _ in 0..64 {
        assert!(save_png(&path, &frame).is_err());
    }

    assert_eq!(open_fd_count(), before);
}

#[cfg(target_os = "linux")]
#[test]
fn repeated_successful_encodes_leak_no_file_descriptors() {
    fn open_fd_count() -> usize {
        std::fs::read_dir("/proc/self/fd").unwrap().count()
    }

    let path = out_dir("fd_ok").join("out.png");
    let frame = FrameRgba::new(4, 4, vec![0u8; 4 * 4 * 4]).unwrap();

    save_png(&path, &frame).unwrap();
    let before = open_fd_count();

    for _ in 0..64 {
        save_png(&path, &frame).unwrap();
    }

    assert_eq!(open_fd_count(), before);
}
