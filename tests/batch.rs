use std::fs;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use lowlight_synth::image::load_image;
use lowlight_synth::{Batch, Config, Error, Method};

fn write_ramp(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let v = u8::try_from((x * 16 + y * 8) % 256).unwrap();
        Rgb([v, v.wrapping_add(40), 255])
    });
    img.save(path).unwrap();
}

fn config(input: &Path, output: &Path, method: Method) -> Config {
    Config {
        input_dir: input.to_path_buf(),
        output_dir: output.to_path_buf(),
        method,
        seed: Some(2024),
        show_progress: false,
        ..Config::default()
    }
}

#[test]
fn batch_darkens_every_decodable_image() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("low_light");

    write_ramp(&input.path().join("a.png"), 12, 7);
    write_ramp(&input.path().join("b.PNG"), 5, 5);
    fs::write(input.path().join("broken.png"), b"not an image").unwrap();
    fs::write(input.path().join("notes.txt"), b"ignored").unwrap();

    let mut batch = Batch::new(config(input.path(), &out_dir, Method::Exposure)).unwrap();
    let summary = batch.run().unwrap();

    assert_eq!(summary.found, 3);
    assert_eq!(summary.written, 2);
    assert_eq!(summary.skipped, 1);
    assert!(!out_dir.join("broken.png").exists());
    assert!(!out_dir.join("notes.txt").exists());

    for name in ["a.png", "b.PNG"] {
        let original = load_image(input.path().join(name)).unwrap();
        let darkened = load_image(out_dir.join(name)).unwrap();
        assert_eq!(darkened.dim(), original.dim());
        for (&x, &y) in original.iter().zip(darkened.iter()) {
            assert!(y <= x, "{name}: {x} -> {y}");
        }
        // Exposure factor is below 0.4, so a full-scale channel lands at most at 102.
        assert!(darkened.iter().all(|&v| v <= 102));
    }
}

#[test]
fn batch_is_reproducible_with_seed() {
    let input = tempfile::tempdir().unwrap();
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    write_ramp(&input.path().join("one.png"), 9, 9);
    write_ramp(&input.path().join("two.png"), 4, 6);

    for out in [first.path(), second.path()] {
        let mut batch = Batch::new(config(input.path(), out, Method::Mixed)).unwrap();
        assert_eq!(batch.run().unwrap().written, 2);
    }

    for name in ["one.png", "two.png"] {
        let a = load_image(first.path().join(name)).unwrap();
        let b = load_image(second.path().join(name)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn batch_fails_on_missing_input_dir() {
    let output = tempfile::tempdir().unwrap();
    let missing = output.path().join("does_not_exist");

    let mut batch = Batch::new(config(&missing, output.path(), Method::Gamma)).unwrap();
    let err = batch.run().unwrap_err();

    assert!(matches!(err, Error::MissingInputDir { .. }));
}

#[test]
fn batch_with_empty_input_writes_nothing() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("nested").join("low_light");

    let mut batch = Batch::new(config(input.path(), &out_dir, Method::Gamma)).unwrap();
    let summary = batch.run().unwrap();

    assert_eq!(summary, lowlight_synth::Summary::default());
    assert!(out_dir.is_dir());
}

#[test]
fn batch_rejects_invalid_quality() {
    let input = tempfile::tempdir().unwrap();
    let cfg = Config {
        output_quality: 0,
        ..config(input.path(), input.path(), Method::Exposure)
    };

    assert!(matches!(Batch::new(cfg), Err(Error::InvalidArgument { .. })));
}

#[test]
fn batch_keeps_transparent_images_opaque() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    RgbaImage::from_pixel(6, 4, Rgba([200, 200, 200, 255]))
        .save(input.path().join("a.png"))
        .unwrap();

    let mut cfg = config(input.path(), output.path(), Method::Exposure);
    cfg.seed = Some(1);
    let mut batch = Batch::new(cfg).unwrap();
    assert_eq!(batch.run().unwrap().written, 1);

    let darkened = image::open(output.path().join("a.png")).unwrap().to_rgba8();
    for pixel in darkened.pixels() {
        assert_eq!(pixel[3], 255);
        // 200 * factor with factor below 0.4
        assert!(pixel[0] < 80, "colour not darkened: {pixel:?}");
    }
}

#[test]
fn batch_decodes_by_content_not_extension() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    RgbImage::from_pixel(8, 8, Rgb([180, 180, 180]))
        .save_with_format(input.path().join("mislabelled.png"), ImageFormat::Jpeg)
        .unwrap();

    let mut batch = Batch::new(config(input.path(), output.path(), Method::Gamma)).unwrap();
    let summary = batch.run().unwrap();

    assert_eq!(summary.written, 1);
    assert_eq!(summary.skipped, 0);
    assert_eq!(load_image(output.path().join("mislabelled.png")).unwrap().dim(), (8, 8, 3));
}
