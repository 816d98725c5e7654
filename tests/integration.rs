use image::{DynamicImage, Rgba, RgbaImage};
use watermark_stamp::{ColorModel, Percent, StampEngine, StampOptions};

fn solid(width: u32, height: u32, color: Rgba<u8>) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, color))
}

fn full_strength_centered() -> StampOptions {
    StampOptions {
        position: (Percent::from_static(50), Percent::from_static(50)),
        opacity: Percent::from_static(100),
        scale: Percent::from_static(100),
        grayscale: false,
        color_model: ColorModel::Rgb,
    }
}

#[test]
fn white_square_lands_centered_on_base() {
    let base = solid(100, 100, Rgba([200, 0, 0, 255]));
    let watermark = solid(50, 50, Rgba([255, 255, 255, 255]));

    let engine = StampEngine::new(&watermark, full_strength_centered()).unwrap();
    let stamped = engine.apply(&base).into_rgb8();

    // Stamp center at (50,50), so rows/cols [25,75) are white.
    for (x, y) in [(25u32, 25u32), (50, 50), (74, 74), (25, 74)] {
        assert_eq!(stamped.get_pixel(x, y), &image::Rgb([255, 255, 255]));
    }
    for (x, y) in [(0u32, 0u32), (24, 50), (50, 24), (75, 50), (99, 99)] {
        assert_eq!(stamped.get_pixel(x, y), &image::Rgb([200, 0, 0]));
    }
}

#[test]
fn zero_opacity_leaves_base_unchanged() {
    let base = solid(100, 100, Rgba([10, 120, 230, 255]));
    let watermark = solid(50, 50, Rgba([255, 255, 255, 255]));

    let options = StampOptions {
        opacity: Percent::from_static(0),
        ..full_strength_centered()
    };
    let engine = StampEngine::new(&watermark, options).unwrap();
    let stamped = engine.apply(&base).into_rgba8();

    assert_eq!(stamped, base.into_rgba8());
}

#[test]
fn transparent_watermark_regions_do_not_touch_base() {
    let base = solid(100, 100, Rgba([0, 200, 0, 255]));
    // left half opaque white, right half fully transparent
    let mut wm = RgbaImage::from_pixel(50, 50, Rgba([255, 255, 255, 255]));
    for y in 0..50 {
        for x in 25..50 {
            wm.put_pixel(x, y, Rgba([255, 255, 255, 0]));
        }
    }

    let engine =
        StampEngine::new(&DynamicImage::ImageRgba8(wm), full_strength_centered()).unwrap();
    let stamped = engine.apply(&base).into_rgb8();

    assert_eq!(stamped.get_pixel(30, 50), &image::Rgb([255, 255, 255]));
    assert_eq!(stamped.get_pixel(60, 50), &image::Rgb([0, 200, 0]));
}

#[test]
fn stamp_may_hang_off_canvas() {
    let base = solid(100, 100, Rgba([40, 40, 40, 255]));
    let watermark = solid(50, 50, Rgba([255, 255, 255, 255]));

    let options = StampOptions {
        position: (Percent::from_static(0), Percent::from_static(0)),
        ..full_strength_centered()
    };
    let engine = StampEngine::new(&watermark, options).unwrap();
    assert_eq!(engine.position(100, 100), (-25, -25));

    let stamped = engine.apply(&base).into_rgb8();
    // only the stamp's bottom-right quadrant is on canvas: [0,25)x[0,25)
    assert_eq!(stamped.get_pixel(10, 10), &image::Rgb([255, 255, 255]));
    assert_eq!(stamped.get_pixel(30, 30), &image::Rgb([40, 40, 40]));
}

#[test]
fn resize_quirk_uses_integer_divisor() {
    let watermark = solid(200, 100, Rgba([255, 255, 255, 255]));

    let half = StampEngine::new(
        &watermark,
        StampOptions {
            scale: Percent::from_static(50),
            ..full_strength_centered()
        },
    )
    .unwrap();
    assert_eq!(half.watermark().dimensions(), (100, 50));

    // 100 // 30 = 3, a third, not 30 percent
    let third = StampEngine::new(
        &watermark,
        StampOptions {
            scale: Percent::from_static(30),
            ..full_strength_centered()
        },
    )
    .unwrap();
    assert_eq!(third.watermark().dimensions(), (66, 33));
}

#[test]
fn engine_runs_the_edition_pipeline_exactly_once() {
    let watermark = solid(80, 80, Rgba([180, 60, 20, 255]));
    let options = StampOptions {
        grayscale: true,
        opacity: Percent::from_static(40),
        scale: Percent::from_static(50),
        ..StampOptions::default()
    };

    let engine = StampEngine::new(&watermark, options).unwrap();

    // one manual pass of the documented order: grayscale, opacity, resize
    let mut expected = watermark.into_rgba8();
    expected = watermark_stamp::transform::grayscale(&expected);
    expected = watermark_stamp::transform::scale_opacity(&expected, Percent::from_static(40));
    let expected =
        watermark_stamp::transform::resize_percent(&expected, Percent::from_static(50)).unwrap();

    assert_eq!(engine.watermark(), &expected);
}

#[test]
fn output_color_model_is_respected() {
    let base = solid(60, 60, Rgba([120, 90, 10, 255]));
    let watermark = solid(20, 20, Rgba([255, 255, 255, 255]));

    let cases: [(ColorModel, fn(&DynamicImage) -> bool); 4] = [
        (ColorModel::Rgb, |img| {
            matches!(img, DynamicImage::ImageRgb8(_))
        }),
        (ColorModel::Rgba, |img| {
            matches!(img, DynamicImage::ImageRgba8(_))
        }),
        (ColorModel::Luma, |img| {
            matches!(img, DynamicImage::ImageLuma8(_))
        }),
        (ColorModel::LumaAlpha, |img| {
            matches!(img, DynamicImage::ImageLumaA8(_))
        }),
    ];

    for (model, check) in cases {
        let options = StampOptions {
            color_model: model,
            ..full_strength_centered()
        };
        let engine = StampEngine::new(&watermark, options).unwrap();
        let out = engine.apply(&base);
        assert!(check(&out), "wrong buffer kind for {model:?}");
    }
}

#[test]
fn process_file_stamps_and_saves() {
    let dir = tempfile::TempDir::new().unwrap();
    let base_path = dir.path().join("base.png");
    let out_path = dir.path().join("nested").join("out.png");

    solid(100, 100, Rgba([0, 0, 200, 255]))
        .save(&base_path)
        .unwrap();

    let watermark = solid(50, 50, Rgba([255, 255, 255, 255]));
    let engine = StampEngine::new(&watermark, full_strength_centered()).unwrap();

    let result = engine.process_file(&base_path, &out_path);
    assert!(result.success, "unexpected failure: {}", result.message);
    assert_eq!(result.path, base_path);

    let reloaded = image::open(&out_path).unwrap().into_rgb8();
    assert_eq!(reloaded.dimensions(), (100, 100));
    assert_eq!(reloaded.get_pixel(50, 50), &image::Rgb([255, 255, 255]));
    assert_eq!(reloaded.get_pixel(5, 5), &image::Rgb([0, 0, 200]));
}

#[test]
fn process_file_reports_missing_input() {
    let dir = tempfile::TempDir::new().unwrap();
    let watermark = solid(10, 10, Rgba([255, 255, 255, 255]));
    let engine = StampEngine::new(&watermark, StampOptions::default()).unwrap();

    let result = engine.process_file(
        &dir.path().join("no-such-file.png"),
        &dir.path().join("out.png"),
    );
    assert!(!result.success);
    assert!(result.message.contains("Failed to load"));
}

#[test]
fn process_file_reports_alpha_into_jpeg_without_panicking() {
    let dir = tempfile::TempDir::new().unwrap();
    let base_path = dir.path().join("base.png");
    solid(60, 60, Rgba([5, 5, 5, 255])).save(&base_path).unwrap();

    let watermark = solid(20, 20, Rgba([255, 255, 255, 255]));
    let options = StampOptions {
        color_model: ColorModel::Rgba,
        ..full_strength_centered()
    };
    let engine = StampEngine::new(&watermark, options).unwrap();

    let result = engine.process_file(&base_path, &dir.path().join("out.jpg"));
    assert!(!result.success);
    assert!(result.message.contains("Failed to save"));
}

#[test]
fn save_rejects_unknown_extensions() {
    let dir = tempfile::TempDir::new().unwrap();
    let img = solid(10, 10, Rgba([1, 2, 3, 255]));
    let err = watermark_stamp::save_image(&img, &dir.path().join("out.xyz")).unwrap_err();
    assert!(matches!(err, watermark_stamp::Error::UnsupportedFormat(_)));
}
