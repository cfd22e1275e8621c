use egui::{Color32, Pos2};
use sketchpad::canvas::CanvasBuffer;
use sketchpad::tool::{BrushSettings, Tool};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("sketchpad_{}_{}", std::process::id(), name))
}

#[test]
fn vertical_red_line_stays_on_its_path() {
    let mut canvas = CanvasBuffer::new(400, 300, Color32::WHITE);
    canvas.stroke_segment(
        Pos2::new(10.0, 10.0),
        Pos2::new(10.0, 100.0),
        Color32::RED,
        5,
    );

    // A ~5px-wide red column at x≈10 spanning y=10..100.
    for y in 12..98 {
        assert_eq!(canvas.pixel(10, y), Some(Color32::RED), "y={y}");
        assert_eq!(canvas.pixel(9, y), Some(Color32::RED), "y={y}");
        assert_eq!(canvas.pixel(11, y), Some(Color32::RED), "y={y}");
    }

    // Every painted pixel lies within the stroke's reach (half width plus
    // the round caps); everything else is still the white background.
    for y in 0..300 {
        for x in 0..400 {
            match canvas.pixel(x, y) {
                Some(c) if c == Color32::RED => {
                    assert!((7..=13).contains(&x), "stray red pixel at ({x}, {y})");
                    assert!((7..=103).contains(&y), "stray red pixel at ({x}, {y})");
                }
                Some(c) => assert_eq!(c, Color32::WHITE, "at ({x}, {y})"),
                None => unreachable!(),
            }
        }
    }
}

#[test]
fn eraser_restores_the_background_color() {
    let mut canvas = CanvasBuffer::new(100, 100, Color32::WHITE);
    let brush = BrushSettings {
        color: Color32::RED,
        width: 8,
    };

    let from = Pos2::new(20.0, 50.0);
    let to = Pos2::new(80.0, 50.0);
    canvas.stroke_segment(from, to, brush.stroke_color(Tool::Brush, canvas.background()), 8);
    assert_eq!(canvas.pixel(50, 50), Some(Color32::RED));

    // Erase over the same path with a wider stroke.
    canvas.stroke_segment(from, to, brush.stroke_color(Tool::Eraser, canvas.background()), 12);
    for y in 0..100 {
        for x in 0..100 {
            assert_eq!(canvas.pixel(x, y), Some(Color32::WHITE), "at ({x}, {y})");
        }
    }
}

#[test]
fn background_change_overwrites_every_pixel() {
    let mut canvas = CanvasBuffer::new(120, 90, Color32::WHITE);
    canvas.stroke_segment(
        Pos2::new(0.0, 0.0),
        Pos2::new(119.0, 89.0),
        Color32::BLACK,
        10,
    );
    canvas.fill(Color32::from_rgb(0, 128, 255));
    for y in 0..90 {
        for x in 0..120 {
            assert_eq!(canvas.pixel(x, y), Some(Color32::from_rgb(0, 128, 255)));
        }
    }
}

#[test]
fn png_round_trip_is_lossless() {
    let mut canvas = CanvasBuffer::new(64, 48, Color32::WHITE);
    canvas.fill(Color32::from_rgb(200, 180, 20));
    canvas.stroke_segment(
        Pos2::new(5.0, 5.0),
        Pos2::new(60.0, 40.0),
        Color32::from_rgb(30, 60, 90),
        3,
    );

    let path = temp_path("round_trip.png");
    let written = canvas.save(&path).unwrap();
    let loaded = image::open(&written).unwrap().to_rgba8();
    assert_eq!(loaded.width(), 64);
    assert_eq!(loaded.height(), 48);
    for y in 0..48 {
        for x in 0..64 {
            let p = loaded.get_pixel(x, y);
            let expected = canvas.pixel(x as i64, y as i64).unwrap();
            assert_eq!(
                (p.0[0], p.0[1], p.0[2]),
                (expected.r(), expected.g(), expected.b()),
                "at ({x}, {y})"
            );
        }
    }
    std::fs::remove_file(&written).unwrap();
}

#[test]
fn all_blue_canvas_exports_all_blue() {
    let mut canvas = CanvasBuffer::new(400, 300, Color32::WHITE);
    canvas.fill(Color32::BLUE);

    let path = temp_path("all_blue.png");
    let written = canvas.save(&path).unwrap();
    let loaded = image::open(&written).unwrap().to_rgba8();
    assert_eq!((loaded.width(), loaded.height()), (400, 300));
    assert!(
        loaded
            .pixels()
            .all(|p| (p.0[0], p.0[1], p.0[2]) == (Color32::BLUE.r(), Color32::BLUE.g(), Color32::BLUE.b()))
    );
    std::fs::remove_file(&written).unwrap();
}

#[test]
fn save_without_extension_defaults_to_png() {
    let canvas = CanvasBuffer::new(8, 8, Color32::WHITE);
    let path = temp_path("no_extension");
    let written = canvas.save(&path).unwrap();
    assert_eq!(written.extension().unwrap(), "png");
    assert!(written.exists());
    std::fs::remove_file(&written).unwrap();
}

#[test]
fn save_to_unwritable_path_errors() {
    let canvas = CanvasBuffer::new(8, 8, Color32::WHITE);
    let err = canvas
        .save(std::path::Path::new("/nonexistent-dir/out.png"))
        .unwrap_err();
    assert!(!err.to_string().is_empty());
}
