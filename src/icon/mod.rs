pub mod raster;
pub mod shape;

use image::{Rgba, RgbaImage};

use raster::{fill_polygon, fill_rect, stroke_arc, stroke_polygon, stroke_rect};
use shape::{line_width, scale_for, ArcShape, BoundingBox, Point};

/// Dark gray used for every stroke and fill.
pub const FOREGROUND: Rgba<u8> = Rgba([40, 40, 40, 255]);
/// Light gray of the window cutout.
pub const WINDOW_FILL: Rgba<u8> = Rgba([200, 200, 200, 255]);
/// Smallest icon size that gets a window.
pub const WINDOW_MIN_SIZE: u32 = 32;

const WAVE_START_DEG: f32 = -10.0;
const WAVE_END_DEG: f32 = 100.0;

/// Sound waves, outermost first.
const SOUND_WAVES: [ArcShape; 3] = [
    ArcShape::new(BoundingBox::new(0.5, 1.0, 7.5, 7.5), WAVE_START_DEG, WAVE_END_DEG),
    ArcShape::new(BoundingBox::new(2.0, 2.5, 7.0, 7.5), WAVE_START_DEG, WAVE_END_DEG),
    ArcShape::new(BoundingBox::new(4.0, 4.5, 7.0, 7.5), WAVE_START_DEG, WAVE_END_DEG),
];

const ROOF: [Point; 3] = [
    Point::new(9.0, 2.0),
    Point::new(19.0, 12.0),
    Point::new(7.0, 12.0),
];

const BODY: BoundingBox = BoundingBox::new(7.0, 12.0, 19.0, 22.0);

const WINDOW_MARGIN: f32 = 2.0;
const WINDOW_SIDE: f32 = 3.0;

/// Render the home-sound-out icon as a `size`×`size` RGBA image.
///
/// Geometry is laid out on a 24-unit grid and scaled by `size / 24`.
/// Shapes are drawn back to front: sound waves, roof, body, then the
/// window for sizes of at least [`WINDOW_MIN_SIZE`].
pub fn render(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let scale = scale_for(size);
    let stroke = line_width(scale);

    draw_sound_waves(&mut img, scale, stroke);

    let roof = ROOF.map(|p| p.scaled(scale));
    fill_polygon(&mut img, &roof, FOREGROUND);
    stroke_polygon(&mut img, &roof, FOREGROUND);

    let body = BODY.scaled(scale);
    fill_rect(&mut img, body, FOREGROUND);

    if size >= WINDOW_MIN_SIZE {
        let margin = WINDOW_MARGIN * scale;
        let origin = Point::new(body.min.x + margin, body.min.y + margin);
        let window = BoundingBox::square(origin, WINDOW_SIDE * scale);
        fill_rect(&mut img, window, WINDOW_FILL);
        stroke_rect(&mut img, window, (stroke / 2).max(1), FOREGROUND);
    }

    img
}

fn draw_sound_waves(img: &mut RgbaImage, scale: f32, stroke: u32) {
    for wave in SOUND_WAVES {
        stroke_arc(img, wave.scaled(scale), stroke, FOREGROUND);
    }
}
