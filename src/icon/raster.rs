use image::{Rgba, RgbaImage};

use super::shape::{ArcShape, BoundingBox, Point};

/// Inclusive pixel span of a box after flooring its corners and clipping to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelRect {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

fn pixel_rect(img: &RgbaImage, rect: BoundingBox) -> Option<PixelRect> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return None;
    }
    let x0 = rect.min.x.floor() as i64;
    let y0 = rect.min.y.floor() as i64;
    let x1 = rect.max.x.floor() as i64;
    let y1 = rect.max.y.floor() as i64;
    if x1 < 0 || y1 < 0 || x0 >= w as i64 || y0 >= h as i64 || x0 > x1 || y0 > y1 {
        return None;
    }
    Some(PixelRect {
        x0: x0.max(0) as u32,
        y0: y0.max(0) as u32,
        x1: x1.min(w as i64 - 1) as u32,
        y1: y1.min(h as i64 - 1) as u32,
    })
}

fn put(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && x < img.width() as i64 && y < img.height() as i64 {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Fill every pixel of `rect`, corners included.
pub fn fill_rect(img: &mut RgbaImage, rect: BoundingBox, color: Rgba<u8>) {
    let Some(r) = pixel_rect(img, rect) else {
        return;
    };
    for y in r.y0..=r.y1 {
        for x in r.x0..=r.x1 {
            img.put_pixel(x, y, color);
        }
    }
}

/// Outline `rect` with a border `width` pixels thick, drawn inward.
pub fn stroke_rect(img: &mut RgbaImage, rect: BoundingBox, width: u32, color: Rgba<u8>) {
    let Some(r) = pixel_rect(img, rect) else {
        return;
    };
    let width = width.max(1);
    for y in r.y0..=r.y1 {
        for x in r.x0..=r.x1 {
            let on_border = x < r.x0 + width
                || y < r.y0 + width
                || x + width > r.x1
                || y + width > r.y1;
            if on_border {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Even-odd test of a point against a closed polygon.
fn contains(points: &[Point], px: f32, py: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > py) != (b.y > py) {
            let x_cross = a.x + (py - a.y) * (b.x - a.x) / (b.y - a.y);
            if px < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Fill the interior of a closed polygon, sampling at pixel centers.
pub fn fill_polygon(img: &mut RgbaImage, points: &[Point], color: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }
    let bounds = points.iter().fold(
        BoundingBox::new(f32::MAX, f32::MAX, f32::MIN, f32::MIN),
        |b, p| {
            BoundingBox::new(
                b.min.x.min(p.x),
                b.min.y.min(p.y),
                b.max.x.max(p.x),
                b.max.y.max(p.y),
            )
        },
    );
    let Some(r) = pixel_rect(img, bounds) else {
        return;
    };
    for y in r.y0..=r.y1 {
        for x in r.x0..=r.x1 {
            if contains(points, x as f32 + 0.5, y as f32 + 0.5) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Draw a one-pixel line between two points (Bresenham).
fn line(img: &mut RgbaImage, from: Point, to: Point, color: Rgba<u8>) {
    let (mut x, mut y) = (from.x.floor() as i64, from.y.floor() as i64);
    let (x_end, y_end) = (to.x.floor() as i64, to.y.floor() as i64);
    let dx = (x_end - x).abs();
    let dy = -(y_end - y).abs();
    let sx = if x < x_end { 1 } else { -1 };
    let sy = if y < y_end { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put(img, x, y, color);
        if x == x_end && y == y_end {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Trace the edges of a closed polygon one pixel wide.
pub fn stroke_polygon(img: &mut RgbaImage, points: &[Point], color: Rgba<u8>) {
    for (i, &from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        line(img, from, to, color);
    }
}

/// Stroke an elliptical arc `width` pixels thick, measured inward from `arc.bounds`.
///
/// The bounds are inclusive, so the ellipse spans from `min` to `max + 1` in
/// pixel-edge coordinates. A pixel is painted when its center lies in the
/// band between the outer ellipse and the ellipse shrunk by `width`, and its
/// angle around the center is inside the sweep.
pub fn stroke_arc(img: &mut RgbaImage, arc: ArcShape, width: u32, color: Rgba<u8>) {
    let b = arc.bounds;
    let rx = (b.width() + 1.0) / 2.0;
    let ry = (b.height() + 1.0) / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let cx = b.min.x + rx;
    let cy = b.min.y + ry;
    let w = width.max(1) as f32;
    let (inner_rx, inner_ry) = (rx - w, ry - w);

    // Scan out to the far pixel edge so centers past floor(max) are tested too.
    let scan = BoundingBox::new(b.min.x, b.min.y, b.max.x + 1.0, b.max.y + 1.0);
    let Some(r) = pixel_rect(img, scan) else {
        return;
    };
    for y in r.y0..=r.y1 {
        for x in r.x0..=r.x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let outer = (dx / rx).powi(2) + (dy / ry).powi(2);
            if outer > 1.0 {
                continue;
            }
            let outside_inner = inner_rx <= 0.0
                || inner_ry <= 0.0
                || (dx / inner_rx).powi(2) + (dy / inner_ry).powi(2) > 1.0;
            if outside_inner && arc.covers(dy.atan2(dx).to_degrees()) {
                img.put_pixel(x, y, color);
            }
        }
    }
}
