/// Side length of the design grid all icon geometry is expressed in.
pub const DESIGN_UNITS: f32 = 24.0;

/// A point in design units (or pixels, once scaled).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn scaled(self, scale: f32) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

/// Axis-aligned box given by two corners, both inclusive when rasterized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Square box of side `side` with its top-left corner at `origin`.
    pub fn square(origin: Point, side: f32) -> Self {
        Self::new(origin.x, origin.y, origin.x + side, origin.y + side)
    }

    pub fn scaled(self, scale: f32) -> Self {
        Self {
            min: self.min.scaled(scale),
            max: self.max.scaled(scale),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Elliptical arc inscribed in `bounds`, swept clockwise from `start_deg` to `end_deg`.
///
/// Angles follow image orientation: 0° points along +x and, since y grows
/// downward, 90° points straight down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    pub bounds: BoundingBox,
    pub start_deg: f32,
    pub end_deg: f32,
}

impl ArcShape {
    pub const fn new(bounds: BoundingBox, start_deg: f32, end_deg: f32) -> Self {
        Self {
            bounds,
            start_deg,
            end_deg,
        }
    }

    pub fn scaled(self, scale: f32) -> Self {
        Self {
            bounds: self.bounds.scaled(scale),
            ..self
        }
    }

    /// Whether `angle_deg` (any range) falls within the sweep.
    pub fn covers(&self, angle_deg: f32) -> bool {
        let sweep = self.end_deg - self.start_deg;
        if sweep >= 360.0 {
            return true;
        }
        (angle_deg - self.start_deg).rem_euclid(360.0) <= sweep
    }
}

/// Pixels per design unit for an icon of `size` pixels.
pub fn scale_for(size: u32) -> f32 {
    size as f32 / DESIGN_UNITS
}

/// Foreground stroke width in pixels, never thinner than one pixel.
pub fn line_width(scale: f32) -> u32 {
    (scale * 0.8).round().max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_for_design_size_is_identity() {
        assert_eq!(scale_for(24), 1.0);
        assert_eq!(scale_for(48), 2.0);
    }

    #[test]
    fn test_line_width_minimum_one() {
        assert_eq!(line_width(scale_for(16)), 1);
        assert_eq!(line_width(scale_for(24)), 1);
        assert_eq!(line_width(scale_for(48)), 2);
        assert_eq!(line_width(scale_for(256)), 9);
    }

    #[test]
    fn test_box_scaling() {
        let b = BoundingBox::new(7.0, 12.0, 19.0, 22.0).scaled(2.0);
        assert_eq!(b, BoundingBox::new(14.0, 24.0, 38.0, 44.0));
        assert_eq!(b.width(), 24.0);
        assert_eq!(b.height(), 20.0);
    }

    #[test]
    fn test_square_from_origin() {
        let b = BoundingBox::square(Point::new(2.0, 3.0), 4.0);
        assert_eq!(b, BoundingBox::new(2.0, 3.0, 6.0, 7.0));
    }

    #[test]
    fn test_arc_covers_wraps_through_zero() {
        let arc = ArcShape::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), -10.0, 100.0);
        assert!(arc.covers(-5.0));
        assert!(arc.covers(355.0));
        assert!(arc.covers(0.0));
        assert!(arc.covers(90.0));
        assert!(arc.covers(100.0));
        assert!(!arc.covers(180.0));
        assert!(!arc.covers(340.0));
    }

    #[test]
    fn test_arc_full_sweep() {
        let arc = ArcShape::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), 0.0, 360.0);
        assert!(arc.covers(270.0));
    }
}
