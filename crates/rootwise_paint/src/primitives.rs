//! Geometric primitives

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_points(p1: Point, p2: Point) -> Self {
        let x = p1.x.min(p2.x);
        let y = p1.y.min(p2.y);
        let width = (p2.x - p1.x).abs();
        let height = (p2.y - p1.y).abs();
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering the pixel box `[x0, y0, x1, y1]`, both corners inclusive
    pub fn from_pixel_box(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::from_points(
            Point::new(x0.min(x1) as f32, y0.min(y1) as f32),
            Point::new(x0.max(x1) as f32 + 1.0, y0.max(y1) as f32 + 1.0),
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub(crate) fn to_skia(self) -> Option<tiny_skia::Rect> {
        tiny_skia::Rect::from_xywh(self.x, self.y, self.width, self.height)
    }
}

/// An axis-aligned ellipse
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl Ellipse {
    pub const fn new(center: Point, radius_x: f32, radius_y: f32) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
        }
    }

    /// Ellipse inscribed in the given bounds
    pub fn inscribed(bounds: Rect) -> Self {
        Self::new(bounds.center(), bounds.width / 2.0, bounds.height / 2.0)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.radius_x * 2.0,
            self.radius_y * 2.0,
        )
    }
}

/// A straight line segment
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_box_is_inclusive() {
        let rect = Rect::from_pixel_box(10, 20, 19, 29);
        assert_eq!(rect, Rect::new(10.0, 20.0, 10.0, 10.0));
    }

    #[test]
    fn test_pixel_box_normalizes_corners() {
        let rect = Rect::from_pixel_box(19, 29, 10, 20);
        assert_eq!(rect, Rect::new(10.0, 20.0, 10.0, 10.0));
    }

    #[test]
    fn test_inscribed_ellipse() {
        let ellipse = Ellipse::inscribed(Rect::new(0.0, 0.0, 100.0, 140.0));
        assert_eq!(ellipse.center, Point::new(50.0, 70.0));
        assert_eq!(ellipse.radius_x, 50.0);
        assert_eq!(ellipse.radius_y, 70.0);
        assert_eq!(ellipse.bounds(), Rect::new(0.0, 0.0, 100.0, 140.0));
    }

    #[test]
    fn test_rect_center() {
        assert_eq!(Rect::new(10.0, 20.0, 30.0, 40.0).center(), Point::new(25.0, 40.0));
    }
}
