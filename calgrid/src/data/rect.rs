use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in page coordinates, as reported by layout measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.,
            y: self.y + self.height / 2.,
        }
    }

    /// Half-open containment: the left and top edges are inside, the right and
    /// bottom edges belong to the neighbouring cell.
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x
            && point.x < self.x + self.width
            && self.y <= point.y
            && point.y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center() {
        let rect = Rect::new(10., 20., 100., 40.);
        assert_eq!(rect.center(), Point { x: 60., y: 40. });
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(0., 0., 100., 100.);
        assert!(rect.contains(Point { x: 0., y: 0. }));
        assert!(rect.contains(Point { x: 99.9, y: 99.9 }));
        assert!(!rect.contains(Point { x: 100., y: 50. }));
        assert!(!rect.contains(Point { x: 50., y: 100. }));
        assert!(!rect.contains(Point { x: -0.1, y: 50. }));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = Rect::new(5., 5., 0., 0.);
        assert!(!rect.contains(Point { x: 5., y: 5. }));
    }
}
