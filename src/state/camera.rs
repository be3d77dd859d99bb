// Camera state shared by the controller and the transform service
use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A point in page or frame coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// View offset and scale of the camera frame content.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub left: f64,
    pub top: f64,
    pub zoom: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            zoom: 1.0,
        }
    }
}

impl CameraState {
    /// CSS transform placing the content layer inside the frame.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.left, self.top, self.zoom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_difference_is_componentwise() {
        let d = Point::new(120.0, 115.0) - Point::new(100.0, 100.0);
        assert_eq!(d, Point::new(20.0, 15.0));
    }

    #[test]
    fn default_camera_is_identity() {
        let cam = CameraState::default();
        assert_eq!(cam.left, 0.0);
        assert_eq!(cam.top, 0.0);
        assert_eq!(cam.zoom, 1.0);
        assert_eq!(cam.css_transform(), "translate(0px, 0px) scale(1)");
    }
}
