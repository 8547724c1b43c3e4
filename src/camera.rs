// camera.rs - Orthographic projector
//
// Parallel projection onto the plane spanned by the camera's right and up
// axes. Depth never affects scale. Callers must supply a non-degenerate
// basis (direction not parallel to up); otherwise output is garbage.

use crate::math::{Point, Vector};

#[derive(Clone, Copy, Debug)]
pub struct CameraSettings {
    pub position: Vector,
    pub direction: Vector,
    pub up: Vector,
    pub width: f32,
    pub height: f32,
    /// World units per pixel
    pub zoom: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    position: Vector,
    right: Vector,
    up: Vector,
    center: Point,
    scale: f32,
}

impl Camera {
    pub fn new(s: CameraSettings) -> Self {
        let forward = s.direction.normalize();
        let right = forward.cross(s.up).normalize();
        let up = right.cross(forward);

        Self {
            position: s.position,
            right,
            up,
            center: Point::new(s.width / 2.0, s.height / 2.0),
            scale: 1.0 / s.zoom,
        }
    }

    pub fn project(&self, p: Vector) -> Point {
        let d = p - self.position;
        Point::new(
            self.center.x + d.dot(self.right) * self.scale,
            self.center.y - d.dot(self.up) * self.scale,
        )
    }
}
