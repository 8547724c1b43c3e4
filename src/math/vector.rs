// vector.rs - World-space 3D vector
//
// Plain value type. Every operation returns a new vector.

use std::ops::{Add, Mul, Neg, Sub};

use super::Matrix;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn from(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    pub fn add(self, o: Vector) -> Self {
        Self::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }

    pub fn scale(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    /// Apply a homogeneous transform, treating the vector as a point (w = 1)
    pub fn transform(self, m: &Matrix) -> Self {
        let [x, y, z, w] = m.apply([self.x, self.y, self.z, 1.0]);
        // Rotations and translations keep w at 1; anything else gets divided out
        if w != 0.0 && w != 1.0 {
            Self::new(x / w, y / w, z / w)
        } else {
            Self::new(x, y, z)
        }
    }

    pub fn dot(self, o: Vector) -> f32 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    pub fn cross(self, o: Vector) -> Self {
        Self::new(
            self.y * o.z - self.z * o.y,
            self.z * o.x - self.x * o.z,
            self.x * o.y - self.y * o.x,
        )
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. Zero stays zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 { self } else { self.scale(1.0 / len) }
    }
}

impl From<[f32; 3]> for Vector {
    fn from(c: [f32; 3]) -> Self {
        Vector::from(c)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, o: Vector) -> Vector {
        Vector::add(self, o)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, o: Vector) -> Vector {
        Vector::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;
    fn mul(self, k: f32) -> Vector {
        self.scale(k)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}
