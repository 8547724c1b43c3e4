// matrix.rs - 4x4 homogeneous transform
//
// Row-major storage, column-vector convention (p' = M * p).
// Rotations post-multiply: identity().rot_x(a).rot_y(b) == I * Rx(a) * Ry(b),
// so the most recently chained rotation is the first one applied to a point.

use std::ops::Mul;

use super::Vector;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    pub m: [[f32; 4]; 4],
}

impl Matrix {
    pub const fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn translation(t: Vector) -> Self {
        let mut out = Self::identity();
        out.m[0][3] = t.x;
        out.m[1][3] = t.y;
        out.m[2][3] = t.z;
        out
    }

    pub fn rotation_x(a: f32) -> Self {
        let (s, c) = a.sin_cos();
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, c, -s, 0.0],
                [0.0, s, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn rotation_y(a: f32) -> Self {
        let (s, c) = a.sin_cos();
        Self {
            m: [
                [c, 0.0, s, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [-s, 0.0, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Compose a rotation about the x axis (radians)
    pub fn rot_x(&mut self, a: f32) -> &mut Self {
        *self = *self * Self::rotation_x(a);
        self
    }

    /// Compose a rotation about the y axis (radians)
    pub fn rot_y(&mut self, a: f32) -> &mut Self {
        *self = *self * Self::rotation_y(a);
        self
    }

    pub fn mul(&self, o: &Matrix) -> Matrix {
        let mut out = [[0.0; 4]; 4];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[r][k] * o.m[k][c]).sum();
            }
        }
        Matrix { m: out }
    }

    #[inline]
    pub fn apply(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (r, cell) in out.iter_mut().enumerate() {
            let row = &self.m[r];
            *cell = row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3];
        }
        out
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix {
    type Output = Matrix;
    fn mul(self, o: Matrix) -> Matrix {
        Matrix::mul(&self, &o)
    }
}
