// lattice.rs - Lattice sampling
//
// Walks integer lattice points x-major, then z, both ends inclusive.
// Order is fixed so every run visits cells identically.

/// Inclusive lattice from `from` to `to`, stepping `by`, as (x, z) pairs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub by: (i32, i32),
}

impl Lattice {
    pub fn unit(from: (i32, i32), to: (i32, i32)) -> Self {
        Self { from, to, by: (1, 1) }
    }

    /// Points along x
    pub fn columns(&self) -> usize {
        axis_len(self.from.0, self.to.0, self.by.0)
    }

    /// Points along z
    pub fn rows(&self) -> usize {
        axis_len(self.from.1, self.to.1, self.by.1)
    }

    /// Saturates rather than wrapping on absurd extents
    pub fn len(&self) -> usize {
        self.columns().saturating_mul(self.rows())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dense index of lattice point (x, z), if it lies on the lattice
    pub fn index(&self, x: i32, z: i32) -> Option<usize> {
        let col = axis_offset(self.from.0, x, self.by.0)?;
        let row = axis_offset(self.from.1, z, self.by.1)?;
        if col >= self.columns() || row >= self.rows() {
            return None;
        }
        col.checked_mul(self.rows())?.checked_add(row)
    }
}

// Widened to i64 so spans across the whole i32 range cannot overflow
#[inline]
fn axis_len(from: i32, to: i32, by: i32) -> usize {
    if by <= 0 || to < from {
        return 0;
    }
    let steps = (to as i64 - from as i64) / by as i64;
    usize::try_from(steps + 1).unwrap_or(usize::MAX)
}

/// Steps from `from` to `v`, if `v` lands exactly on one
#[inline]
fn axis_offset(from: i32, v: i32, by: i32) -> Option<usize> {
    let d = v as i64 - from as i64;
    if by <= 0 || d < 0 || d % by as i64 != 0 {
        return None;
    }
    usize::try_from(d / by as i64).ok()
}

/// Call `cell(x, z)` for every lattice point, collecting results in lattice order
pub fn grid<T>(lattice: &Lattice, mut cell: impl FnMut(i32, i32) -> T) -> Vec<T> {
    let mut out = Vec::with_capacity(lattice.len());
    for i in 0..lattice.columns() {
        let x = (lattice.from.0 as i64 + i as i64 * lattice.by.0 as i64) as i32;
        for j in 0..lattice.rows() {
            let z = (lattice.from.1 as i64 + j as i64 * lattice.by.1 as i64) as i32;
            out.push(cell(x, z));
        }
    }
    out
}
