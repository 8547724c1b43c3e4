// cells.rs - Per-cell rain state
//
// Dense arena, one slot per lattice point, laid out in lattice order.
// Built once; slots are mutated every tick and never removed.

use super::lattice::{Lattice, grid};
use crate::math::Vector;

pub struct Cell {
    pub x: i32,
    pub z: i32,
    /// Spawn point on the top plane
    pub surface: Vector,
    pub droplets: Vec<Vector>,
    /// Ripple radius, 0 = no ripple
    pub wave: f32,
}

pub struct Cells {
    lattice: Lattice,
    cells: Vec<Cell>,
}

impl Cells {
    /// One empty cell per lattice point, surface points at `height`
    pub fn new(lattice: Lattice, height: f32) -> Self {
        let cells = grid(&lattice, |x, z| Cell {
            x,
            z,
            surface: Vector::new(x as f32, height, z as f32),
            droplets: Vec::new(),
            wave: 0.0,
        });
        Self { lattice, cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, x: i32, z: i32) -> Option<&Cell> {
        self.lattice.index(x, z).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: i32, z: i32) -> Option<&mut Cell> {
        self.lattice.index(x, z).map(|i| &mut self.cells[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub fn active_waves(&self) -> usize {
        self.cells.iter().filter(|c| c.wave > 0.0).count()
    }

    pub fn droplet_count(&self) -> usize {
        self.cells.iter().map(|c| c.droplets.len()).sum()
    }
}
