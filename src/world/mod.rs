// world/ - Simulation lattice
//
// The grid sampler and the per-cell state it lays out.

mod cells;
mod lattice;

pub use cells::{Cell, Cells};
pub use lattice::{Lattice, grid};
