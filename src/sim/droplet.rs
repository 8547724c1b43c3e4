// droplet.rs - Falling rain droplets
//
// Droplets fall faster the lower they get. Each tick draws a streak from the
// old to the new position, may start the cell's ripple on the way past the
// floor, and drops the droplet once it is no longer above the floor.

use crate::config::{Bounds, Config};
use crate::math::{Point, Vector, remap};
use crate::render::Surface;
use crate::world::Cell;

const TRAIL_WIDTH: f32 = 1.0;
const TRAIL_OPACITY: f32 = 0.3;

/// Position after one tick of falling
#[inline]
pub fn fall(droplet: Vector, bounds: &Bounds, gravity: f32) -> Vector {
    let drop_index = (bounds.ymax - bounds.ymin) - droplet.y + bounds.ymax + 1.0;
    droplet.add(Vector::new(0.0, -drop_index * gravity, 0.0))
}

/// Streaks fade out as they near the top plane
#[inline]
pub fn trail_opacity(y: f32, bounds: &Bounds) -> f32 {
    TRAIL_OPACITY - remap(y, [bounds.ymin, bounds.ymax + 2.0], [0.0, TRAIL_OPACITY])
}

/// Upper bound on ticks for a droplet released at ymax to leave the scene
pub fn max_fall_ticks(bounds: &Bounds, gravity: f32) -> usize {
    // Slowest step is the first one, taken at ymax
    let slowest = (bounds.ymax - bounds.ymin + 1.0) * gravity;
    ((bounds.ymax - bounds.ymin) / slowest).ceil() as usize
}

/// Move every droplet in `cell` one tick, drawing its streak
pub fn advance<S, P>(cell: &mut Cell, config: &Config, project: &P, surface: &mut S)
where
    S: Surface,
    P: Fn(Vector) -> Point,
{
    let b = &config.bounds;
    let water = config.palette.water;
    let mut wave = cell.wave;

    cell.droplets.retain_mut(|droplet| {
        let next = fall(*droplet, b, config.gravity);
        surface.line(project(*droplet), project(next), water, TRAIL_WIDTH, trail_opacity(droplet.y, b));

        if next.y < b.ymin + 1.0 && wave == 0.0 {
            wave = 1.0;
        }

        *droplet = next;
        next.y > b.ymin
    });

    cell.wave = wave;
}
