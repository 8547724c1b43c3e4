// wave.rs - Ripples on the floor
//
// A ripple is just a radius. It grows by a fixed step while live and snaps
// back to 0 once it has grown past the limit.

use crate::config::Config;
use crate::math::{Point, Vector, remap};
use crate::render::Surface;
use crate::world::Cell;

const RIPPLE_OPACITY: f32 = 0.4;

#[inline]
pub fn ripple_opacity(radius: f32, limit: f32) -> f32 {
    RIPPLE_OPACITY - remap(radius, [1.0, limit + 1.0], [0.0, RIPPLE_OPACITY])
}

pub fn advance<S, P>(cell: &mut Cell, config: &Config, project: &P, surface: &mut S)
where
    S: Surface,
    P: Fn(Vector) -> Point,
{
    if cell.wave > config.radius_threshold {
        cell.wave = 0.0;
    }
    if cell.wave <= 0.0 {
        return;
    }

    let center = project(Vector::new(cell.x as f32, config.bounds.ymin, cell.z as f32));
    surface.circle(
        center,
        cell.wave,
        Some(config.palette.water),
        None,
        ripple_opacity(cell.wave, config.radius_threshold),
    );
    cell.wave += config.radial_step;
}
