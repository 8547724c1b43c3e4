//! End-to-end scenarios for the rain scene.
//!
//! Tests cover:
//! - Grid layout before the first tick
//! - Reproducibility of whole runs for a fixed seed
//! - Droplet descent and removal
//! - Ripple lifecycle invariants
//! - Draw calls issued per frame
//! - The page-facing handle and its frame limiter

use ripple_engine::sim::{droplet, wave};
use ripple_engine::{
    Cells, Color, Config, Encoder, Lattice, Matrix, NoiseField, Point, RippleWorld, Simulation, Surface,
    Vector,
};

// =============================================================================
// HELPERS
// =============================================================================

#[derive(Default)]
struct Recorder {
    clears: usize,
    lines: usize,
    strokes: usize,
    dots: usize,
    polygons: usize,
}

impl Surface for Recorder {
    fn clear(&mut self, _: f32, _: f32) {
        self.clears += 1;
    }

    fn line(&mut self, _: Point, _: Point, _: Color, width: f32, opacity: f32) {
        assert_eq!(width, 1.0);
        assert!((0.0..=0.3 + 1e-6).contains(&opacity), "line opacity {opacity}");
        self.lines += 1;
    }

    fn circle(&mut self, _: Point, radius: f32, stroke: Option<Color>, fill: Option<Color>, opacity: f32) {
        assert!(radius > 0.0);
        assert!(opacity >= 0.0 && opacity <= 1.0);
        match fill {
            Some(_) => self.dots += 1,
            None => {
                assert!(stroke.is_some());
                self.strokes += 1;
            }
        }
    }

    fn polygon(&mut self, points: &[Point], _: Option<Color>, _: Option<Color>, _: f32, _: f32) {
        assert_eq!(points.len(), 4);
        self.polygons += 1;
    }
}

fn simulation(seed: u32) -> (Simulation, Matrix) {
    let config = Config::default();
    let view = Simulation::initial_view(&config);
    (Simulation::new(config, 800.0, 600.0, seed), view)
}

fn run(seed: u32, ticks: usize) -> (Simulation, Vec<usize>) {
    let (mut sim, mut view) = simulation(seed);
    let mut surface = Encoder::new();
    let waves = (0..ticks)
        .map(|_| {
            sim.tick(&mut view, &mut surface);
            sim.cells().active_waves()
        })
        .collect();
    (sim, waves)
}

// =============================================================================
// GRID
// =============================================================================

#[test]
fn default_bounds_give_441_empty_cells() {
    let (sim, _) = simulation(1);
    let cells = sim.cells();
    assert_eq!(cells.len(), 441);
    assert!(cells.iter().all(|c| c.droplets.is_empty() && c.wave == 0.0));
    for x in -10..=10 {
        for z in -10..=10 {
            let cell = cells.get(x, z).expect("every lattice point has a cell");
            assert_eq!(cell.surface, Vector::new(x as f32, 20.0, z as f32));
        }
    }
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn same_seed_same_waves() {
    let (a, waves_a) = run(0xC0FFEE, 100);
    let (b, waves_b) = run(0xC0FFEE, 100);
    assert_eq!(waves_a, waves_b);
    assert_eq!(a.cells().droplet_count(), b.cells().droplet_count());
    for (ca, cb) in a.cells().iter().zip(b.cells().iter()) {
        assert_eq!(ca.wave, cb.wave);
        assert_eq!(ca.droplets, cb.droplets);
    }
}

#[test]
fn same_seed_same_drawing() {
    let (mut a, mut va) = simulation(99);
    let (mut b, mut vb) = simulation(99);
    let (mut ea, mut eb) = (Encoder::new(), Encoder::new());
    for _ in 0..60 {
        a.tick(&mut va, &mut ea);
        b.tick(&mut vb, &mut eb);
        assert_eq!(ea.commands(), eb.commands());
    }
}

#[test]
fn rain_actually_falls() {
    let (sim, waves) = run(7, 200);
    assert!(sim.cells().droplet_count() > 0);
    assert!(waves.iter().any(|&n| n > 0));
}

// =============================================================================
// DROPLETS
// =============================================================================

#[test]
fn droplets_stay_inside_the_column() {
    let (mut sim, mut view) = simulation(12);
    let mut surface = Encoder::new();
    let b = sim.config().bounds;
    for _ in 0..150 {
        sim.tick(&mut view, &mut surface);
        for cell in sim.cells().iter() {
            for d in &cell.droplets {
                assert!(d.y > b.ymin && d.y <= b.ymax);
                assert_eq!((d.x, d.z), (cell.x as f32, cell.z as f32));
            }
        }
    }
}

#[test]
fn single_droplet_reaches_the_floor_in_bounded_ticks() {
    let config = Config::default();
    let b = config.bounds;
    let mut cells = Cells::new(Lattice::unit((0, 0), (0, 0)), b.ymax);
    let cell = cells.get_mut(0, 0).unwrap();
    cell.droplets.push(cell.surface);

    let bound = droplet::max_fall_ticks(&b, config.gravity);
    let project = |p: Vector| Point::new(p.x, p.y);
    let mut surface = Recorder::default();

    let mut last = b.ymax;
    let mut ticks = 0;
    while let Some(d) = cell.droplets.first().copied() {
        assert!(d.y <= last);
        last = d.y;
        droplet::advance(cell, &config, &project, &mut surface);
        ticks += 1;
        assert!(ticks <= bound, "still falling after {ticks} ticks");
    }
    assert_eq!(surface.lines, ticks);
    assert_eq!(cell.wave, 1.0);
}

// =============================================================================
// WAVES
// =============================================================================

#[test]
fn waves_are_zero_or_on_the_step_ladder() {
    let (mut sim, mut view) = simulation(31);
    let mut surface = Encoder::new();
    let c = sim.config().clone();
    for _ in 0..400 {
        sim.tick(&mut view, &mut surface);
        for cell in sim.cells().iter() {
            let r = cell.wave;
            assert!(r >= 0.0);
            if r > 0.0 {
                assert!(r >= 1.0 && r <= c.radius_threshold + c.radial_step);
                let steps = (r - 1.0) / c.radial_step;
                assert!((steps - steps.round()).abs() < 1e-4);
            }
        }
    }
}

#[test]
fn wave_grows_each_tick_until_reset() {
    let config = Config::default();
    let mut cells = Cells::new(Lattice::unit((2, 3), (2, 3)), config.bounds.ymax);
    let cell = cells.get_mut(2, 3).unwrap();
    cell.wave = 1.0;
    let project = |p: Vector| Point::new(p.x, p.z);
    let mut surface = Recorder::default();

    let mut prev = cell.wave;
    loop {
        wave::advance(cell, &config, &project, &mut surface);
        if cell.wave == 0.0 {
            assert!(prev > config.radius_threshold);
            break;
        }
        assert_eq!(cell.wave - prev, config.radial_step);
        prev = cell.wave;
    }
    assert_eq!(surface.strokes, 29);
}

// =============================================================================
// DRAWING
// =============================================================================

#[test]
fn one_clear_and_one_plane_per_frame() {
    let (mut sim, mut view) = simulation(4);
    let mut surface = Recorder::default();
    for i in 1..=30 {
        sim.tick(&mut view, &mut surface);
        assert_eq!(surface.clears, i);
        assert_eq!(surface.polygons, i);
    }
}

#[test]
fn draw_calls_follow_cell_state() {
    let (mut sim, mut view) = simulation(17);
    let mut warmup = Encoder::new();
    for _ in 0..80 {
        sim.tick(&mut view, &mut warmup);
    }

    let c = sim.config().clone();
    let f = c.frequency;
    let t = sim.time() * f;
    let field = NoiseField::new(sim.seed());
    let dry = sim
        .cells()
        .iter()
        .filter(|cell| field.sample(cell.x as f64 * f, cell.z as f64 * f, t) > 0.0)
        .count();
    let falling = sim.cells().droplet_count();
    assert!(falling > 0);

    let mut surface = Recorder::default();
    sim.tick(&mut view, &mut surface);

    // A fresh droplet sits exactly one step below its spawn point; older ones are lower
    let spawned: usize = sim
        .cells()
        .iter()
        .map(|cell| {
            let first = droplet::fall(cell.surface, &c.bounds, c.gravity);
            cell.droplets.iter().filter(|d| d.y == first.y).count()
        })
        .sum();

    assert_eq!(surface.dots, dry);
    assert_eq!(surface.lines, falling + spawned);
    // Every ripple drawn this tick grew and is still running; every other cell is at rest
    assert_eq!(surface.strokes, sim.cells().active_waves());
}

// =============================================================================
// PAGE HANDLE
// =============================================================================

#[test]
fn step_is_rate_limited() {
    let mut world = RippleWorld::new(640, 480, 5);
    assert!(world.step(1000.0));
    let t = world.time();
    assert!(!world.step(1005.0));
    assert_eq!(world.time(), t);
    assert!(world.step(1020.0));
    assert!(world.time() > t);
}

#[test]
fn output_buffer_holds_the_frame() {
    let mut world = RippleWorld::new(640, 480, 5);
    world.tick();
    assert_eq!(world.output_len(), world.commands().len());
    assert_eq!(&world.commands()[..3], &[0.0, 640.0, 480.0]);
}

#[test]
fn resize_changes_the_clear() {
    let mut world = RippleWorld::new(640, 480, 5);
    world.resize(1024, 768);
    world.tick();
    assert_eq!((world.width(), world.height()), (1024, 768));
    assert_eq!(&world.commands()[..3], &[0.0, 1024.0, 768.0]);
}

#[test]
fn custom_config_shrinks_the_grid() {
    let config = Config::from_json(
        r#"{ "bounds": { "xmin": -2, "ymin": -4.0, "zmin": -1, "xmax": 2, "ymax": 4.0, "zmax": 1 } }"#,
    )
    .unwrap();
    let world = RippleWorld::from_config(config, 100, 100, 1);
    assert_eq!(world.simulation().cells().len(), 15);
}
