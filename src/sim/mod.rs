// sim/ - Rain simulation
//
// One `Simulation` owns every cell, the noise field, the threshold RNG and
// the time counter. The view matrix belongs to the caller and is handed in
// by `&mut` each tick; nothing else ever touches it.

mod clock;
pub mod droplet;
pub mod wave;

pub use clock::FrameClock;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::camera::{Camera, CameraSettings};
use crate::config::Config;
use crate::math::{Matrix, Point, Vector, sample, to_radians};
use crate::noise::NoiseField;
use crate::render::Surface;
use crate::world::Cells;

const DOT_RADIUS: f32 = 2.0;
const PLANE_WIDTH: f32 = 1.0;

/// Rain simulation world
pub struct Simulation {
    config: Config,

    // Screen dimensions
    w: f32,
    h: f32,
    camera: Camera,

    cells: Cells,
    noise: NoiseField,
    rng: StdRng,

    time: f64,
}

impl Simulation {
    /// `config` is trusted; validate host input with `Config::validate` first
    pub fn new(config: Config, w: f32, h: f32, seed: u32) -> Self {
        let b = config.bounds;
        let cells = Cells::new(b.lattice(), b.ymax);
        log::debug!("simulation: {} cells, seed {:#010x}, {}x{}", cells.len(), seed, w, h);

        Self {
            camera: camera(&config, w, h),
            config,
            w,
            h,
            cells,
            noise: NoiseField::new(seed),
            rng: StdRng::seed_from_u64(seed as u64),
            time: 0.0,
        }
    }

    /// The starting orientation for the view matrix
    pub fn initial_view(config: &Config) -> Matrix {
        let mut view = Matrix::identity();
        view.rot_x(to_radians(config.tilt.x)).rot_y(to_radians(config.tilt.y));
        view
    }

    /// New viewport; cell state carries over
    pub fn resize(&mut self, w: f32, h: f32) {
        self.w = w;
        self.h = h;
        self.camera = camera(&self.config, w, h);
    }

    /// Advance one frame and redraw everything onto `surface`
    pub fn tick<S: Surface>(&mut self, view: &mut Matrix, surface: &mut S) {
        let Self { config, w, h, camera, cells, noise, rng, time } = self;

        surface.clear(*w, *h);

        view.rot_y(to_radians(config.rotation_step));
        let view = &*view;
        let project = |p: Vector| camera.project(p.transform(view));

        let f = config.frequency;
        let t = *time * f;
        let dot = config.palette.dot;

        for cell in cells.iter_mut() {
            let distortion = noise.sample(cell.x as f64 * f, cell.z as f64 * f, t);
            let max_droplets = sample(&config.droplet_thresholds, rng).unwrap_or(0);

            if distortion <= 0.0 && cell.droplets.len() < max_droplets {
                cell.droplets.push(cell.surface);
            }

            droplet::advance(cell, config, &project, surface);
            wave::advance(cell, config, &project, surface);

            if distortion > 0.0 {
                surface.circle(project(cell.surface), DOT_RADIUS, Some(dot), Some(dot), 1.0);
            }
        }

        let plane: [Point; 4] = config.bounds.plane().map(project);
        surface.polygon(&plane, None, Some(config.palette.background), PLANE_WIDTH, config.plane_opacity);

        if *time > config.time_threshold {
            *time = 0.0;
        }
        *time += config.time_step;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn width(&self) -> f32 {
        self.w
    }

    pub fn height(&self) -> f32 {
        self.h
    }

    pub fn seed(&self) -> u32 {
        self.noise.seed()
    }
}

fn camera(config: &Config, w: f32, h: f32) -> Camera {
    Camera::new(CameraSettings {
        position: Vector::zero(),
        direction: Vector::new(0.0, 0.0, -1.0),
        up: Vector::new(0.0, 1.0, 0.0),
        width: w,
        height: h,
        zoom: config.zoom,
    })
}
