// config.rs - Scene tuning
//
// Every constant the scene reads. Changing values changes the look, never
// the structure. Defaults reproduce the reference scene.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::Vector;
use crate::render::Color;
use crate::world::Lattice;

const ZOOM: f32 = 0.1;
const FPS: f64 = 60.0;

const FREQUENCY: f64 = 0.1;

const TIME_STEP: f64 = 0.2;
const TIME_THRESHOLD: f64 = 1_000_000.0;

const DROPLET_THRESHOLDS: [usize; 3] = [4, 5, 6];

const RADIAL_STEP: f32 = 0.5;
const RADIUS_THRESHOLD: f32 = 15.0;

const GRAVITY: f32 = 0.022;

// Degrees
const ROTATION_STEP: f32 = 0.1;
const TILT_X: f32 = 50.0;
const TILT_Y: f32 = 40.0;

const PLANE_OPACITY: f32 = 0.3;

// 256 x 256 cells
const MAX_CELLS: usize = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub xmin: i32,
    pub ymin: f32,
    pub zmin: i32,
    pub xmax: i32,
    pub ymax: f32,
    pub zmax: i32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { xmin: -10, ymin: -20.0, zmin: -10, xmax: 10, ymax: 20.0, zmax: 10 }
    }
}

impl Bounds {
    /// Unit lattice over the x/z extent
    pub fn lattice(&self) -> Lattice {
        Lattice::unit((self.xmin, self.zmin), (self.xmax, self.zmax))
    }

    /// Corners of the translucent plane drawn over the rain, at ymax
    pub fn plane(&self) -> [Vector; 4] {
        let (x0, x1) = (self.xmin as f32 - 1.0, self.xmax as f32);
        let (z0, z1) = (self.zmin as f32 - 1.0, self.zmax as f32);
        [
            Vector::new(x0, self.ymax, z0),
            Vector::new(x0, self.ymax, z1),
            Vector::new(x1, self.ymax, z1),
            Vector::new(x1, self.ymax, z0),
        ]
    }
}

/// Initial view orientation, degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    pub x: f32,
    pub y: f32,
}

impl Default for Tilt {
    fn default() -> Self {
        Self { x: TILT_X, y: TILT_Y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub water: Color,
    pub dot: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x0b, 0x10, 0x1a),
            water: Color::rgb(0x7f, 0xc8, 0xf8),
            dot: Color::rgb(0x3a, 0x4a, 0x63),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub zoom: f32,
    pub fps: f64,
    pub frequency: f64,
    pub time_step: f64,
    pub time_threshold: f64,
    pub bounds: Bounds,
    pub droplet_thresholds: Vec<usize>,
    pub radial_step: f32,
    pub radius_threshold: f32,
    pub gravity: f32,
    pub rotation_step: f32,
    pub tilt: Tilt,
    pub plane_opacity: f32,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zoom: ZOOM,
            fps: FPS,
            frequency: FREQUENCY,
            time_step: TIME_STEP,
            time_threshold: TIME_THRESHOLD,
            bounds: Bounds::default(),
            droplet_thresholds: DROPLET_THRESHOLDS.to_vec(),
            radial_step: RADIAL_STEP,
            radius_threshold: RADIUS_THRESHOLD,
            gravity: GRAVITY,
            rotation_step: ROTATION_STEP,
            tilt: Tilt::default(),
            plane_opacity: PLANE_OPACITY,
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Parse and validate; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.bounds;
        if !(self.zoom > 0.0) {
            return Err(ConfigError::Invalid("zoom must be positive"));
        }
        if !(self.fps > 0.0) {
            return Err(ConfigError::Invalid("fps must be positive"));
        }
        if !(self.time_step > 0.0) {
            return Err(ConfigError::Invalid("time_step must be positive"));
        }
        if !(self.radial_step > 0.0) {
            return Err(ConfigError::Invalid("radial_step must be positive"));
        }
        if !(self.gravity > 0.0) {
            return Err(ConfigError::Invalid("gravity must be positive"));
        }
        if b.xmin > b.xmax || b.zmin > b.zmax || !(b.ymin < b.ymax) {
            return Err(ConfigError::Invalid("bounds must be ordered min < max"));
        }
        if b.lattice().len() > MAX_CELLS {
            return Err(ConfigError::Invalid("bounds too large"));
        }
        if self.droplet_thresholds.is_empty() {
            return Err(ConfigError::Invalid("droplet_thresholds must not be empty"));
        }
        Ok(())
    }
}
