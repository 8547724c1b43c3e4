use wasm_bindgen::prelude::*;

// ============================================================================
// RIPPLE WORLD - Orthographic rain over a rotating water plane
// ============================================================================

pub mod camera;
pub mod config;
pub mod error;
pub mod math;
pub mod noise;
pub mod render;
pub mod sim;
pub mod world;

#[cfg(target_arch = "wasm32")]
mod web;

pub use camera::{Camera, CameraSettings};
pub use config::Config;
pub use error::ConfigError;
pub use math::{Matrix, Point, Vector};
pub use crate::noise::NoiseField;
pub use render::{Color, Encoder, Surface};
pub use sim::{FrameClock, Simulation};
pub use world::{Cell, Cells, Lattice, grid};

/// Page-facing handle. Each tick is recorded into a command buffer the page
/// replays onto its canvas (see `render` for the encoding).
#[wasm_bindgen]
pub struct RippleWorld {
    sim: Simulation,
    // Only ever borrowed by `tick`
    view: Matrix,
    clock: FrameClock,
    encoder: Encoder,
}

#[wasm_bindgen]
impl RippleWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32, seed: u32) -> Self {
        Self::from_config(Config::default(), w, h, seed)
    }

    /// Build from a JSON config; fields left out keep their defaults
    pub fn with_config(w: u32, h: u32, seed: u32, json: &str) -> Result<RippleWorld, JsValue> {
        let config = Config::from_json(json).map_err(|e| {
            log::warn!("rejected config: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
        Ok(Self::from_config(config, w, h, seed))
    }

    /// Tick if `now_ms` starts a new frame. Returns whether it did.
    pub fn step(&mut self, now_ms: f64) -> bool {
        if !self.clock.advance(now_ms) {
            return false;
        }
        self.tick();
        true
    }

    pub fn tick(&mut self) {
        self.sim.tick(&mut self.view, &mut self.encoder);
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        log::debug!("resize {}x{}", w, h);
        self.sim.resize(w as f32, h as f32);
    }

    // Accessors for WASM
    pub fn output_ptr(&self) -> *const f32 { self.encoder.ptr() }
    pub fn output_len(&self) -> usize { self.encoder.len() }
    pub fn width(&self) -> u32 { self.sim.width() as u32 }
    pub fn height(&self) -> u32 { self.sim.height() as u32 }
    pub fn time(&self) -> f64 { self.sim.time() }
    pub fn seed(&self) -> u32 { self.sim.seed() }
    pub fn active_waves(&self) -> usize { self.sim.cells().active_waves() }
    pub fn droplet_count(&self) -> usize { self.sim.cells().droplet_count() }
}

impl RippleWorld {
    /// `config` must already be valid
    pub fn from_config(config: Config, w: u32, h: u32, seed: u32) -> Self {
        log::info!("ripple world {}x{} seed {:#010x}", w, h, seed);
        Self {
            view: Simulation::initial_view(&config),
            clock: FrameClock::new(config.fps),
            sim: Simulation::new(config, w as f32, h as f32, seed),
            encoder: Encoder::new(),
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn commands(&self) -> &[f32] {
        self.encoder.commands()
    }
}
