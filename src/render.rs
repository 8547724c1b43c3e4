// render.rs - Drawing surfaces
//
// The scene only speaks `Surface`. `Encoder` records every call into a flat
// f32 buffer that the page reads through `output_ptr`/`output_len` and
// replays onto its canvas.
//
// Command encoding (one f32 per field):
//   0 CLEAR    w h
//   1 LINE     x0 y0 x1 y1 color width opacity
//   2 CIRCLE   x y radius stroke fill opacity
//   3 POLYGON  n x0 y0 .. xn yn stroke fill width opacity
//
// Colors are 0xRRGGBB stored in an f32 (exact below 2^24); -1 = no color.

use serde::{Deserialize, Serialize};

use crate::math::Point;

pub const OP_CLEAR: f32 = 0.0;
pub const OP_LINE: f32 = 1.0;
pub const OP_CIRCLE: f32 = 2.0;
pub const OP_POLYGON: f32 = 3.0;

const NO_COLOR: f32 = -1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// CSS hex, e.g. `#7fc8f8`
    pub fn css(self) -> String {
        format!("#{:06x}", self.0 & 0xff_ffff)
    }

    #[inline]
    fn encode(c: Option<Color>) -> f32 {
        c.map_or(NO_COLOR, |c| (c.0 & 0xff_ffff) as f32)
    }
}

/// 2D drawing primitives the scene needs
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn line(&mut self, from: Point, to: Point, color: Color, width: f32, opacity: f32);
    fn circle(&mut self, center: Point, radius: f32, stroke: Option<Color>, fill: Option<Color>, opacity: f32);
    fn polygon(&mut self, points: &[Point], stroke: Option<Color>, fill: Option<Color>, width: f32, opacity: f32);
}

pub struct Encoder {
    out: Vec<f32>,
}

impl Encoder {
    pub fn new() -> Self {
        Self { out: Vec::with_capacity(16 * 1024) }
    }

    pub fn commands(&self) -> &[f32] {
        &self.out
    }

    pub fn ptr(&self) -> *const f32 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Encoder {
    /// A clear starts a new frame, so it also drops anything recorded before it
    fn clear(&mut self, width: f32, height: f32) {
        self.out.clear();
        self.out.extend_from_slice(&[OP_CLEAR, width, height]);
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: f32, opacity: f32) {
        self.out.extend_from_slice(&[
            OP_LINE,
            from.x, from.y,
            to.x, to.y,
            Color::encode(Some(color)),
            width,
            opacity,
        ]);
    }

    fn circle(&mut self, center: Point, radius: f32, stroke: Option<Color>, fill: Option<Color>, opacity: f32) {
        self.out.extend_from_slice(&[
            OP_CIRCLE,
            center.x, center.y,
            radius,
            Color::encode(stroke),
            Color::encode(fill),
            opacity,
        ]);
    }

    fn polygon(&mut self, points: &[Point], stroke: Option<Color>, fill: Option<Color>, width: f32, opacity: f32) {
        self.out.push(OP_POLYGON);
        self.out.push(points.len() as f32);
        for p in points {
            self.out.push(p.x);
            self.out.push(p.y);
        }
        self.out.extend_from_slice(&[Color::encode(stroke), Color::encode(fill), width, opacity]);
    }
}
