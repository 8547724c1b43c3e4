// clock.rs - Frame rate limiter
//
// The browser calls back at its own rate. Wall time is quantized to frames
// at the target rate; only a change of frame number lets a tick through.

pub struct FrameClock {
    fps: f64,
    prev: Option<i64>,
}

impl FrameClock {
    pub fn new(fps: f64) -> Self {
        Self { fps, prev: None }
    }

    #[inline]
    pub fn frame(&self, now_ms: f64) -> i64 {
        (self.fps * now_ms / 1000.0).round() as i64
    }

    /// True when `now_ms` falls in a new frame
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let now = self.frame(now_ms);
        if self.prev == Some(now) {
            return false;
        }
        self.prev = Some(now);
        true
    }
}
