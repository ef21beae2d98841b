use std::time::Duration;

/// Nominal frame time in milliseconds that motion constants are tuned for.
pub const TARGET_FRAME_MS: f32 = 16.7;

/// Frame-rate normalization state.
///
/// Counts frames and, once at least a second has accumulated, refreshes the
/// measured fps and frame time. Pure: callers feed it durations, so the
/// scaling math can be driven from tests without a clock.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    target_frame_ms: f32,
    frame_time_ms: f32,
    fps: u32,
    frames: u32,
    elapsed: Duration,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(TARGET_FRAME_MS)
    }
}

impl FrameTiming {
    /// Start out assuming frames arrive exactly on target.
    pub fn new(target_frame_ms: f32) -> Self {
        Self {
            target_frame_ms,
            frame_time_ms: target_frame_ms,
            fps: (1000.0 / target_frame_ms).round() as u32,
            frames: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Fixed frame time, mostly for tests and headless runs.
    pub fn with_frame_time(target_frame_ms: f32, frame_time_ms: f32) -> Self {
        Self {
            frame_time_ms,
            ..Self::new(target_frame_ms)
        }
    }

    /// Record one finished frame that took `dt`.
    ///
    /// Returns the new fps when the one-second window closes.
    pub fn record(&mut self, dt: Duration) -> Option<u32> {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed < Duration::from_secs(1) {
            return None;
        }

        let fps = ((f64::from(self.frames) / self.elapsed.as_secs_f64()).round() as u32).max(1);
        self.fps = fps;
        self.frame_time_ms = 1000.0 / fps as f32;
        self.frames = 0;
        self.elapsed = Duration::ZERO;
        tracing::trace!(fps, frame_time_ms = self.frame_time_ms, "frame timing updated");
        Some(fps)
    }

    /// Actual over target frame time. Multiply per-frame motion by this.
    pub fn rate(&self) -> f32 {
        self.frame_time_ms / self.target_frame_ms
    }

    pub fn frame_time_ms(&self) -> f32 {
        self.frame_time_ms
    }

    pub fn target_frame_ms(&self) -> f32 {
        self.target_frame_ms
    }

    /// Last measured frames per second.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Window title text in the form "Running at N fps".
    pub fn title(&self) -> String {
        format!("Running at {} fps", self.fps)
    }
}
