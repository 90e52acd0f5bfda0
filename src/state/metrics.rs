//! Frame statistics for HUD display and headless diagnostics.

use crate::clock::FrameTick;

/// Rendering health indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameRateStatus {
    /// At or near the display refresh rate (green)
    #[default]
    Smooth,
    /// Noticeably below refresh rate (yellow)
    Degraded,
    /// Animation visibly stutters (red)
    Poor,
}

impl FrameRateStatus {
    pub fn from_fps(fps: f32) -> Self {
        if fps >= 55.0 {
            FrameRateStatus::Smooth
        } else if fps >= 30.0 {
            FrameRateStatus::Degraded
        } else {
            FrameRateStatus::Poor
        }
    }
}

/// Running statistics of the active view's frame loop
#[derive(Debug, Clone, Default)]
pub struct FrameMetrics {
    /// Ticks since the view activated
    pub frames: u64,
    /// Exponentially smoothed frames per second
    pub fps: f32,
    /// Seconds since the view activated
    pub elapsed_sec: f64,
    /// Live entities in the active view
    pub entity_count: usize,
    /// Connections drawn on the last frame
    pub connection_count: usize,
}

impl FrameMetrics {
    /// Smoothing weight given to the newest frame time
    const FPS_SMOOTHING: f32 = 0.1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one tick into the running statistics
    pub fn record(&mut self, tick: &FrameTick) {
        self.frames = tick.index + 1;
        self.elapsed_sec = tick.elapsed.as_secs_f64();

        let dt = tick.delta.as_secs_f32();
        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.fps = if self.fps == 0.0 {
                instant_fps
            } else {
                self.fps + (instant_fps - self.fps) * Self::FPS_SMOOTHING
            };
        }
    }

    pub fn status(&self) -> FrameRateStatus {
        FrameRateStatus::from_fps(self.fps)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
