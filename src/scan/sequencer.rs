//! Timed scan-and-reveal state machine.

use std::time::Duration;

use glam::Vec2;

use super::detection::{CannedDetections, DetectionRecord, DetectionSource, ProceduralDetections};
use crate::clock::IntervalTimer;
use crate::config::{DetectionSourceKind, ScanParameters};

/// Lifecycle of one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning,
    Complete,
}

impl ScanPhase {
    pub fn label(self) -> &'static str {
        match self {
            ScanPhase::Idle => "Ready",
            ScanPhase::Scanning => "Scanning...",
            ScanPhase::Complete => "Analysis complete",
        }
    }
}

/// Sweeps a scan line across the canvas on a fixed interval and publishes
/// detections once it reaches the far edge.
///
/// Results are empty until completion and stay untouched until the next
/// trigger clears them.
pub struct ScanSequencer {
    phase: ScanPhase,
    line: f32,
    canvas: Vec2,
    step: f32,
    timer: IntervalTimer,
    source: Box<dyn DetectionSource>,
    detections: Vec<DetectionRecord>,
    steps_taken: u32,
}

impl ScanSequencer {
    pub fn new(params: &ScanParameters) -> Self {
        let source: Box<dyn DetectionSource> = match params.detection_source {
            DetectionSourceKind::Canned => Box::new(CannedDetections),
            DetectionSourceKind::Procedural => Box::new(ProceduralDetections::default()),
        };
        Self::with_source(params, source)
    }

    pub fn with_source(params: &ScanParameters, source: Box<dyn DetectionSource>) -> Self {
        Self {
            phase: ScanPhase::Idle,
            line: 0.0,
            canvas: Vec2::new(params.canvas_width, params.canvas_height),
            step: params.step,
            timer: IntervalTimer::new(Duration::from_millis(params.interval_ms)),
            source,
            detections: Vec::new(),
            steps_taken: 0,
        }
    }

    /// Start a scan. Returns `false` and changes nothing while one is running.
    pub fn trigger(&mut self) -> bool {
        if self.phase == ScanPhase::Scanning {
            log::debug!("Scan already running, trigger ignored");
            return false;
        }
        self.detections.clear();
        self.line = 0.0;
        self.steps_taken = 0;
        self.phase = ScanPhase::Scanning;
        self.timer.arm();
        log::info!("Scan started");
        true
    }

    /// Feed elapsed frame time; runs one step per completed interval
    pub fn advance(&mut self, delta: Duration) {
        let fires = self.timer.advance(delta);
        for _ in 0..fires {
            if !self.step() {
                break;
            }
        }
    }

    /// One timer fire. Returns `false` once the scan is no longer running.
    pub fn step(&mut self) -> bool {
        if self.phase != ScanPhase::Scanning {
            return false;
        }
        self.line += self.step;
        self.steps_taken += 1;
        if self.line >= self.canvas.x {
            self.complete();
            return false;
        }
        true
    }

    fn complete(&mut self) {
        self.timer.cancel();
        self.phase = ScanPhase::Complete;
        self.detections = self.source.detections(self.canvas);
        log::info!(
            "Scan complete after {} steps: {} detections",
            self.steps_taken,
            self.detections.len()
        );
    }

    /// Cancel any pending timer. Idempotent.
    pub fn teardown(&mut self) {
        self.timer.cancel();
        if self.phase == ScanPhase::Scanning {
            self.phase = ScanPhase::Idle;
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn is_scanning(&self) -> bool {
        self.phase == ScanPhase::Scanning
    }

    pub fn scan_line(&self) -> f32 {
        self.line
    }

    /// Fraction of the sweep covered, in `[0, 1]`
    pub fn progress(&self) -> f32 {
        if self.canvas.x > 0.0 {
            (self.line / self.canvas.x).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    pub fn detections(&self) -> &[DetectionRecord] {
        &self.detections
    }

    pub fn expected_count(&self) -> usize {
        self.source.expected_count()
    }

    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas
    }

    pub fn timer_armed(&self) -> bool {
        self.timer.is_armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sweep_completes() {
        let mut scan = ScanSequencer::new(&ScanParameters::default());
        assert!(scan.trigger());
        while scan.step() {}
        assert_eq!(scan.phase(), ScanPhase::Complete);
        assert_eq!(scan.steps_taken(), 80);
        assert_eq!(scan.detections().len(), 3);
        assert!(!scan.timer_armed());
    }

    #[test]
    fn test_results_hidden_until_complete() {
        let mut scan = ScanSequencer::new(&ScanParameters::default());
        scan.trigger();
        scan.advance(Duration::from_millis(400));
        assert!(scan.is_scanning());
        assert!(scan.detections().is_empty());
        assert!((scan.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_teardown_stops_timer() {
        let mut scan = ScanSequencer::new(&ScanParameters::default());
        scan.trigger();
        scan.teardown();
        scan.teardown();
        scan.advance(Duration::from_secs(5));
        assert_eq!(scan.scan_line(), 0.0);
        assert_eq!(scan.phase(), ScanPhase::Idle);
    }
}
