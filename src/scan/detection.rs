//! Detection records and the sources that produce them.

use std::fmt;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::render::{Color, Rect};

/// Classification shown next to a detection box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectionLabel {
    Normal,
    Atypia,
    Malignant,
}

impl DetectionLabel {
    pub const ALL: [DetectionLabel; 3] = [
        DetectionLabel::Normal,
        DetectionLabel::Atypia,
        DetectionLabel::Malignant,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DetectionLabel::Normal => "Normal",
            DetectionLabel::Atypia => "Atypia",
            DetectionLabel::Malignant => "Malignant",
        }
    }

    pub fn color(self) -> Color {
        match self {
            DetectionLabel::Normal => Color::rgb(0x06, 0xb6, 0xd4),
            DetectionLabel::Atypia => Color::rgb(0xf9, 0x73, 0x16),
            DetectionLabel::Malignant => Color::rgb(0xef, 0x44, 0x44),
        }
    }
}

impl fmt::Display for DetectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A labelled bounding box published when a scan completes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionRecord {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label: DetectionLabel,
    /// Confidence in percent
    pub confidence: u8,
}

impl DetectionRecord {
    pub const fn new(x: f32, y: f32, width: f32, height: f32, label: DetectionLabel, confidence: u8) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label,
            confidence,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_xywh(self.x, self.y, self.width, self.height)
    }

    pub fn color(&self) -> Color {
        self.label.color()
    }

    /// Text drawn above the box, e.g. `Atypia 87%`
    pub fn caption(&self) -> String {
        format!("{} {}%", self.label, self.confidence)
    }
}

/// Supplies the records a completed scan reveals
pub trait DetectionSource {
    /// Records for a scan over a canvas of `canvas` size
    fn detections(&mut self, canvas: Vec2) -> Vec<DetectionRecord>;

    /// Number of records every call returns
    fn expected_count(&self) -> usize;
}

/// The fixed scripted result set
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedDetections;

impl CannedDetections {
    pub const RECORDS: [DetectionRecord; 3] = [
        DetectionRecord::new(80.0, 150.0, 60.0, 70.0, DetectionLabel::Normal, 95),
        DetectionRecord::new(250.0, 200.0, 70.0, 75.0, DetectionLabel::Atypia, 87),
        DetectionRecord::new(350.0, 100.0, 55.0, 60.0, DetectionLabel::Normal, 92),
    ];
}

impl DetectionSource for CannedDetections {
    fn detections(&mut self, _canvas: Vec2) -> Vec<DetectionRecord> {
        Self::RECORDS.to_vec()
    }

    fn expected_count(&self) -> usize {
        Self::RECORDS.len()
    }
}

/// Randomly placed boxes with the canned count and size range
pub struct ProceduralDetections {
    rng: StdRng,
    count: usize,
}

impl ProceduralDetections {
    pub fn new(count: usize) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            count,
        }
    }

    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            count,
        }
    }
}

impl Default for ProceduralDetections {
    fn default() -> Self {
        Self::new(CannedDetections::RECORDS.len())
    }
}

impl DetectionSource for ProceduralDetections {
    fn detections(&mut self, canvas: Vec2) -> Vec<DetectionRecord> {
        (0..self.count)
            .map(|_| {
                let width = self.rng.gen_range(55.0..70.0_f32);
                let height = self.rng.gen_range(60.0..75.0_f32);
                // Leave room above for the caption.
                let x = self.rng.gen_range(0.0..(canvas.x - width).max(1.0));
                let y = self.rng.gen_range(20.0..(canvas.y - height).max(21.0));
                let label = match self.rng.gen_range(0..10) {
                    0..=5 => DetectionLabel::Normal,
                    6..=8 => DetectionLabel::Atypia,
                    _ => DetectionLabel::Malignant,
                };
                let confidence = self.rng.gen_range(80..=99);
                DetectionRecord::new(x, y, width, height, label, confidence)
            })
            .collect()
    }

    fn expected_count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_records() {
        let mut source = CannedDetections;
        let records = source.detections(Vec2::new(400.0, 300.0));
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].label, DetectionLabel::Atypia);
        assert_eq!(records[1].confidence, 87);
        assert_eq!(records[1].caption(), "Atypia 87%");
        assert_eq!(records[0].color(), Color::rgb(6, 182, 212));
    }

    #[test]
    fn test_procedural_shape() {
        let mut source = ProceduralDetections::with_seed(3, 42);
        let canvas = Vec2::new(400.0, 300.0);
        for _ in 0..20 {
            let records = source.detections(canvas);
            assert_eq!(records.len(), source.expected_count());
            for record in records {
                assert!(record.x >= 0.0 && record.x + record.width <= canvas.x);
                assert!(record.y >= 20.0 && record.y + record.height <= canvas.y);
                assert!((80..=99).contains(&record.confidence));
            }
        }
    }

    #[test]
    fn test_label_colours() {
        assert_eq!(DetectionLabel::Atypia.color(), Color::rgb(249, 115, 22));
        assert_eq!(DetectionLabel::Malignant.color(), Color::rgb(239, 68, 68));
    }
}
