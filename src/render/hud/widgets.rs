//! Custom HUD widgets for instrument readouts.

use egui::{Color32, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget};

use super::theme::{HudColors, HudTheme, HudTypography};
use crate::scan::DetectionRecord;

/// A horizontal bar filled to `fraction` of its width
pub struct ProgressBar {
    /// Filled fraction in `[0, 1]`
    fraction: f32,
    color: Color32,
    width: f32,
    height: f32,
}

impl ProgressBar {
    pub fn new(fraction: f32) -> Self {
        Self {
            fraction,
            color: HudColors::BAR_FILL,
            width: 160.0,
            height: 8.0,
        }
    }

    pub fn color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }
}

impl Widget for ProgressBar {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::new(self.width, self.height), Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 3.0, HudColors::BAR_BG);

            let fill = self.fraction.clamp(0.0, 1.0);
            if fill > 0.0 {
                let fill_rect = Rect::from_min_max(
                    rect.left_top(),
                    Pos2::new(rect.left() + rect.width() * fill, rect.bottom()),
                );
                painter.rect_filled(fill_rect, 3.0, self.color.gamma_multiply(0.8));
            }

            painter.rect_stroke(rect, 3.0, Stroke::new(1.0, HudColors::BORDER));
        }

        response
    }
}

/// Labeled value display with optional unit and colour
pub struct LabeledValue {
    label: String,
    value: String,
    unit: Option<String>,
    color: Option<Color32>,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            unit: None,
            color: None,
        }
    }

    /// Add unit suffix
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }
}

impl Widget for LabeledValue {
    fn ui(self, ui: &mut Ui) -> Response {
        let response = ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&self.label)
                    .size(HudTypography::LABEL_SIZE)
                    .color(HudColors::TEXT_LABEL),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(ref unit) = self.unit {
                    ui.label(
                        egui::RichText::new(unit)
                            .size(HudTypography::SMALL_SIZE)
                            .color(HudColors::TEXT_SECONDARY),
                    );
                }

                ui.label(
                    egui::RichText::new(&self.value)
                        .size(HudTypography::VALUE_SIZE)
                        .family(egui::FontFamily::Monospace)
                        .color(self.color.unwrap_or(HudColors::TEXT_PRIMARY)),
                );
            });
        });

        response.response
    }
}

/// One scan finding: label dot, name and confidence
pub struct DetectionRow<'a> {
    record: &'a DetectionRecord,
}

impl<'a> DetectionRow<'a> {
    pub fn new(record: &'a DetectionRecord) -> Self {
        Self { record }
    }
}

impl Widget for DetectionRow<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let color = HudTheme::label_color(self.record.label);
        let response = ui.horizontal(|ui| {
            let (dot_rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().circle_filled(dot_rect.center(), 4.0, color);

            ui.label(
                egui::RichText::new(self.record.label.name())
                    .size(HudTypography::TITLE_SIZE)
                    .color(color)
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{}%", self.record.confidence))
                        .size(HudTypography::VALUE_SIZE)
                        .family(egui::FontFamily::Monospace)
                        .color(HudColors::TEXT_PRIMARY),
                );
            });
        });

        response.response
    }
}

/// Section header with subtle line
pub fn section_header(ui: &mut Ui, text: &str) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(HudTypography::LABEL_SIZE)
                .color(HudColors::TEXT_LABEL)
                .strong(),
        );
        ui.add_space(4.0);
        let rect = ui.available_rect_before_wrap();
        ui.painter().line_segment(
            [
                Pos2::new(rect.left(), rect.center().y),
                Pos2::new(rect.right(), rect.center().y),
            ],
            Stroke::new(1.0, HudColors::BORDER),
        );
    });
    ui.add_space(2.0);
}

/// Key-value pair in compact format
pub fn key_value(ui: &mut Ui, key: &str, value: &str, color: Option<Color32>) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(key)
                .size(HudTypography::LABEL_SIZE)
                .color(HudColors::TEXT_LABEL),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(HudTypography::VALUE_SIZE)
                    .family(egui::FontFamily::Monospace)
                    .color(color.unwrap_or(HudColors::TEXT_PRIMARY)),
            );
        });
    });
}
