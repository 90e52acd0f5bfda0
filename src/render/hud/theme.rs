//! HUD theme system - dark "laboratory" theme with cyan accents.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

use crate::render::painter::to_color32;
use crate::scan::{DetectionLabel, ScanPhase};
use crate::state::FrameRateStatus;

/// HUD color palette
pub struct HudColors;

impl HudColors {
    // === Background Colors ===
    /// Deep slate, matches the views' fade colour
    pub const BACKGROUND: Color32 = Color32::from_rgb(15, 23, 42);
    /// Panel background (95% opacity)
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(21, 30, 50, 242);
    pub const PANEL_BG_HOVER: Color32 = Color32::from_rgb(30, 41, 59);

    // === Text Colors ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 235, 240);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 170, 180);
    pub const TEXT_LABEL: Color32 = Color32::from_rgb(110, 120, 128);
    pub const TEXT_DISABLED: Color32 = Color32::from_rgb(80, 85, 90);

    // === Status Colors ===
    /// Cyan accent shared with the particle field
    pub const ACCENT: Color32 = Color32::from_rgb(6, 182, 212);
    pub const SUCCESS: Color32 = Color32::from_rgb(80, 200, 120);
    pub const WARNING: Color32 = Color32::from_rgb(249, 115, 22);
    pub const CRITICAL: Color32 = Color32::from_rgb(239, 68, 68);

    // === UI Element Colors ===
    pub const BAR_BG: Color32 = Color32::from_rgb(30, 35, 45);
    pub const BAR_FILL: Color32 = Color32::from_rgb(255, 107, 53);
    pub const BORDER: Color32 = Color32::from_rgb(50, 55, 65);
}

/// Typography settings
pub struct HudTypography;

impl HudTypography {
    pub const TITLE_SIZE: f32 = 14.0;
    pub const VALUE_SIZE: f32 = 15.0;
    pub const LABEL_SIZE: f32 = 11.0;
    pub const SMALL_SIZE: f32 = 10.0;
}

/// HUD theme configuration
pub struct HudTheme {
    pub panel_rounding: f32,
    pub button_rounding: f32,
    pub panel_padding: f32,
    pub item_spacing: f32,
    pub bar_height: f32,
}

impl Default for HudTheme {
    fn default() -> Self {
        Self {
            panel_rounding: 6.0,
            button_rounding: 4.0,
            panel_padding: 12.0,
            item_spacing: 6.0,
            bar_height: 8.0,
        }
    }
}

impl HudTheme {
    /// Apply theme to egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        let mut visuals = Visuals::dark();

        visuals.panel_fill = HudColors::PANEL_BG;
        visuals.window_fill = HudColors::PANEL_BG;
        visuals.extreme_bg_color = HudColors::BACKGROUND;
        visuals.faint_bg_color = HudColors::PANEL_BG_HOVER;
        visuals.override_text_color = Some(HudColors::TEXT_PRIMARY);

        visuals.widgets.noninteractive.bg_fill = HudColors::PANEL_BG;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, HudColors::TEXT_SECONDARY);
        visuals.widgets.noninteractive.rounding = Rounding::same(self.panel_rounding);

        visuals.widgets.inactive.bg_fill = HudColors::BAR_BG;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, HudColors::TEXT_SECONDARY);
        visuals.widgets.inactive.rounding = Rounding::same(self.button_rounding);

        visuals.widgets.hovered.bg_fill = HudColors::PANEL_BG_HOVER;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, HudColors::TEXT_PRIMARY);
        visuals.widgets.hovered.rounding = Rounding::same(self.button_rounding);

        visuals.widgets.active.bg_fill = HudColors::ACCENT;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, HudColors::TEXT_PRIMARY);

        visuals.selection.bg_fill = HudColors::ACCENT.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, HudColors::ACCENT);

        visuals.window_stroke = Stroke::new(1.0, HudColors::BORDER);
        visuals.window_rounding = Rounding::same(self.panel_rounding);

        style.visuals = visuals;

        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.window_margin = egui::Margin::same(self.panel_padding);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(HudTypography::TITLE_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Body,
            FontId::new(HudTypography::VALUE_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(HudTypography::SMALL_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Monospace,
            FontId::new(HudTypography::VALUE_SIZE, FontFamily::Monospace),
        );

        ctx.set_style(style);
    }

    /// Colour for the frame-rate indicator
    pub fn frame_rate_color(status: FrameRateStatus) -> Color32 {
        match status {
            FrameRateStatus::Smooth => HudColors::SUCCESS,
            FrameRateStatus::Degraded => HudColors::WARNING,
            FrameRateStatus::Poor => HudColors::CRITICAL,
        }
    }

    pub fn scan_phase_color(phase: ScanPhase) -> Color32 {
        match phase {
            ScanPhase::Idle => HudColors::TEXT_SECONDARY,
            ScanPhase::Scanning => HudColors::BAR_FILL,
            ScanPhase::Complete => HudColors::SUCCESS,
        }
    }

    pub fn label_color(label: DetectionLabel) -> Color32 {
        to_color32(label.color(), 1.0)
    }
}
