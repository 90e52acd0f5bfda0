//! HUD panel definitions and rendering.

use egui::{Align2, Context, Window};

use super::state::HudState;
use super::theme::{HudColors, HudTheme, HudTypography};
use super::widgets::{key_value, section_header, DetectionRow, LabeledValue, ProgressBar};
use super::{HudAction, HudFrame};
use crate::scan::{DetectionRecord, ScanPhase};
use crate::view::{ReadoutDetail, ViewCommand, ViewKind};
use crate::viewport::{StainMode, FOCUS_MAX};

/// Render all HUD panels, collecting what the user asked for into `actions`
pub fn render_panels(ctx: &Context, state: &HudState, frame: &HudFrame<'_>, actions: &mut Vec<HudAction>) {
    if !state.hud_enabled {
        return;
    }

    if state.show_view_panel {
        render_view_panel(ctx, frame, actions);
    }

    if state.show_controls_panel {
        if let Some(readout) = frame.readout {
            match &readout.detail {
                ReadoutDetail::Microscope {
                    focus,
                    zoom,
                    pan,
                    stain,
                    blur,
                } => {
                    let controls = MicroscopeControls {
                        focus: *focus,
                        zoom: *zoom,
                        pan: *pan,
                        stain: *stain,
                        blur: *blur,
                    };
                    render_microscope_panel(ctx, &controls, frame, actions);
                }
                ReadoutDetail::Scan {
                    phase,
                    scan_line,
                    progress,
                    detections,
                } => render_scan_panel(ctx, *phase, *scan_line, *progress, detections, actions),
                ReadoutDetail::None => {}
            }
        }
    }

    if state.show_help {
        render_help_overlay(ctx);
    }
}

/// View selector and frame statistics (top-left)
fn render_view_panel(ctx: &Context, frame: &HudFrame<'_>, actions: &mut Vec<HudAction>) {
    Window::new("CYTOSCOPE")
        .anchor(Align2::LEFT_TOP, [12.0, 12.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(true)
        .show(ctx, |ui| {
            ui.set_min_width(160.0);

            section_header(ui, "VIEW");
            for (index, kind) in ViewKind::ALL.into_iter().enumerate() {
                let selected = frame.active == Some(kind);
                let text = format!("{}  {}", index + 1, kind.title());
                if ui.selectable_label(selected, text).clicked() && !selected {
                    actions.push(HudAction::SwitchView(kind));
                }
            }

            section_header(ui, "FRAME");
            let metrics = frame.metrics;
            let fps_color = HudTheme::frame_rate_color(metrics.status());
            key_value(ui, "FPS", &format!("{:.0}", metrics.fps), Some(fps_color));
            key_value(ui, "Frames", &metrics.frames.to_string(), None);

            let time_str = if metrics.elapsed_sec < 60.0 {
                format!("{:.1} s", metrics.elapsed_sec)
            } else {
                format!("{:.1} min", metrics.elapsed_sec / 60.0)
            };
            key_value(ui, "Running", &time_str, None);

            if let Some(readout) = frame.readout {
                ui.add(LabeledValue::new("Entities", readout.entity_count.to_string()));
                if readout.connection_count > 0 {
                    ui.add(
                        LabeledValue::new("Links", readout.connection_count.to_string()).color(HudColors::ACCENT),
                    );
                }
                ui.add(
                    LabeledValue::new("Canvas", format!("{:.0}×{:.0}", readout.canvas.x, readout.canvas.y))
                        .unit("px"),
                );
            } else {
                ui.label(
                    egui::RichText::new("No view running")
                        .size(HudTypography::LABEL_SIZE)
                        .color(HudColors::TEXT_DISABLED),
                );
            }
        });
}

struct MicroscopeControls {
    focus: f32,
    zoom: f32,
    pan: glam::Vec2,
    stain: StainMode,
    blur: f32,
}

/// Focus, zoom and stain controls (top-right)
fn render_microscope_panel(
    ctx: &Context,
    controls: &MicroscopeControls,
    frame: &HudFrame<'_>,
    actions: &mut Vec<HudAction>,
) {
    Window::new("MICROSCOPE")
        .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(true)
        .show(ctx, |ui| {
            ui.set_min_width(200.0);

            section_header(ui, "OPTICS");
            let mut focus = controls.focus;
            if ui
                .add(egui::Slider::new(&mut focus, 0.0..=FOCUS_MAX).text("Focus"))
                .changed()
            {
                actions.push(HudAction::Command(ViewCommand::SetFocus(focus)));
            }

            let mut zoom = controls.zoom;
            let microscope = &frame.params.microscope;
            if ui
                .add(
                    egui::Slider::new(&mut zoom, microscope.zoom_min..=microscope.zoom_max)
                        .step_by(0.1)
                        .text("Zoom"),
                )
                .changed()
            {
                actions.push(HudAction::Command(ViewCommand::SetZoom(zoom)));
            }

            let blur_color = if controls.blur < 0.5 {
                HudColors::SUCCESS
            } else {
                HudColors::WARNING
            };
            key_value(ui, "Blur", &format!("{:.1} px", controls.blur), Some(blur_color));
            key_value(
                ui,
                "Pan",
                &format!("{:+.0}, {:+.0}", controls.pan.x, controls.pan.y),
                None,
            );

            section_header(ui, "STAIN");
            ui.horizontal(|ui| {
                for stain in StainMode::ALL {
                    if ui.selectable_label(controls.stain == stain, stain.label()).clicked() {
                        actions.push(HudAction::Command(ViewCommand::SetStain(stain)));
                    }
                }
            });

            ui.add_space(4.0);
            if ui.button("Reset view").clicked() {
                actions.push(HudAction::Command(ViewCommand::ResetViewport));
            }
            ui.label(
                egui::RichText::new("Drag the slide to pan")
                    .size(HudTypography::SMALL_SIZE)
                    .color(HudColors::TEXT_LABEL),
            );
        });
}

/// Scan trigger, progress and findings (top-right)
fn render_scan_panel(
    ctx: &Context,
    phase: ScanPhase,
    scan_line: f32,
    progress: f32,
    detections: &[DetectionRecord],
    actions: &mut Vec<HudAction>,
) {
    Window::new("AI SCAN")
        .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(true)
        .show(ctx, |ui| {
            ui.set_min_width(200.0);

            let scanning = phase == ScanPhase::Scanning;
            let button_text = if scanning { "Scanning..." } else { "Start scan" };
            if ui
                .add_enabled(!scanning, egui::Button::new(button_text))
                .clicked()
            {
                actions.push(HudAction::Command(ViewCommand::StartScan));
            }

            section_header(ui, "PROGRESS");
            key_value(ui, "Phase", phase.label(), Some(HudTheme::scan_phase_color(phase)));
            key_value(ui, "Line", &format!("{:.0} px", scan_line), None);
            ui.add(ProgressBar::new(progress).color(HudTheme::scan_phase_color(phase)));

            if phase == ScanPhase::Complete {
                section_header(ui, "FINDINGS");
                if detections.is_empty() {
                    ui.label(
                        egui::RichText::new("No findings")
                            .size(HudTypography::LABEL_SIZE)
                            .color(HudColors::TEXT_SECONDARY),
                    );
                }
                for record in detections {
                    ui.add(DetectionRow::new(record));
                }
            }
        });
}

/// Keyboard shortcuts help overlay
fn render_help_overlay(ctx: &Context) {
    Window::new("KEYBOARD SHORTCUTS")
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(true)
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            section_header(ui, "VIEWS");
            for (index, kind) in ViewKind::ALL.into_iter().enumerate() {
                key_value(ui, &(index + 1).to_string(), kind.title(), None);
            }

            section_header(ui, "MICROSCOPE");
            key_value(ui, "Mouse Drag", "Pan slide", None);
            key_value(ui, "R", "Reset view", None);

            section_header(ui, "SCAN");
            key_value(ui, "S", "Start scan", None);

            section_header(ui, "HUD");
            key_value(ui, "H", "Toggle help", None);
            key_value(ui, "Tab", "Toggle HUD", None);
            key_value(ui, "Esc", "Quit", None);
        });
}
