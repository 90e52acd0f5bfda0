//! Per-view painters.
//!
//! Each painter writes one frame of its view into a [`Canvas`]: the trail
//! fade or background first, then entity bodies, insets, outlines and
//! finally accents.

use std::f32::consts::TAU;

use glam::Vec2;

use super::canvas::{Canvas, Rect, Stroke, Transformed};
use super::style::{
    FieldStyle, HelixStyle, ScanStyle, SpecimenStyle, StainPalette, StreamStyle, BASE,
};
use crate::physics::{Connection, SatellitePose};
use crate::scan::ScanSequencer;
use crate::state::{Cell, Particle, Specimen};
use crate::viewport::ViewportTransform;

/// Particle field: fade, particle discs, then proximity connections
pub fn paint_particle_field(
    canvas: &mut dyn Canvas,
    particles: &[Particle],
    connections: &[Connection],
    fade_alpha: f32,
) {
    canvas.fade(BASE.with_alpha(fade_alpha));
    for p in particles {
        canvas.fill_circle(p.position, p.radius, FieldStyle::ACCENT.with_alpha(p.opacity));
    }
    for c in connections {
        canvas.line(c.from, c.to, Stroke::new(1.0, FieldStyle::ACCENT.with_alpha(c.alpha)));
    }
}

/// Cell stream: glowing nucleus, highlight, membrane ring and chromatin
pub fn paint_cell_stream(canvas: &mut dyn Canvas, cells: &[Cell], fade_alpha: f32) {
    canvas.fade(BASE.with_alpha(fade_alpha));
    for cell in cells {
        let tint = StreamStyle::tint(cell.tint);

        canvas.glow_circle(cell.position, cell.radius, tint, StreamStyle::GLOW);
        canvas.glow_circle(
            cell.position + Vec2::splat(StreamStyle::INSET_OFFSET),
            cell.radius * StreamStyle::INSET_SCALE,
            StreamStyle::INSET,
            StreamStyle::INSET_GLOW,
        );
        canvas.stroke_circle(
            cell.position,
            cell.radius * StreamStyle::MEMBRANE_SCALE,
            Stroke::new(
                StreamStyle::MEMBRANE_WIDTH,
                tint.with_alpha(StreamStyle::MEMBRANE_ALPHA),
            ),
        );

        let chromatin = Stroke::new(
            StreamStyle::CHROMATIN_WIDTH,
            tint.with_alpha(StreamStyle::CHROMATIN_ALPHA),
        );
        for i in 0..StreamStyle::CHROMATIN_LINES {
            let angle = TAU * i as f32 / StreamStyle::CHROMATIN_LINES as f32 + cell.wobble;
            let dir = Vec2::from_angle(angle) * cell.radius;
            canvas.line(
                cell.position + dir * StreamStyle::CHROMATIN_INNER,
                cell.position + dir * StreamStyle::CHROMATIN_OUTER,
                chromatin,
            );
        }
    }
}

/// Helix background: strand anchors, orbiting satellites with their links,
/// then the floating molecules
pub fn paint_helix<'a, I>(canvas: &mut dyn Canvas, strands: I, molecules: &[Vec2], fade_alpha: f32)
where
    I: IntoIterator<Item = &'a [SatellitePose]>,
{
    canvas.fade(BASE.with_alpha(fade_alpha));
    let link = Stroke::new(HelixStyle::LINK_WIDTH, HelixStyle::LINK);
    for poses in strands {
        for pose in poses {
            canvas.fill_circle(pose.anchor, HelixStyle::STRAND_RADIUS, HelixStyle::STRAND);
            canvas.fill_circle(pose.satellite, HelixStyle::SATELLITE_RADIUS, HelixStyle::SATELLITE);
            canvas.line(pose.anchor, pose.satellite, link);
        }
    }
    for &m in molecules {
        canvas.fill_circle(m, HelixStyle::MOLECULE_HALO_RADIUS, HelixStyle::MOLECULE_HALO);
        canvas.fill_circle(m, HelixStyle::MOLECULE_CORE_RADIUS, HelixStyle::MOLECULE_CORE);
    }
}

/// Stained slide under the viewer transform, followed by the focus blur
pub fn paint_specimen(canvas: &mut dyn Canvas, specimen: &Specimen, viewport: &ViewportTransform) {
    let size = canvas.size();
    let palette = StainPalette::for_stain(viewport.stain());
    canvas.gradient_rect(
        Rect::new(Vec2::ZERO, size),
        palette.background_from,
        palette.background_to,
    );

    {
        let mut slide = Transformed::new(&mut *canvas, viewport.to_affine(size));
        let outline = Stroke::new(SpecimenStyle::OUTLINE_WIDTH, palette.cytoplasm_outline);
        for nucleus in &specimen.nuclei {
            let cytoplasm = nucleus.radius * SpecimenStyle::CYTOPLASM_SCALE;
            slide.fill_circle(nucleus.center, cytoplasm, palette.cytoplasm);
            slide.stroke_circle(nucleus.center, cytoplasm, outline);
            slide.fill_circle(nucleus.center, nucleus.radius, palette.nucleus);
            slide.fill_circle(
                nucleus.center,
                nucleus.radius * SpecimenStyle::NUCLEOLUS_SCALE,
                palette.nucleolus,
            );
        }
    }

    let blur = viewport.blur_radius();
    if blur > 0.0 {
        canvas.blur(blur);
    }
}

/// Scan widget: background, specimen cells, the dashed scan line while a
/// scan runs, and any published detection boxes
pub fn paint_scan(canvas: &mut dyn Canvas, specimen: &Specimen, scan: &ScanSequencer) {
    let size = canvas.size();
    canvas.fill_rect(Rect::new(Vec2::ZERO, size), ScanStyle::BACKGROUND);
    for nucleus in &specimen.nuclei {
        canvas.fill_circle(nucleus.center, nucleus.radius, ScanStyle::CELL);
    }

    if scan.is_scanning() {
        let x = scan.scan_line();
        canvas.dashed_line(
            Vec2::new(x, 0.0),
            Vec2::new(x, size.y),
            Stroke::new(ScanStyle::LINE_WIDTH, ScanStyle::LINE),
            ScanStyle::DASH,
            ScanStyle::GAP,
        );
    }

    for det in scan.detections() {
        let color = det.color();
        canvas.stroke_rect(det.rect(), Stroke::new(ScanStyle::BOX_WIDTH, color));
        canvas.text(
            Vec2::new(det.x + ScanStyle::CAPTION_INSET, det.y - ScanStyle::CAPTION_INSET),
            det.label.name(),
            ScanStyle::CAPTION_SIZE,
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MicroscopeParameters, ScanParameters};
    use crate::render::canvas::{DisplayList, DrawCommand};
    use crate::state::{CellTint, Nucleus};

    #[test]
    fn test_cell_paint_order() {
        let mut list = DisplayList::new(Vec2::new(200.0, 200.0));
        let cell = Cell {
            position: Vec2::new(100.0, 50.0),
            velocity: Vec2::new(0.0, 2.0),
            radius: 8.0,
            tint: CellTint::Cyan,
            wobble: 0.0,
            wobble_speed: 0.03,
        };
        paint_cell_stream(&mut list, &[cell], 0.05);

        let cmds = list.commands();
        assert!(matches!(cmds[0], DrawCommand::Fade { .. }));
        assert!(matches!(cmds[1], DrawCommand::Circle { glow: Some(_), .. }));
        assert!(matches!(cmds[2], DrawCommand::Circle { .. }));
        assert!(matches!(cmds[3], DrawCommand::CircleOutline { radius, .. } if radius == 12.0));
        assert_eq!(list.lines().count(), 3);
    }

    #[test]
    fn test_specimen_blur_only_out_of_focus() {
        let specimen = Specimen {
            nuclei: vec![Nucleus {
                center: Vec2::new(250.0, 250.0),
                radius: 20.0,
            }],
        };
        let mut viewport = ViewportTransform::new(&MicroscopeParameters::default());

        let mut list = DisplayList::new(Vec2::splat(500.0));
        paint_specimen(&mut list, &specimen, &viewport);
        assert_eq!(list.blur_radius(), 0.0);

        viewport.set_focus(20.0);
        list.reset(Vec2::splat(500.0));
        paint_specimen(&mut list, &specimen, &viewport);
        assert!((list.blur_radius() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_scan_line_hidden_when_idle() {
        let scan = ScanSequencer::new(&ScanParameters::default());
        let mut list = DisplayList::new(Vec2::new(400.0, 300.0));
        paint_scan(&mut list, &Specimen::default(), &scan);
        assert!(!list
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::DashedLine { .. })));
    }
}
