//! Fixed visual style of each view.

use crate::render::canvas::Color;
use crate::state::CellTint;
use crate::viewport::StainMode;

/// Shared "deep slate" base the full-surface views fade towards
pub const BASE: Color = Color::rgb(15, 23, 42);

/// Particle field style
pub struct FieldStyle;

impl FieldStyle {
    /// Particles and connections share the cyan accent
    pub const ACCENT: Color = Color::rgb(6, 182, 212);
}

/// Cell stream style
pub struct StreamStyle;

impl StreamStyle {
    pub const GLOW: f32 = 15.0;
    /// Nucleolus highlight
    pub const INSET: Color = Color::rgba(255, 255, 255, 0.4);
    pub const INSET_SCALE: f32 = 0.35;
    pub const INSET_OFFSET: f32 = -2.0;
    pub const INSET_GLOW: f32 = 8.0;
    /// Translucent membrane ring
    pub const MEMBRANE_SCALE: f32 = 1.5;
    pub const MEMBRANE_ALPHA: f32 = 0.2;
    pub const MEMBRANE_WIDTH: f32 = 2.0;
    /// Chromatin strokes inside the nucleus
    pub const CHROMATIN_LINES: usize = 3;
    pub const CHROMATIN_INNER: f32 = 0.3;
    pub const CHROMATIN_OUTER: f32 = 0.8;
    pub const CHROMATIN_ALPHA: f32 = 0.4;
    pub const CHROMATIN_WIDTH: f32 = 0.5;

    pub fn tint(tint: CellTint) -> Color {
        match tint {
            CellTint::Cyan => Color::rgb(0x06, 0xb6, 0xd4),
            CellTint::Teal => Color::rgb(0x14, 0xb8, 0xa6),
            CellTint::Sky => Color::rgb(0x22, 0xd3, 0xee),
        }
    }
}

/// Helix background style
pub struct HelixStyle;

impl HelixStyle {
    pub const STRAND: Color = Color::rgba(6, 182, 212, 0.15);
    pub const STRAND_RADIUS: f32 = 4.0;
    pub const SATELLITE: Color = Color::rgba(20, 184, 166, 0.08);
    pub const SATELLITE_RADIUS: f32 = 2.0;
    pub const LINK: Color = Color::rgba(6, 182, 212, 0.06);
    pub const LINK_WIDTH: f32 = 0.5;
    pub const MOLECULE_HALO: Color = Color::rgba(34, 211, 238, 0.1);
    pub const MOLECULE_HALO_RADIUS: f32 = 20.0;
    pub const MOLECULE_CORE: Color = Color::rgba(6, 182, 212, 0.15);
    pub const MOLECULE_CORE_RADIUS: f32 = 8.0;
}

/// Colours of one stain preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StainPalette {
    pub background_from: Color,
    pub background_to: Color,
    pub nucleus: Color,
    pub nucleolus: Color,
    pub cytoplasm: Color,
    pub cytoplasm_outline: Color,
}

impl StainPalette {
    pub const HEMATOXYLIN_EOSIN: StainPalette = StainPalette {
        background_from: Color::rgb(0xf5, 0xe6, 0xd3),
        background_to: Color::rgb(0xe8, 0xd4, 0xc0),
        nucleus: Color::rgb(0x4a, 0x37, 0x28),
        nucleolus: Color::rgb(0x8b, 0x6f, 0x47),
        cytoplasm: Color::rgb(0xd9, 0xb4, 0x9e),
        cytoplasm_outline: Color::rgb(0xb8, 0x95, 0x6a),
    };

    pub const PAPANICOLAOU: StainPalette = StainPalette {
        background_from: Color::rgb(0xe3, 0xcf, 0xff),
        background_to: Color::rgb(0xd4, 0xb5, 0xff),
        nucleus: Color::rgb(0x6b, 0x4c, 0x9a),
        nucleolus: Color::rgb(0x9b, 0x7c, 0xba),
        cytoplasm: Color::rgb(0xe8, 0xd4, 0xff),
        cytoplasm_outline: Color::rgb(0xc9, 0xaa, 0xe8),
    };

    pub fn for_stain(stain: StainMode) -> &'static StainPalette {
        match stain {
            StainMode::HematoxylinEosin => &Self::HEMATOXYLIN_EOSIN,
            StainMode::Papanicolaou => &Self::PAPANICOLAOU,
        }
    }
}

/// Specimen geometry relative to the nucleus radius
pub struct SpecimenStyle;

impl SpecimenStyle {
    pub const CYTOPLASM_SCALE: f32 = 1.8;
    pub const OUTLINE_WIDTH: f32 = 1.0;
    pub const NUCLEOLUS_SCALE: f32 = 0.3;
}

/// Scan widget style
pub struct ScanStyle;

impl ScanStyle {
    pub const BACKGROUND: Color = Color::rgb(0xe8, 0xd4, 0xc0);
    pub const CELL: Color = Color::rgb(0x8b, 0x6f, 0x47);
    pub const LINE: Color = Color::rgb(0xff, 0x6b, 0x35);
    pub const LINE_WIDTH: f32 = 2.0;
    pub const DASH: f32 = 5.0;
    pub const GAP: f32 = 5.0;
    pub const BOX_WIDTH: f32 = 2.0;
    pub const CAPTION_SIZE: f32 = 12.0;
    /// Caption baseline offset from the box's top-left corner
    pub const CAPTION_INSET: f32 = 5.0;
}
