//! Output of the layout engine: everything the compositor paints, with
//! geometry and colors fully resolved.  Computed fresh every paint — percent,
//! status and page count can change between renders, so nothing here is
//! cached across frames.

use cover_core::{Circle, Color, FontId, IconId, Rect};

/// A rounded rectangle ready to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintRect {
    pub rect: Rect,
    pub color: Color,
    pub radius: i32,
}

/// A filled disk ready to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintDisk {
    pub circle: Circle,
    pub color: Color,
}

/// A positioned icon blit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconGlyph {
    pub x: i32,
    pub y: i32,
    pub id: IconId,
    pub size: i32,
    pub alpha: f32,
    pub rotation: f32,
}

/// Progress bar geometry.  The two shapes are mutually exclusive: a
/// `complete` status always yields the short indicator, never a full bar.
#[derive(Debug, Clone, PartialEq)]
pub enum BarLayout {
    Standard {
        /// Painted first, underneath the track, when a border is configured.
        border: Option<PaintRect>,
        track: PaintRect,
        /// Absent when the track is too small to hold any fill.
        fill: Option<PaintRect>,
    },
    Complete {
        border: Option<PaintRect>,
        body: PaintRect,
    },
}

impl BarLayout {
    /// Horizontal extent of the bar body (for overlap checks).
    pub fn body_rect(&self) -> Rect {
        match self {
            BarLayout::Standard { track, .. } => track.rect,
            BarLayout::Complete { body, .. } => body.rect,
        }
    }

    /// Outermost painted rect: the border underlay when present, else the
    /// body.  This is the bar's full footprint and stays inside the slot.
    pub fn outer_rect(&self) -> Rect {
        match self {
            BarLayout::Standard { border, track, .. } => {
                border.map_or(track.rect, |b| b.rect)
            }
            BarLayout::Complete { border, body } => border.map_or(body.rect, |b| b.rect),
        }
    }
}

/// The circular status badge: optional emphasis ring, background disk, icon.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBadge {
    /// Square bounding box, right-anchored on the inner rect.
    pub bbox: Rect,
    /// Outer disk in the emphasis color (last-opened item only).
    pub ring: Option<PaintDisk>,
    pub disk: PaintDisk,
    pub icon: IconGlyph,
}

/// A rounded rectangle with centered or left-aligned text (page-count badge
/// and both folder badges).
#[derive(Debug, Clone, PartialEq)]
pub struct TextBadge {
    pub border: Option<PaintRect>,
    pub body: PaintRect,
    pub text: String,
    pub font: FontId,
    pub text_color: Color,
    /// Baseline-left origin of the text run.
    pub text_x: i32,
    pub text_y: i32,
}

impl TextBadge {
    /// Outermost painted rect (border when present, else body).  The bar
    /// span adjustment measures against this edge.
    pub fn outer_rect(&self) -> Rect {
        self.border.map_or(self.body.rect, |b| b.rect)
    }
}

/// Full layout for one item.  Fields are independent: a book never has
/// folder badges, a directory never has a bar or status/page badge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    pub bar: Option<BarLayout>,
    pub status_badge: Option<StatusBadge>,
    pub page_badge: Option<TextBadge>,
    pub folder_name_badge: Option<TextBadge>,
    pub folder_count_badge: Option<TextBadge>,
}
