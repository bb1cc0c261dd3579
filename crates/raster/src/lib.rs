//! Software implementations of the host collaborator traits.
//!
//! `RasterSurface` paints into a plain RGBA8 buffer and keeps a log of every
//! draw call, so integration tests can assert both pixels and z-order.
//! `MonoShaper`, `FlatBase` and `StaticHostEnv` are deterministic stand-ins
//! for the host's text, base-rendering and settings collaborators.

pub mod shaper;
pub mod surface;

pub use shaper::MonoShaper;
pub use surface::{DrawOp, RasterSurface};

use cover_core::{BaseMode, BaseRenderer, Color, DrawSurface, HostEnv, ItemFacts, Rect};

/// Minimal base renderer: a flat cover fill, plus a white bottom strip as a
/// stand-in for the host's built-in progress indicator in `Full` mode.
/// Tests use the strip to prove the overlay suppressed the host decoration.
#[derive(Debug, Clone, Copy)]
pub struct FlatBase {
    pub cover_color: Color,
}

impl FlatBase {
    pub fn new(cover_color: Color) -> Self {
        Self { cover_color }
    }

    /// The stand-in native indicator rect for a given cover.
    pub fn native_strip(cover: Rect) -> Rect {
        Rect::new(cover.x, cover.bottom() - 2, cover.w, 2)
    }
}

impl BaseRenderer for FlatBase {
    fn paint_base(
        &mut self,
        _facts: &ItemFacts,
        surface: &mut dyn DrawSurface,
        cover: Rect,
        mode: BaseMode,
    ) {
        surface.draw_rounded_rect(cover, self.cover_color, 0);
        if mode == BaseMode::Full {
            surface.draw_rounded_rect(Self::native_strip(cover), Color::WHITE, 0);
        }
    }
}

/// Fixed host environment for tests and the demo binary.
#[derive(Debug, Clone)]
pub struct StaticHostEnv {
    pub last_opened_path: Option<String>,
    pub folder_label_pref: bool,
    pub force_no_progress_bars: bool,
    pub rtl: bool,
    pub corner_mark_size: i32,
}

impl Default for StaticHostEnv {
    fn default() -> Self {
        Self {
            last_opened_path: None,
            folder_label_pref: true,
            force_no_progress_bars: false,
            rtl: false,
            corner_mark_size: 16,
        }
    }
}

impl HostEnv for StaticHostEnv {
    fn last_opened_file_path(&self) -> Option<String> {
        self.last_opened_path.clone()
    }

    fn folder_label_preference(&self) -> bool {
        self.folder_label_pref
    }

    fn force_no_progress_bars(&self) -> bool {
        self.force_no_progress_bars
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn corner_mark_size(&self) -> i32 {
        self.corner_mark_size
    }
}
