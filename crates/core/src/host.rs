use crate::color::Color;
use crate::facts::ItemFacts;
use crate::geometry::{Circle, Rect};
use crate::icon::IconId;

/// Opaque handle to a loaded font, issued by the host's text collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontId(pub u32);

/// Pixel metrics for a shaped string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub width: i32,
    pub ascent: i32,
    pub descent: i32,
}

impl TextMetrics {
    /// Total line height (ascent + descent).
    #[inline]
    pub const fn height(&self) -> i32 {
        self.ascent + self.descent
    }
}

/// Text shaping and font loading, provided by the host.
pub trait TextShaper {
    /// Load a named font at `size`.  `None` means the font is unavailable;
    /// callers fall back to [`default_font`](Self::default_font) and log.
    fn load_font(&mut self, name: &str, size: f32) -> Option<FontId>;

    /// The host's built-in fallback font, always available.
    fn default_font(&mut self, size: f32) -> FontId;

    /// Measure `text` in `font`.  Pure, no side effects.
    fn measure(&self, font: FontId, text: &str) -> TextMetrics;
}

/// Low-level 2D drawing primitives, provided by the host.
///
/// All coordinates are absolute surface pixels; the engine never clips,
/// the surface implementation does.
pub trait DrawSurface {
    fn draw_rounded_rect(&mut self, rect: Rect, color: Color, radius: i32);

    fn draw_disk(&mut self, circle: Circle, color: Color);

    /// Blit an icon asset with its top-left at `(x, y)`, scaled to
    /// `size`×`size`, rotated by `rotation` degrees around its center.
    fn draw_icon(&mut self, x: i32, y: i32, icon: IconId, size: i32, alpha: f32, rotation: f32);

    /// Draw `text` with its baseline-left origin at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, font: FontId, text: &str, color: Color);
}

/// How much of its own decoration the host paints under the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseMode {
    /// Everything the host normally draws, built-in progress/status/folder
    /// decorations included.
    Full,
    /// Cover art and title only; the overlay supplies all decorations.
    Plain,
}

/// The host grid-view's own rendering of one cell.
pub trait BaseRenderer {
    /// Paint cover art and title into `cover`.  Must complete before the
    /// overlay draws; the overlay sits strictly on top.
    fn paint_base(&mut self, facts: &ItemFacts, surface: &mut dyn DrawSurface, cover: Rect, mode: BaseMode);
}

/// Host-side lookups the engine needs.  Queried exactly once, at context
/// construction, via [`HostSnapshot::capture`].
pub trait HostEnv {
    /// Path of the single most-recently-opened file, if any.
    fn last_opened_file_path(&self) -> Option<String>;

    /// The host's native folder-label preference.  The engine branches on
    /// this real value; the host's own ribbon is suppressed through
    /// [`BaseMode::Plain`], never by patching the host.
    fn folder_label_preference(&self) -> bool;

    /// When true the overlay draws nothing and the host keeps all its
    /// built-in decorations.
    fn force_no_progress_bars(&self) -> bool;

    /// Right-to-left UI direction.
    fn is_rtl(&self) -> bool;

    /// Fallback square size for corner marks, used when the config leaves
    /// badge sizes unset.
    fn corner_mark_size(&self) -> i32;
}

/// Immutable snapshot of the host lookups, taken once at startup.
#[derive(Debug, Clone)]
pub struct HostSnapshot {
    pub last_opened_path: Option<String>,
    pub folder_label_pref: bool,
    pub force_no_progress_bars: bool,
    pub rtl: bool,
    pub corner_mark_size: i32,
}

impl HostSnapshot {
    pub fn capture(env: &dyn HostEnv) -> Self {
        Self {
            last_opened_path: env.last_opened_file_path(),
            folder_label_pref: env.folder_label_preference(),
            force_no_progress_bars: env.force_no_progress_bars(),
            rtl: env.is_rtl(),
            corner_mark_size: env.corner_mark_size(),
        }
    }
}
