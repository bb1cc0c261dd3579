//! Bar span resolution — the horizontal extent left for the progress bar
//! after every badge and margin adjustment.

use cover_config::BarConfig;
use cover_core::{Corner, Rect};

/// Horizontal slot for the bar, `right` exclusive.  `right > left` always.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub left: i32,
    pub right: i32,
}

impl Span {
    #[inline]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }
}

/// Fraction of the slot width a book of `pages` pages occupies when the
/// thick-bar feature is on.
///
/// Clamped linear ramp: ≤100 pages → 0.25, ≥650 → 1.0, linear between.
/// Unknown length uses a fixed 0.66 placeholder.
pub fn thickness_fraction(pages: Option<u32>) -> f32 {
    match pages {
        None => 0.66,
        Some(p) if p <= 100 => 0.25,
        Some(p) if p >= 650 => 1.0,
        Some(p) => 0.25 + (p - 100) as f32 / 550.0 * 0.75,
    }
}

/// Resolve the bar's horizontal slot.
///
/// Adjustments apply in order: margins, bottom-corner page badge dodge,
/// status badge reserve, thick-bar rescale.  The rescale operates on the
/// already-badge-adjusted slot width, anchored at the left edge.
///
/// `status_badge_size` is `Some` only when the badge will actually be drawn.
/// `page_badge` carries the badge's outermost rect, its anchor corner and
/// its corner radius.
pub fn resolve_span(
    inner: Rect,
    bar: &BarConfig,
    status_badge_size: Option<i32>,
    page_badge: Option<(Rect, Corner, i32)>,
    pages: Option<u32>,
    thick_bar: bool,
) -> Span {
    let mut left = inner.x + bar.margin_left;
    let mut right = inner.right() - bar.margin_right;

    // The bar's rounded end should visually meet the page badge's rounded
    // end, so the dodge stops short by the sum of both radii.
    if let Some((rect, corner, radius)) = page_badge {
        if corner.is_bottom() {
            if corner.is_left() {
                let dist = rect.right() - inner.x;
                left += (dist - (radius + bar.border_radius)).max(0);
            } else {
                let dist = inner.right() - rect.x;
                right -= (dist - (radius + bar.border_radius)).max(0);
            }
        }
    }

    if let Some(size) = status_badge_size {
        right -= if bar.badge_gap_mode {
            size + bar.badge_gap
        } else {
            size / 2
        };
    }

    if thick_bar {
        let slot = (right - left).max(1);
        right = left + (slot as f32 * thickness_fraction(pages) + 0.5).floor() as i32;
    }

    if right < left + 1 {
        right = left + 1;
    }
    Span { left, right }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inner() -> Rect {
        Rect::new(10, 10, 200, 300)
    }

    fn bar_cfg() -> BarConfig {
        BarConfig::default()
    }

    #[test]
    fn thickness_fraction_anchor_points() {
        assert_eq!(thickness_fraction(Some(100)), 0.25);
        assert_eq!(thickness_fraction(Some(50)), 0.25);
        assert_eq!(thickness_fraction(Some(650)), 1.0);
        assert_eq!(thickness_fraction(Some(1200)), 1.0);
        assert_eq!(thickness_fraction(Some(375)), 0.625);
        assert_eq!(thickness_fraction(None), 0.66);
    }

    #[test]
    fn margins_only() {
        let s = resolve_span(inner(), &bar_cfg(), None, None, None, false);
        assert_eq!(s.left, 15);
        assert_eq!(s.right, 205);
    }

    #[test]
    fn gap_mode_keeps_bar_clear_of_badge() {
        let cfg = bar_cfg();
        let badge_size = 16;
        let s = resolve_span(inner(), &cfg, Some(badge_size), None, None, false);
        let badge_left = inner().right() - cfg.margin_right - badge_size;
        assert!(s.right <= badge_left);
        assert_eq!(s.right, badge_left - cfg.badge_gap);
    }

    #[test]
    fn overlay_mode_stops_at_badge_center() {
        let mut cfg = bar_cfg();
        cfg.badge_gap_mode = false;
        let badge_size = 16;
        let s = resolve_span(inner(), &cfg, Some(badge_size), None, None, false);
        let badge_center = inner().right() - cfg.margin_right - badge_size / 2;
        assert_eq!(s.right, badge_center);
    }

    #[test]
    fn bottom_right_page_badge_shrinks_right() {
        let cfg = bar_cfg();
        let badge = Rect::new(180, 290, 28, 14);
        let s = resolve_span(
            inner(),
            &cfg,
            None,
            Some((badge, Corner::BottomRight, 4)),
            None,
            false,
        );
        // dist = 210 - 180 = 30, offset = 30 - (4 + 3) = 23
        assert_eq!(s.right, 205 - 23);
        assert_eq!(s.left, 15);
    }

    #[test]
    fn bottom_left_page_badge_shrinks_left() {
        let cfg = bar_cfg();
        let badge = Rect::new(12, 290, 28, 14);
        let s = resolve_span(
            inner(),
            &cfg,
            None,
            Some((badge, Corner::BottomLeft, 4)),
            None,
            false,
        );
        // dist = 40 - 10 = 30, offset = 30 - (4 + 3) = 23
        assert_eq!(s.left, 15 + 23);
        assert_eq!(s.right, 205);
    }

    #[test]
    fn top_corner_page_badge_is_ignored() {
        let cfg = bar_cfg();
        let badge = Rect::new(180, 12, 28, 14);
        let s = resolve_span(
            inner(),
            &cfg,
            None,
            Some((badge, Corner::TopRight, 4)),
            None,
            false,
        );
        assert_eq!(s.right, 205);
    }

    #[test]
    fn dodge_offset_clamps_at_zero() {
        let cfg = bar_cfg();
        // Badge barely pokes past the inner edge; radii sum exceeds it.
        let badge = Rect::new(10, 290, 5, 14);
        let s = resolve_span(
            inner(),
            &cfg,
            None,
            Some((badge, Corner::BottomLeft, 4)),
            None,
            false,
        );
        assert_eq!(s.left, 15);
    }

    #[test]
    fn thick_bar_rescales_badge_adjusted_slot() {
        let mut cfg = bar_cfg();
        cfg.badge_gap_mode = true;
        let s_plain = resolve_span(inner(), &cfg, Some(16), None, Some(650), false);
        let s_thick = resolve_span(inner(), &cfg, Some(16), None, Some(650), true);
        // Fraction 1.0: the rescale reproduces the badge-adjusted slot.
        assert_eq!(s_thick, s_plain);

        let s_quarter = resolve_span(inner(), &cfg, Some(16), None, Some(100), true);
        assert_eq!(s_quarter.left, s_plain.left);
        assert_eq!(
            s_quarter.width(),
            (s_plain.width() as f32 * 0.25 + 0.5) as i32
        );
    }

    #[test]
    fn unknown_pages_use_placeholder_fraction() {
        let cfg = bar_cfg();
        let s_full = resolve_span(inner(), &cfg, None, None, None, false);
        let s = resolve_span(inner(), &cfg, None, None, None, true);
        assert_eq!(s.width(), (s_full.width() as f32 * 0.66 + 0.5) as i32);
    }

    #[test]
    fn slot_width_never_collapses() {
        let cfg = bar_cfg();
        let tiny = Rect::new(0, 0, 6, 6);
        let s = resolve_span(tiny, &cfg, Some(32), None, None, false);
        assert!(s.width() >= 1);
    }
}
