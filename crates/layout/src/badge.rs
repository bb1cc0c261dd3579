//! Circular status badge geometry.

use cover_config::{FeatureConfig, StatusBadgeConfig};
use cover_core::icon::status_icon;
use cover_core::{Circle, ItemFacts, ReadStatus, Rect};
use cover_theme::Palette;

use crate::plan::{IconGlyph, PaintDisk, StatusBadge};

/// Status used for icon and per-status visibility when the host supplied
/// none; an opened book without an explicit status reads as "reading".
pub fn effective_status(facts: &ItemFacts) -> ReadStatus {
    facts.status.unwrap_or(ReadStatus::Reading)
}

/// Enablement rule: global switch, per-status toggle, the item was opened
/// (or its facts imply it was), and only ever on books.
pub fn badge_enabled(
    features: &FeatureConfig,
    cfg: &StatusBadgeConfig,
    facts: &ItemFacts,
) -> bool {
    !facts.is_directory
        && features.show_status_badges
        && (facts.been_opened || facts.hint_opened())
        && per_status_enabled(cfg, effective_status(facts))
}

fn per_status_enabled(cfg: &StatusBadgeConfig, status: ReadStatus) -> bool {
    match status {
        ReadStatus::Reading => cfg.show_reading,
        ReadStatus::Complete => cfg.show_complete,
        ReadStatus::OnHold => cfg.show_on_hold,
        ReadStatus::Abandoned => cfg.show_abandoned,
    }
}

/// Badge geometry: a square box right-anchored on the inner rect, vertically
/// centered on the bar's center line.
///
/// With last-opened emphasis the full-box disk becomes the emphasis ring and
/// the background disk shrinks in by the ring width.
#[allow(clippy::too_many_arguments)]
pub fn status_badge(
    inner: Rect,
    bar_center_y: i32,
    margin_right: i32,
    cfg: &StatusBadgeConfig,
    palette: &Palette,
    badge_size: i32,
    icon_size: i32,
    status: ReadStatus,
    emphasis: bool,
    rtl: bool,
) -> StatusBadge {
    let bbox = Rect::new(
        inner.right() - margin_right - badge_size,
        bar_center_y - badge_size / 2,
        badge_size,
        badge_size,
    );

    let (ring, disk) = if emphasis && cfg.border_width > 0 {
        (
            Some(PaintDisk {
                circle: Circle::inscribed(bbox),
                color: palette.last_opened_border,
            }),
            PaintDisk {
                circle: Circle::inscribed(bbox.inset(cfg.border_width)),
                color: palette.badge_background,
            },
        )
    } else {
        (
            None,
            PaintDisk {
                circle: Circle::inscribed(bbox),
                color: palette.badge_background,
            },
        )
    };

    let (id, rotation) = status_icon(status, rtl);
    let icon = IconGlyph {
        x: bbox.x + (badge_size - icon_size) / 2,
        y: bbox.y + (badge_size - icon_size) / 2,
        id,
        size: icon_size,
        alpha: 1.0,
        rotation,
    };

    StatusBadge {
        bbox,
        ring,
        disk,
        icon,
    }
}
