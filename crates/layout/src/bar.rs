//! Progress bar and complete-indicator geometry.

use cover_config::BarConfig;
use cover_core::{Color, ReadStatus, Rect};
use cover_theme::Palette;

use crate::plan::{BarLayout, PaintRect};
use crate::span::Span;

/// Vertical position of the bar body within the inner rect.
pub fn bar_top(inner: Rect, cfg: &BarConfig) -> i32 {
    inner.bottom() - cfg.margin_bottom - cfg.height
}

/// Resolve the bar shape for one book.
///
/// A `complete` status always produces the short right-anchored indicator,
/// regardless of the percent value.  Otherwise a standard track+fill bar is
/// produced when a percent is known; with neither fact there is no bar.
#[allow(clippy::too_many_arguments)]
pub fn bar_layout(
    span: Span,
    bar_y: i32,
    cfg: &BarConfig,
    palette: &Palette,
    status: Option<ReadStatus>,
    percent: Option<f32>,
    is_last_opened: bool,
    badges_globally_on: bool,
) -> Option<BarLayout> {
    let fill_color = resolve_fill_color(palette, status, is_last_opened);
    let (border_width, border_color) =
        resolve_border(cfg, palette, is_last_opened, badges_globally_on);

    let border_for = |body: Rect| -> Option<PaintRect> {
        (border_width > 0).then(|| PaintRect {
            rect: body.expand(border_width),
            color: border_color,
            radius: cfg.border_radius + border_width,
        })
    };

    // The body sits inside the slot inset by the border width, so the
    // border underlay lands exactly on the slot edges and never crosses
    // into a badge the span adjustment already dodged.
    let slot_left = span.left + border_width;
    let slot_w = (span.width() - 2 * border_width).max(1);

    if status == Some(ReadStatus::Complete) {
        let w = cfg.complete_width.min(slot_w);
        let body = Rect::new(slot_left + slot_w - w, bar_y, w, cfg.height);
        return Some(BarLayout::Complete {
            border: border_for(body),
            body: PaintRect {
                rect: body,
                color: fill_color,
                radius: cfg.border_radius,
            },
        });
    }

    let percent = percent?;
    let track = Rect::new(slot_left, bar_y, slot_w, cfg.height);
    Some(BarLayout::Standard {
        border: border_for(track),
        track: PaintRect {
            rect: track,
            color: palette.track.get(status),
            radius: cfg.border_radius,
        },
        fill: fill_rect(track, cfg, percent, fill_color),
    })
}

fn resolve_fill_color(palette: &Palette, status: Option<ReadStatus>, is_last_opened: bool) -> Color {
    if is_last_opened {
        if let Some(c) = palette.last_opened_fill {
            return c;
        }
    }
    palette.fill.get(status)
}

/// The last-opened emphasis shows on the bar border only when status badges
/// are globally off; with badges on, the badge ring carries it instead.
fn resolve_border(
    cfg: &BarConfig,
    palette: &Palette,
    is_last_opened: bool,
    badges_globally_on: bool,
) -> (i32, Color) {
    if is_last_opened && !badges_globally_on {
        (cfg.last_opened_border_width, palette.last_opened_border)
    } else {
        (cfg.border_width, palette.bar_border)
    }
}

/// Fill inset into the track.  Skipped entirely when the track is too small
/// to hold any fill; otherwise at least one pixel wide, so 0% is still
/// distinguishable from "no progress record".
fn fill_rect(track: Rect, cfg: &BarConfig, percent: f32, color: Color) -> Option<PaintRect> {
    let avail = track.inset_xy(cfg.fill_inset_x, cfg.fill_inset_y);
    if avail.is_empty() {
        return None;
    }

    let pct = percent.clamp(0.0, 1.0);
    let w = ((track.w as f32 * pct + 0.5).floor() as i32 - 2 * cfg.fill_inset_x).max(1);
    Some(PaintRect {
        rect: Rect::new(avail.x, avail.y, w.min(avail.w), avail.h),
        color,
        radius: (cfg.border_radius - cfg.fill_inset_x.max(cfg.fill_inset_y)).max(0),
    })
}
