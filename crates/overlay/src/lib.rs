//! Compositor: paints the host's base content first, then the custom
//! decoration layer on top in a fixed z-order.

pub mod context;

pub use context::OverlayContext;

use cover_core::{BaseMode, BaseRenderer, DrawSurface, ItemFacts, Rect, TextShaper};
use cover_layout::{layout_item, BarLayout, LayoutResult, StatusBadge, TextBadge};

/// Paints one grid cell: host base content, then the overlay.
///
/// Holds only the immutable [`OverlayContext`]; all per-call state comes in
/// as arguments, so painting a shelf is a plain sequential loop.
#[derive(Debug)]
pub struct Compositor {
    ctx: OverlayContext,
}

impl Compositor {
    pub fn new(ctx: OverlayContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &OverlayContext {
        &self.ctx
    }

    /// Render one item into `cover` (the outer frame rect).
    ///
    /// Never fails: a degenerate inner rect skips the overlay for this item
    /// only, leaving the host's base rendering intact.
    pub fn paint(
        &self,
        facts: &ItemFacts,
        cover: Rect,
        surface: &mut dyn DrawSurface,
        base: &mut dyn BaseRenderer,
        shaper: &dyn TextShaper,
    ) {
        if self.ctx.host.force_no_progress_bars {
            base.paint_base(facts, surface, cover, BaseMode::Full);
            return;
        }

        // Base content first: the overlay sits strictly above it, and the
        // Plain mode keeps the host's own indicators out of the way.
        base.paint_base(facts, surface, cover, BaseMode::Plain);

        let frame = &self.ctx.cfg.frame;
        let inner = cover.inset(frame.border_width + frame.padding);
        if inner.is_empty() {
            tracing::warn!(
                path = facts.file_path.as_deref().unwrap_or(""),
                cover = ?cover,
                "inner rect is empty; skipping overlay for this item"
            );
            return;
        }

        let params = self.ctx.layout_params(facts);
        let layout = layout_item(&params, shaper, inner, facts);

        if self.ctx.cfg.features.debug_logging {
            trace_layout(facts, inner, &layout);
        }

        paint_layout(surface, &layout);
    }
}

/// One structured event per paint with the key geometry fields.
fn trace_layout(facts: &ItemFacts, inner: Rect, layout: &LayoutResult) {
    tracing::debug!(
        path = facts.file_path.as_deref().unwrap_or(""),
        directory = facts.is_directory,
        inner = ?inner,
        bar = ?layout.bar.as_ref().map(BarLayout::body_rect),
        status_badge = ?layout.status_badge.as_ref().map(|b| b.bbox),
        page_badge = ?layout.page_badge.as_ref().map(TextBadge::outer_rect),
        folder_name = ?layout.folder_name_badge.as_ref().map(TextBadge::outer_rect),
        folder_count = ?layout.folder_count_badge.as_ref().map(TextBadge::outer_rect),
        "overlay layout"
    );
}

/// Fixed z-order: bar (border→track→fill) → status badge
/// (ring→disk→icon) → page badge → folder name → folder count.
fn paint_layout(surface: &mut dyn DrawSurface, layout: &LayoutResult) {
    if let Some(bar) = &layout.bar {
        paint_bar(surface, bar);
    }
    if let Some(badge) = &layout.status_badge {
        paint_status_badge(surface, badge);
    }
    for badge in [
        layout.page_badge.as_ref(),
        layout.folder_name_badge.as_ref(),
        layout.folder_count_badge.as_ref(),
    ]
    .into_iter()
    .flatten()
    {
        paint_text_badge(surface, badge);
    }
}

fn paint_bar(surface: &mut dyn DrawSurface, bar: &BarLayout) {
    match bar {
        BarLayout::Standard {
            border,
            track,
            fill,
        } => {
            if let Some(b) = border {
                surface.draw_rounded_rect(b.rect, b.color, b.radius);
            }
            surface.draw_rounded_rect(track.rect, track.color, track.radius);
            if let Some(f) = fill {
                surface.draw_rounded_rect(f.rect, f.color, f.radius);
            }
        }
        BarLayout::Complete { border, body } => {
            if let Some(b) = border {
                surface.draw_rounded_rect(b.rect, b.color, b.radius);
            }
            surface.draw_rounded_rect(body.rect, body.color, body.radius);
        }
    }
}

fn paint_status_badge(surface: &mut dyn DrawSurface, badge: &StatusBadge) {
    if let Some(ring) = &badge.ring {
        surface.draw_disk(ring.circle, ring.color);
    }
    surface.draw_disk(badge.disk.circle, badge.disk.color);
    let icon = &badge.icon;
    surface.draw_icon(icon.x, icon.y, icon.id, icon.size, icon.alpha, icon.rotation);
}

fn paint_text_badge(surface: &mut dyn DrawSurface, badge: &TextBadge) {
    if let Some(b) = &badge.border {
        surface.draw_rounded_rect(b.rect, b.color, b.radius);
    }
    surface.draw_rounded_rect(badge.body.rect, badge.body.color, badge.body.radius);
    surface.draw_text(
        badge.text_x,
        badge.text_y,
        badge.font,
        &badge.text,
        badge.text_color,
    );
}
