//! Page-count badge: the `P(###)` filename convention and the corner badge
//! geometry it feeds.

use cover_config::PageBadgeConfig;
use cover_core::{Corner, FontId, Rect, TextShaper};
use cover_theme::Palette;

use crate::plan::{PaintRect, TextBadge};

/// Extract a page count from a file path.
///
/// Convention: the literal substring `P(` followed by one or more digits and
/// a closing `)`, anywhere in the base name with the extension stripped.
/// `"My Book P(320).epub"` → 320.  First well-formed match wins.
pub fn parse_page_count(path: &str) -> Option<u32> {
    let base = path.rsplit('/').next().unwrap_or(path);
    let stem = match base.rfind('.') {
        Some(i) if i > 0 => &base[..i],
        _ => base,
    };

    let mut rest = stem;
    while let Some(i) = rest.find("P(") {
        let after = &rest[i + 2..];
        let digits = after
            .char_indices()
            .take_while(|(_, c)| c.is_ascii_digit())
            .count();
        if digits > 0 && after[digits..].starts_with(')') {
            if let Ok(n) = after[..digits].parse::<u32>() {
                return Some(n);
            }
        }
        rest = after;
    }
    None
}

/// Corner-anchored rounded rect showing the page count.
///
/// Width/height default to text metrics plus padding unless the config
/// overrides them; the text baseline accounts for the ascent/descent split,
/// not just the box height.
pub fn page_badge(
    inner: Rect,
    cfg: &PageBadgeConfig,
    palette: &Palette,
    font: FontId,
    shaper: &dyn TextShaper,
    pages: u32,
) -> TextBadge {
    let text = pages.to_string();
    let m = shaper.measure(font, &text);

    let w = if cfg.width > 0 {
        cfg.width
    } else {
        m.width + 2 * cfg.padding_x
    };
    let h = if cfg.height > 0 {
        cfg.height
    } else {
        m.height() + 2 * cfg.padding_y
    };

    let corner = cfg.corner.to_corner();
    let x = if corner.is_left() {
        inner.x + cfg.offset_x
    } else {
        inner.right() - cfg.offset_x - w
    };
    let y = if corner.is_bottom() {
        inner.bottom() - cfg.offset_y - h
    } else {
        inner.y + cfg.offset_y
    };
    let body = Rect::new(x, y, w, h);

    let border = (cfg.border_width > 0).then(|| PaintRect {
        rect: body.expand(cfg.border_width),
        color: palette.page_badge_border,
        radius: cfg.radius + cfg.border_width,
    });

    TextBadge {
        border,
        body: PaintRect {
            rect: body,
            color: palette.page_badge_background,
            radius: cfg.radius,
        },
        text,
        font,
        text_color: palette.page_badge_text,
        text_x: body.x + (w - m.width) / 2,
        text_y: body.y + (h - m.height()) / 2 + m.ascent,
    }
}

/// Page badge anchor data for the bar span adjustment: outermost rect,
/// corner, and corner radius.
pub fn span_anchor(badge: &TextBadge, cfg: &PageBadgeConfig) -> (Rect, Corner, i32) {
    (badge.outer_rect(), cfg.corner.to_corner(), cfg.radius)
}
