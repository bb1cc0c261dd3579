//! Folder name banner and book/folder count badge.

use cover_config::{FeatureConfig, FolderBadgeConfig};
use cover_core::{FontId, Rect, TextShaper};
use cover_theme::Palette;

use crate::plan::{PaintRect, TextBadge};

/// Folder badges require both the overlay's own flag and the host's native
/// folder-label preference (captured once at startup).
pub fn folder_badges_enabled(features: &FeatureConfig, host_folder_label_pref: bool) -> bool {
    features.style_folder_badges && host_folder_label_pref
}

/// Pull `(book_count, folder_count)` out of a host summary string such as
/// `"24 books, 3 folders"`.  First numeric run = books, second = folders,
/// missing runs default to 0.
pub fn parse_directory_counts(summary: &str) -> (u32, u32) {
    let mut numbers = [0u32; 2];
    let mut found = 0usize;
    let mut current: Option<u32> = None;

    for c in summary.chars() {
        if let Some(d) = c.to_digit(10) {
            current = Some(current.unwrap_or(0).saturating_mul(10).saturating_add(d));
        } else if let Some(n) = current.take() {
            if found < 2 {
                numbers[found] = n;
                found += 1;
            }
        }
    }
    if let Some(n) = current {
        if found < 2 {
            numbers[found] = n;
        }
    }

    (numbers[0], numbers[1])
}

/// Count badge text: `"<books>[<folders>]"` with subfolders, else the bare
/// book count.
pub fn format_counts(books: u32, folders: u32) -> String {
    if folders > 0 {
        format!("{books}[{folders}]")
    } else {
        books.to_string()
    }
}

/// Full-width name banner near the top of the inner rect.  The banner always
/// stretches to the inner rect's right edge; long names clip at the edge
/// instead of wrapping.
pub fn name_badge(
    inner: Rect,
    cfg: &FolderBadgeConfig,
    palette: &Palette,
    font: FontId,
    shaper: &dyn TextShaper,
    name: &str,
) -> TextBadge {
    let m = shaper.measure(font, name);
    let x = inner.x + cfg.name_offset_x;
    let y = inner.y + cfg.name_offset_y;
    let body = Rect::new(x, y, inner.right() - x, m.height() + 2 * cfg.padding_y);

    TextBadge {
        border: None,
        body: PaintRect {
            rect: body,
            color: palette.folder_badge_background,
            radius: cfg.radius,
        },
        text: name.to_string(),
        font,
        text_color: palette.folder_badge_text,
        text_x: body.x + cfg.padding_x,
        text_y: body.y + cfg.padding_y + m.ascent,
    }
}

/// Count badge in the bottom-left corner, sized to its text.
pub fn count_badge(
    inner: Rect,
    cfg: &FolderBadgeConfig,
    palette: &Palette,
    font: FontId,
    shaper: &dyn TextShaper,
    books: u32,
    folders: u32,
) -> TextBadge {
    let text = format_counts(books, folders);
    let m = shaper.measure(font, &text);
    let w = m.width + 2 * cfg.padding_x;
    let h = m.height() + 2 * cfg.padding_y;
    let body = Rect::new(
        inner.x + cfg.count_offset_x,
        inner.bottom() - cfg.count_offset_y - h,
        w,
        h,
    );

    TextBadge {
        border: None,
        body: PaintRect {
            rect: body,
            color: palette.folder_badge_background,
            radius: cfg.radius,
        },
        text,
        font,
        text_color: palette.folder_badge_text,
        text_x: body.x + cfg.padding_x,
        text_y: body.y + cfg.padding_y + m.ascent,
    }
}
