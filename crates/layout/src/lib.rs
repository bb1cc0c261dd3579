//! Geometry layout engine for cover-thumbnail decorations.
//!
//! Given one item's facts and the cover's inner content rect, resolves a
//! consistent, non-overlapping set of bar/badge geometries with colors,
//! radii and text payloads attached.  Deterministic and allocation-light;
//! painting is the compositor's job (`cover-overlay`).

pub mod badge;
pub mod bar;
pub mod folder;
pub mod page;
pub mod plan;
pub mod span;

pub use plan::{BarLayout, IconGlyph, LayoutResult, PaintDisk, PaintRect, StatusBadge, TextBadge};
pub use span::{resolve_span, thickness_fraction, Span};

use cover_config::OverlayConfig;
use cover_core::{FontId, ItemFacts, Rect, TextShaper};
use cover_theme::Palette;

/// Everything the engine needs besides the per-item facts.  Built once by
/// the overlay context; immutable across paint calls.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams<'a> {
    pub cfg: &'a OverlayConfig,
    pub palette: &'a Palette,
    pub rtl: bool,
    /// Resolved status-badge box side (config override or host corner-mark
    /// size).
    pub badge_size: i32,
    pub icon_size: i32,
    /// `style_folder_badges` combined with the host's real folder-label
    /// preference.
    pub folder_labels: bool,
    /// Whether this item is the single most-recently-opened one.
    pub is_last_opened: bool,
    pub page_font: FontId,
    pub folder_font: FontId,
}

/// Compute the full decoration layout for one item.
///
/// Missing facts disable only the feature that depends on them; an empty
/// inner rect yields an empty layout (the compositor logs and moves on).
pub fn layout_item(
    p: &LayoutParams<'_>,
    shaper: &dyn TextShaper,
    inner: Rect,
    facts: &ItemFacts,
) -> LayoutResult {
    let mut out = LayoutResult::default();
    if inner.is_empty() {
        return out;
    }

    if facts.is_directory {
        layout_directory(p, shaper, inner, facts, &mut out);
        return out;
    }
    layout_book(p, shaper, inner, facts, &mut out);
    out
}

fn layout_directory(
    p: &LayoutParams<'_>,
    shaper: &dyn TextShaper,
    inner: Rect,
    facts: &ItemFacts,
    out: &mut LayoutResult,
) {
    if !p.folder_labels {
        return;
    }
    let fb = &p.cfg.folder_badge;
    if let Some(name) = facts.directory_name.as_deref() {
        out.folder_name_badge =
            Some(folder::name_badge(inner, fb, p.palette, p.folder_font, shaper, name));
    }
    if let Some(summary) = facts.directory_summary.as_deref() {
        let (books, folders) = folder::parse_directory_counts(summary);
        out.folder_count_badge = Some(folder::count_badge(
            inner,
            fb,
            p.palette,
            p.folder_font,
            shaper,
            books,
            folders,
        ));
    }
}

fn layout_book(
    p: &LayoutParams<'_>,
    shaper: &dyn TextShaper,
    inner: Rect,
    facts: &ItemFacts,
    out: &mut LayoutResult,
) {
    let cfg = p.cfg;
    let pages = facts.file_path.as_deref().and_then(page::parse_page_count);

    // The page badge is positioned first: the bar span must dodge it when it
    // occupies a bottom corner.
    if cfg.page_badge.enabled {
        if let Some(n) = pages {
            out.page_badge = Some(page::page_badge(
                inner,
                &cfg.page_badge,
                p.palette,
                p.page_font,
                shaper,
                n,
            ));
        }
    }

    let badge_on = badge::badge_enabled(&cfg.features, &cfg.status_badge, facts);
    let span = span::resolve_span(
        inner,
        &cfg.bar,
        badge_on.then_some(p.badge_size),
        out.page_badge
            .as_ref()
            .map(|b| page::span_anchor(b, &cfg.page_badge)),
        pages,
        cfg.features.book_thick_bar,
    );

    let bar_y = bar::bar_top(inner, &cfg.bar);
    out.bar = bar::bar_layout(
        span,
        bar_y,
        &cfg.bar,
        p.palette,
        facts.status,
        facts.percent_finished,
        p.is_last_opened,
        cfg.features.show_status_badges,
    );

    if badge_on {
        let emphasis = p.is_last_opened && cfg.status_badge.border_width > 0;
        out.status_badge = Some(badge::status_badge(
            inner,
            bar_y + cfg.bar.height / 2,
            cfg.bar.margin_right,
            &cfg.status_badge,
            p.palette,
            p.badge_size,
            p.icon_size,
            badge::effective_status(facts),
            emphasis,
            p.rtl,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cover_core::{ReadStatus, TextMetrics};

    struct FixedShaper;

    impl TextShaper for FixedShaper {
        fn load_font(&mut self, _name: &str, _size: f32) -> Option<FontId> {
            Some(FontId(1))
        }
        fn default_font(&mut self, _size: f32) -> FontId {
            FontId(0)
        }
        fn measure(&self, _font: FontId, text: &str) -> TextMetrics {
            TextMetrics {
                width: 6 * text.chars().count() as i32,
                ascent: 8,
                descent: 3,
            }
        }
    }

    fn with_params<R>(cfg: &OverlayConfig, f: impl FnOnce(LayoutParams<'_>) -> R) -> R {
        let palette = Palette::resolve(cfg).unwrap();
        f(LayoutParams {
            cfg,
            palette: &palette,
            rtl: false,
            badge_size: 16,
            icon_size: 10,
            folder_labels: true,
            is_last_opened: false,
            page_font: FontId(1),
            folder_font: FontId(1),
        })
    }

    fn inner() -> Rect {
        Rect::new(10, 10, 200, 300)
    }

    #[test]
    fn directory_gets_only_folder_badges() {
        let cfg = OverlayConfig::default();
        with_params(&cfg, |p| {
            let mut facts = ItemFacts::directory("Archive");
            facts.directory_summary = Some("10 books, 0 folders".to_string());
            facts.percent_finished = Some(0.5); // hostile input: must be ignored
            let out = layout_item(&p, &FixedShaper, inner(), &facts);
            assert!(out.bar.is_none());
            assert!(out.status_badge.is_none());
            assert!(out.page_badge.is_none());
            assert_eq!(out.folder_name_badge.unwrap().text, "Archive");
            assert_eq!(out.folder_count_badge.unwrap().text, "10");
        });
    }

    #[test]
    fn book_gets_no_folder_badges() {
        let cfg = OverlayConfig::default();
        with_params(&cfg, |p| {
            let mut facts = ItemFacts::book("/shelf/a P(200).epub");
            facts.percent_finished = Some(0.4);
            let out = layout_item(&p, &FixedShaper, inner(), &facts);
            assert!(out.bar.is_some());
            assert!(out.folder_name_badge.is_none());
            assert!(out.folder_count_badge.is_none());
        });
    }

    #[test]
    fn folder_badges_respect_host_preference() {
        let cfg = OverlayConfig::default();
        with_params(&cfg, |mut p| {
            p.folder_labels = false;
            let mut facts = ItemFacts::directory("Archive");
            facts.directory_summary = Some("3 books".to_string());
            let out = layout_item(&p, &FixedShaper, inner(), &facts);
            assert_eq!(out, LayoutResult::default());
        });
    }

    #[test]
    fn missing_summary_skips_only_the_count_badge() {
        let cfg = OverlayConfig::default();
        with_params(&cfg, |p| {
            let facts = ItemFacts::directory("Archive");
            let out = layout_item(&p, &FixedShaper, inner(), &facts);
            assert!(out.folder_name_badge.is_some());
            assert!(out.folder_count_badge.is_none());
        });
    }

    #[test]
    fn empty_inner_rect_yields_empty_layout() {
        let cfg = OverlayConfig::default();
        with_params(&cfg, |p| {
            let mut facts = ItemFacts::book("/shelf/a.epub");
            facts.percent_finished = Some(0.4);
            let out = layout_item(&p, &FixedShaper, Rect::new(0, 0, 0, 10), &facts);
            assert_eq!(out, LayoutResult::default());
        });
    }

    #[test]
    fn reading_scenario_bar_without_badges() {
        let mut cfg = OverlayConfig::default();
        cfg.features.show_status_badges = false;
        with_params(&cfg, |p| {
            let mut facts = ItemFacts::book("/shelf/a.epub");
            facts.percent_finished = Some(0.5);
            facts.status = Some(ReadStatus::Reading);
            let out = layout_item(&p, &FixedShaper, inner(), &facts);
            assert!(out.status_badge.is_none());
            match out.bar.unwrap() {
                BarLayout::Standard { fill, track, .. } => {
                    let fill = fill.unwrap();
                    assert_eq!(fill.color, p.palette.fill.reading);
                    // ~50% of the slot, minus the insets.
                    let expected = (track.rect.w as f32 * 0.5 + 0.5) as i32 - 2;
                    assert_eq!(fill.rect.w, expected);
                }
                BarLayout::Complete { .. } => panic!("expected standard bar"),
            }
        });
    }

    #[test]
    fn bar_never_overlaps_status_badge_in_gap_mode() {
        let cfg = OverlayConfig::default();
        with_params(&cfg, |p| {
            let mut facts = ItemFacts::book("/shelf/a.epub");
            facts.percent_finished = Some(1.0);
            facts.been_opened = true;
            let out = layout_item(&p, &FixedShaper, inner(), &facts);
            let bar = out.bar.unwrap().body_rect();
            let badge = out.status_badge.unwrap().bbox;
            assert!(bar.right() <= badge.x);
            assert!(!bar.intersects(&badge));
        });
    }

    #[test]
    fn bar_border_stays_clear_of_the_badge_with_wide_borders() {
        let mut cfg = OverlayConfig::default();
        // Border wider than the badge gap: the underlay must still stop at
        // the slot edge, not bleed into the badge box.
        cfg.bar.border_width = 3;
        with_params(&cfg, |p| {
            let mut facts = ItemFacts::book("/shelf/a.epub");
            facts.percent_finished = Some(1.0);
            facts.been_opened = true;
            let out = layout_item(&p, &FixedShaper, inner(), &facts);
            let bar = out.bar.unwrap();
            let badge = out.status_badge.unwrap().bbox;
            assert!(bar.outer_rect().right() <= badge.x);
            assert!(!bar.outer_rect().intersects(&badge));
        });
    }

    #[test]
    fn bar_border_respects_the_page_badge_dodge() {
        let mut cfg = OverlayConfig::default();
        cfg.bar.border_width = 3;
        cfg.features.show_status_badges = false;
        with_params(&cfg, |p| {
            let mut facts = ItemFacts::book("/shelf/Long Novel P(540).epub");
            facts.percent_finished = Some(0.9);
            let out = layout_item(&p, &FixedShaper, inner(), &facts);
            let badge = out.page_badge.as_ref().unwrap().outer_rect();
            let bar = out.bar.as_ref().unwrap().outer_rect();
            assert!(bar.right() <= badge.x + cfg.page_badge.radius + cfg.bar.border_radius);
        });
    }

    #[test]
    fn overlay_mode_tucks_no_further_than_badge_center() {
        let mut cfg = OverlayConfig::default();
        cfg.bar.badge_gap_mode = false;
        with_params(&cfg, |p| {
            let mut facts = ItemFacts::book("/shelf/a.epub");
            facts.percent_finished = Some(1.0);
            facts.been_opened = true;
            let out = layout_item(&p, &FixedShaper, inner(), &facts);
            let bar = out.bar.unwrap().body_rect();
            let badge = out.status_badge.unwrap().bbox;
            assert!(bar.right() <= badge.x + badge.w / 2);
        });
    }

    #[test]
    fn bar_dodges_bottom_corner_page_badge() {
        let cfg = OverlayConfig::default();
        with_params(&cfg, |p| {
            let mut facts = ItemFacts::book("/shelf/Long Novel P(540).epub");
            facts.percent_finished = Some(0.9);
            let out = layout_item(&p, &FixedShaper, inner(), &facts);
            let badge = out.page_badge.as_ref().unwrap().outer_rect();
            let bar = out.bar.as_ref().unwrap().body_rect();
            // Rounded ends may meet but the bodies must not cross the badge
            // beyond the two radii.
            assert!(bar.right() <= badge.x + cfg.page_badge.radius + cfg.bar.border_radius);
        });
    }

    #[test]
    fn page_badge_disabled_without_page_marker() {
        let cfg = OverlayConfig::default();
        with_params(&cfg, |p| {
            let mut facts = ItemFacts::book("/shelf/Plain Book.epub");
            facts.percent_finished = Some(0.3);
            let out = layout_item(&p, &FixedShaper, inner(), &facts);
            assert!(out.page_badge.is_none());
        });
    }

    #[test]
    fn thick_bar_uses_page_count() {
        let mut cfg = OverlayConfig::default();
        cfg.features.book_thick_bar = true;
        cfg.page_badge.enabled = false;
        // Borderless so the body widths compare as pure slot fractions.
        cfg.bar.border_width = 0;
        with_params(&cfg, |p| {
            let mut short = ItemFacts::book("/shelf/a P(100).epub");
            short.percent_finished = Some(1.0);
            let mut long = ItemFacts::book("/shelf/b P(650).epub");
            long.percent_finished = Some(1.0);

            let w_short = layout_item(&p, &FixedShaper, inner(), &short)
                .bar
                .unwrap()
                .body_rect()
                .w;
            let w_long = layout_item(&p, &FixedShaper, inner(), &long)
                .bar
                .unwrap()
                .body_rect()
                .w;
            assert_eq!(w_short * 4, w_long);
        });
    }

    #[test]
    fn complete_book_shows_indicator_even_with_badge() {
        let cfg = OverlayConfig::default();
        with_params(&cfg, |p| {
            let mut facts = ItemFacts::book("/shelf/a.epub");
            facts.status = Some(ReadStatus::Complete);
            facts.percent_finished = Some(0.2);
            let out = layout_item(&p, &FixedShaper, inner(), &facts);
            assert!(matches!(out.bar, Some(BarLayout::Complete { .. })));
            assert!(out.status_badge.is_some());
        });
    }
}
