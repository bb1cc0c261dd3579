use cover_config::OverlayConfig;
use cover_core::{FontId, HostEnv, HostSnapshot, ItemFacts, Result, TextShaper};
use cover_layout::LayoutParams;
use cover_theme::Palette;

/// Immutable per-session state: parsed config, resolved palette, the host
/// snapshot, and pre-loaded fonts.
///
/// Built once at startup (or settings reload) and shared by reference across
/// sequential paint calls; nothing here mutates afterwards, so no locking.
#[derive(Debug)]
pub struct OverlayContext {
    pub cfg: OverlayConfig,
    pub palette: Palette,
    pub host: HostSnapshot,
    pub page_font: FontId,
    pub folder_font: FontId,
    badge_size: i32,
    icon_size: i32,
    folder_labels: bool,
}

impl OverlayContext {
    /// Resolve colors, capture the host snapshot and load fonts.
    ///
    /// Fails only on an unparseable color string; font failures fall back to
    /// the host's default font with a warning.
    pub fn new(
        cfg: OverlayConfig,
        env: &dyn HostEnv,
        shaper: &mut dyn TextShaper,
    ) -> Result<Self> {
        let palette = Palette::resolve(&cfg)?;
        let host = HostSnapshot::capture(env);

        let badge_size = if cfg.status_badge.background_size > 0 {
            cfg.status_badge.background_size
        } else {
            host.corner_mark_size
        };
        let icon_size = if cfg.status_badge.icon_size > 0 {
            cfg.status_badge.icon_size
        } else {
            badge_size * 2 / 3
        };

        let page_font = load_font(shaper, &cfg.page_badge.font, cfg.page_badge.font_size);
        let folder_font = load_font(shaper, &cfg.folder_badge.font, cfg.folder_badge.font_size);
        let folder_labels = cfg.features.style_folder_badges && host.folder_label_pref;

        Ok(Self {
            cfg,
            palette,
            host,
            page_font,
            folder_font,
            badge_size,
            icon_size,
            folder_labels,
        })
    }

    /// Layout inputs for one item.
    pub fn layout_params(&self, facts: &ItemFacts) -> LayoutParams<'_> {
        LayoutParams {
            cfg: &self.cfg,
            palette: &self.palette,
            rtl: self.host.rtl,
            badge_size: self.badge_size,
            icon_size: self.icon_size,
            folder_labels: self.folder_labels,
            is_last_opened: facts.is_last_opened(self.host.last_opened_path.as_deref()),
            page_font: self.page_font,
            folder_font: self.folder_font,
        }
    }
}

fn load_font(shaper: &mut dyn TextShaper, name: &str, size: f32) -> FontId {
    if name.is_empty() {
        return shaper.default_font(size);
    }
    match shaper.load_font(name, size) {
        Some(f) => f,
        None => {
            tracing::warn!("font '{name}' unavailable; falling back to the default font");
            shaper.default_font(size)
        }
    }
}
