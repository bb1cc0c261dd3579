//! Resolved color palette for the overlay.
//!
//! All hex strings from the config are parsed exactly once by
//! [`Palette::resolve`].  A bad string fails resolution with
//! [`OverlayError::ColorParse`] naming the offending key — a silently wrong
//! color is worse than a visible startup failure, so nothing defaults here.

use cover_config::{ColorConfig, OverlayConfig, StatusColorTable};
use cover_core::{Color, OverlayError, ReadStatus, Result};

/// Per-status color set with a mandatory fallback.
#[derive(Debug, Clone, Copy)]
pub struct StatusColors {
    pub default: Color,
    pub reading: Color,
    pub complete: Color,
    pub on_hold: Color,
    pub abandoned: Color,
}

impl StatusColors {
    fn resolve(key: &str, table: &StatusColorTable) -> Result<Self> {
        let default = parse(&format!("{key}.default"), &table.default)?;
        let entry = |suffix: &str, value: &Option<String>| -> Result<Color> {
            match value {
                Some(s) => parse(&format!("{key}.{suffix}"), s),
                None => Ok(default),
            }
        };
        Ok(Self {
            default,
            reading: entry("reading", &table.reading)?,
            complete: entry("complete", &table.complete)?,
            on_hold: entry("on_hold", &table.on_hold)?,
            abandoned: entry("abandoned", &table.abandoned)?,
        })
    }

    /// Color for `status`; absent status falls back to `default`.
    pub fn get(&self, status: Option<ReadStatus>) -> Color {
        match status {
            Some(ReadStatus::Reading) => self.reading,
            Some(ReadStatus::Complete) => self.complete,
            Some(ReadStatus::OnHold) => self.on_hold,
            Some(ReadStatus::Abandoned) => self.abandoned,
            None => self.default,
        }
    }
}

/// Every color the overlay paints with, parsed once and immutable after.
#[derive(Debug, Clone)]
pub struct Palette {
    pub track: StatusColors,
    pub fill: StatusColors,
    pub bar_border: Color,
    /// Fill override for the most-recently-opened item, when configured.
    pub last_opened_fill: Option<Color>,
    pub last_opened_border: Color,
    pub badge_background: Color,
    pub page_badge_background: Color,
    pub page_badge_text: Color,
    pub page_badge_border: Color,
    pub folder_badge_background: Color,
    pub folder_badge_text: Color,
}

impl Palette {
    /// Parse every color string in `config`.  Fails fast on the first bad
    /// string; call this once at startup, not per item.
    pub fn resolve(config: &OverlayConfig) -> Result<Self> {
        let c: &ColorConfig = &config.colors;
        Ok(Self {
            track: StatusColors::resolve("colors.track", &c.track)?,
            fill: StatusColors::resolve("colors.fill", &c.fill)?,
            bar_border: parse("colors.bar_border", &c.bar_border)?,
            last_opened_fill: if c.last_opened_fill.is_empty() {
                None
            } else {
                Some(parse("colors.last_opened_fill", &c.last_opened_fill)?)
            },
            last_opened_border: parse("colors.last_opened_border", &c.last_opened_border)?,
            badge_background: parse("colors.badge_background", &c.badge_background)?,
            page_badge_background: parse(
                "colors.page_badge_background",
                &c.page_badge_background,
            )?,
            page_badge_text: parse("colors.page_badge_text", &c.page_badge_text)?,
            page_badge_border: parse("colors.page_badge_border", &c.page_badge_border)?,
            folder_badge_background: parse(
                "colors.folder_badge_background",
                &c.folder_badge_background,
            )?,
            folder_badge_text: parse("colors.folder_badge_text", &c.folder_badge_text)?,
        })
    }
}

fn parse(key: &str, value: &str) -> Result<Color> {
    Color::from_hex(value).ok_or_else(|| OverlayError::ColorParse {
        key: key.to_string(),
        value: value.to_string(),
    })
}
