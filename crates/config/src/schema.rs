use cover_core::Corner;
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `coverbar.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OverlayConfig {
    /// Cover frame geometry (outer frame → inner content rect).
    pub frame: FrameConfig,
    /// Progress bar dimensions and margins.
    pub bar: BarConfig,
    /// Feature flags.
    pub features: FeatureConfig,
    /// Circular status badge settings.
    pub status_badge: StatusBadgeConfig,
    /// Page-count corner badge settings.
    pub page_badge: PageBadgeConfig,
    /// Folder name/count badge settings.
    pub folder_badge: FolderBadgeConfig,
    /// All color strings (hex), parsed once at palette resolution.
    pub colors: ColorConfig,
}

/// Border and padding subtracted from the outer cover frame to obtain the
/// inner content rect all badge/bar geometry is relative to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub border_width: i32,
    pub padding: i32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            border_width: 1,
            padding: 2,
        }
    }
}

/// Progress bar geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Bar body height in pixels.
    pub height: i32,
    pub border_radius: i32,
    pub border_width: i32,
    /// Horizontal inset of the fill inside the track.
    pub fill_inset_x: i32,
    /// Vertical inset of the fill inside the track.
    pub fill_inset_y: i32,
    pub margin_left: i32,
    pub margin_right: i32,
    pub margin_bottom: i32,
    /// Width of the short right-anchored "complete" indicator.
    pub complete_width: i32,
    /// Gap between bar end and status badge in gap mode.
    pub badge_gap: i32,
    /// `true`: reserve `badge_size + badge_gap` before the badge.
    /// `false`: overlay mode — the bar tucks under the badge by half its size.
    pub badge_gap_mode: bool,
    /// Border width used when the last-opened emphasis moves to the bar
    /// (status badges globally off).
    pub last_opened_border_width: i32,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            height: 7,
            border_radius: 3,
            border_width: 1,
            fill_inset_x: 1,
            fill_inset_y: 1,
            margin_left: 5,
            margin_right: 5,
            margin_bottom: 5,
            complete_width: 14,
            badge_gap: 2,
            badge_gap_mode: true,
            last_opened_border_width: 2,
        }
    }
}

/// Global feature toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Scale bar width by a page-count-derived fraction.
    pub book_thick_bar: bool,
    /// Draw custom folder name/count badges (also gated on the host's own
    /// folder-label preference).
    pub style_folder_badges: bool,
    /// Master switch for circular status badges.
    pub show_status_badges: bool,
    /// Emit the per-paint geometry trace at debug level.
    pub debug_logging: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            book_thick_bar: false,
            style_folder_badges: true,
            show_status_badges: true,
            debug_logging: false,
        }
    }
}

/// Circular status badge settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBadgeConfig {
    /// Side of the square bounding box.  `0` = derive from the host's
    /// corner-mark size.
    pub background_size: i32,
    /// Icon edge length.  `0` = derive (two thirds of the background size).
    pub icon_size: i32,
    /// Ring width of the last-opened emphasis.
    pub border_width: i32,
    pub show_reading: bool,
    pub show_complete: bool,
    pub show_on_hold: bool,
    pub show_abandoned: bool,
}

impl Default for StatusBadgeConfig {
    fn default() -> Self {
        Self {
            background_size: 0,
            icon_size: 0,
            border_width: 2,
            show_reading: true,
            show_complete: true,
            show_on_hold: true,
            show_abandoned: true,
        }
    }
}

/// Anchor corner, the TOML-facing spelling of [`Corner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl BadgeCorner {
    pub const fn to_corner(self) -> Corner {
        match self {
            BadgeCorner::TopLeft => Corner::TopLeft,
            BadgeCorner::TopRight => Corner::TopRight,
            BadgeCorner::BottomLeft => Corner::BottomLeft,
            BadgeCorner::BottomRight => Corner::BottomRight,
        }
    }
}

/// Page-count corner badge settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageBadgeConfig {
    pub enabled: bool,
    pub corner: BadgeCorner,
    pub offset_x: i32,
    pub offset_y: i32,
    /// Explicit width; `0` = fit text plus padding.
    pub width: i32,
    /// Explicit height; `0` = fit text plus padding.
    pub height: i32,
    pub padding_x: i32,
    pub padding_y: i32,
    pub radius: i32,
    pub border_width: i32,
    pub font: String,
    pub font_size: f32,
}

impl Default for PageBadgeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            corner: BadgeCorner::BottomRight,
            offset_x: 2,
            offset_y: 2,
            width: 0,
            height: 0,
            padding_x: 4,
            padding_y: 1,
            radius: 4,
            border_width: 0,
            font: String::new(),
            font_size: 11.0,
        }
    }
}

/// Folder name/count badge settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderBadgeConfig {
    pub font: String,
    pub font_size: f32,
    pub radius: i32,
    pub padding_x: i32,
    pub padding_y: i32,
    /// Name banner offsets from the inner rect's top-left corner.
    pub name_offset_x: i32,
    pub name_offset_y: i32,
    /// Count badge offsets from the inner rect's bottom-left corner.
    pub count_offset_x: i32,
    pub count_offset_y: i32,
}

impl Default for FolderBadgeConfig {
    fn default() -> Self {
        Self {
            font: String::new(),
            font_size: 12.0,
            radius: 3,
            padding_x: 4,
            padding_y: 2,
            name_offset_x: 0,
            name_offset_y: 4,
            count_offset_x: 2,
            count_offset_y: 2,
        }
    }
}

/// Per-status color table.  `default` is mandatory — it is the fallback for
/// absent or unrecognized statuses; the optional entries override it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusColorTable {
    pub default: String,
    pub reading: Option<String>,
    pub complete: Option<String>,
    pub on_hold: Option<String>,
    pub abandoned: Option<String>,
}

impl StatusColorTable {
    fn with_default(default: &str) -> Self {
        Self {
            default: default.to_string(),
            reading: None,
            complete: None,
            on_hold: None,
            abandoned: None,
        }
    }
}

impl Default for StatusColorTable {
    fn default() -> Self {
        Self::with_default("#808080")
    }
}

/// All color strings, hex `#RRGGBB` / `#RRGGBBAA`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub track: StatusColorTable,
    pub fill: StatusColorTable,
    pub bar_border: String,
    /// Fill override for the most-recently-opened item; empty = none.
    pub last_opened_fill: String,
    /// Emphasis border for the most-recently-opened item.
    pub last_opened_border: String,
    pub badge_background: String,
    pub page_badge_background: String,
    pub page_badge_text: String,
    pub page_badge_border: String,
    pub folder_badge_background: String,
    pub folder_badge_text: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            track: StatusColorTable::with_default("#404040c0"),
            fill: StatusColorTable {
                default: "#cccccc".to_string(),
                reading: Some("#4fa3e0".to_string()),
                complete: Some("#53c272".to_string()),
                on_hold: Some("#e0b04f".to_string()),
                abandoned: Some("#c25353".to_string()),
            },
            bar_border: "#000000".to_string(),
            last_opened_fill: String::new(),
            last_opened_border: "#ffffff".to_string(),
            badge_background: "#303030e0".to_string(),
            page_badge_background: "#303030c0".to_string(),
            page_badge_text: "#f0f0f0".to_string(),
            page_badge_border: "#000000".to_string(),
            folder_badge_background: "#20202090".to_string(),
            folder_badge_text: "#ffffff".to_string(),
        }
    }
}
