pub mod schema;

pub use schema::{
    BadgeCorner, BarConfig, ColorConfig, FeatureConfig, FolderBadgeConfig, FrameConfig,
    OverlayConfig, PageBadgeConfig, StatusBadgeConfig, StatusColorTable,
};

use cover_core::{OverlayError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `OverlayConfig::default()`
/// if the file doesn't exist so the overlay always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<OverlayConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(OverlayConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| OverlayError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| OverlayError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("coverbar").join("coverbar.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load("/nonexistent/coverbar.toml").unwrap();
        assert_eq!(cfg.bar.height, OverlayConfig::default().bar.height);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            f,
            r##"
[bar]
height = 9

[features]
book_thick_bar = true

[page_badge]
corner = "bottom_left"

[colors.fill]
default = "#123456"
"##
        )
        .unwrap();

        let cfg = load(f.path()).unwrap();
        assert_eq!(cfg.bar.height, 9);
        assert!(cfg.features.book_thick_bar);
        assert_eq!(cfg.page_badge.corner, BadgeCorner::BottomLeft);
        assert_eq!(cfg.colors.fill.default, "#123456");
        // Untouched sections keep their defaults.
        assert_eq!(cfg.bar.margin_left, 5);
        assert!(cfg.features.show_status_badges);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[bar\nheight = ").unwrap();
        assert!(load(f.path()).is_err());
    }
}
