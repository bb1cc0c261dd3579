//! coverbar — cover-thumbnail decoration engine, demo renderer.
//!
//! Renders a small sample shelf with the software raster backend and writes
//! it to `shelf.png`.  Run with:  `RUST_LOG=debug coverbar [config.toml]`

use anyhow::Result;
use cover_core::{Color, ItemFacts, ReadStatus, Rect};
use cover_overlay::{Compositor, OverlayContext};
use cover_raster::{FlatBase, MonoShaper, RasterSurface, StaticHostEnv};
use tracing_subscriber::EnvFilter;

const COVER_W: i32 = 120;
const COVER_H: i32 = 180;
const GAP: i32 = 12;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("coverbar v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args()
        .nth(1)
        .map(Into::into)
        .unwrap_or_else(cover_config::default_path);
    let mut cfg = cover_config::load(&config_path)?;
    cfg.features.debug_logging = true;

    let env = StaticHostEnv {
        last_opened_path: Some("/shelf/Current Read P(410).epub".to_string()),
        ..StaticHostEnv::default()
    };
    let mut shaper = MonoShaper::new();
    let compositor = Compositor::new(OverlayContext::new(cfg, &env, &mut shaper)?);

    let items = sample_shelf();
    let cols = items.len() as i32;
    let mut surface = RasterSurface::new(
        cols * (COVER_W + GAP) + GAP,
        COVER_H + 2 * GAP,
        Color::from_hex("#14141c").unwrap(),
    );
    let mut base = FlatBase::new(Color::from_hex("#3a3a4a").unwrap());

    for (i, facts) in items.iter().enumerate() {
        let cover = Rect::new(GAP + i as i32 * (COVER_W + GAP), GAP, COVER_W, COVER_H);
        compositor.paint(facts, cover, &mut surface, &mut base, &shaper);
    }

    surface.save_png("shelf.png")?;
    tracing::info!("wrote shelf.png");
    Ok(())
}

fn sample_shelf() -> Vec<ItemFacts> {
    let mut reading = ItemFacts::book("/shelf/Current Read P(410).epub");
    reading.percent_finished = Some(0.62);
    reading.status = Some(ReadStatus::Reading);
    reading.been_opened = true;

    let mut fresh = ItemFacts::book("/shelf/Unread P(95).epub");
    fresh.percent_finished = Some(0.0);

    let mut done = ItemFacts::book("/shelf/Finished.epub");
    done.status = Some(ReadStatus::Complete);
    done.been_opened = true;

    let mut parked = ItemFacts::book("/shelf/Paused P(650).epub");
    parked.percent_finished = Some(0.31);
    parked.status = Some(ReadStatus::OnHold);
    parked.been_opened = true;

    let mut series = ItemFacts::directory("Series");
    series.directory_summary = Some("24 books, 3 folders".to_string());

    let mut archive = ItemFacts::directory("Archive");
    archive.directory_summary = Some("10 books, 0 folders".to_string());

    vec![reading, fresh, done, parked, series, archive]
}
