pub mod color;
pub mod error;
pub mod facts;
pub mod geometry;
pub mod host;
pub mod icon;

pub use color::Color;
pub use error::{OverlayError, Result};
pub use facts::{ItemFacts, ReadStatus};
pub use geometry::{Circle, Corner, Rect};
pub use host::{BaseMode, BaseRenderer, DrawSurface, FontId, HostEnv, HostSnapshot, TextMetrics, TextShaper};
pub use icon::IconId;
