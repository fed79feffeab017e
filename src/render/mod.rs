mod bar_chart;
mod collage;
mod config;
mod renderer;

pub use bar_chart::{Bar, BarChart};
pub use collage::Collage;
pub use config::{ArtKind, RenderConfig, CELL_MARGIN_X, CELL_MARGIN_Y};
pub use renderer::{RenderReport, Renderer, SkippedImage};
