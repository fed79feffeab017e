use crate::Status;
use image::{imageops, DynamicImage, RgbImage};
use std::path::{Path, PathBuf};

use super::RenderConfig;

/// Grid of cover images. The canvas size is fixed by the config; cells whose
/// image never arrives stay black and oversized images are clipped.
pub struct Collage {
    config: RenderConfig,
    canvas: RgbImage,
}

impl Collage {
    pub fn new(config: RenderConfig) -> Self {
        Collage {
            canvas: RgbImage::new(config.canvas_width(), config.canvas_height()),
            config,
        }
    }

    pub fn path(out_dir: &Path, user_id: &str, image_count: usize) -> PathBuf {
        out_dir.join(format!("steam_top{image_count}_{user_id}.png"))
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    /// Pastes `image` into cell `index`. Indices past the grid are ignored.
    pub fn paste(&mut self, index: usize, image: &DynamicImage) {
        if index >= self.config.image_count() {
            return;
        }
        let (x, y) = self.config.cell_origin(index);
        imageops::overlay(&mut self.canvas, &image.to_rgb8(), x, y);
    }

    pub fn save(&self, path: &Path) -> Result<(), Status> {
        self.canvas
            .save(path)
            .map_err(|e| Status::render(format!("cannot write '{}': {e}", path.display())))
    }

    pub fn into_image(self) -> RgbImage {
        self.canvas
    }
}
