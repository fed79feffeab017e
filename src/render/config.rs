use crate::{documents::GameRecord, Status};
use std::time::Duration;

/// Which of a game's two art files the collage shows.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArtKind {
    #[default]
    Logo,
    Icon,
}

impl ArtKind {
    pub fn url(self, record: &GameRecord) -> &str {
        match self {
            ArtKind::Logo => &record.logo_url,
            ArtKind::Icon => &record.icon_url,
        }
    }
}

/// Layout of the rendered outputs. Sizes derived from the grid are computed
/// on demand so they always agree with `rows`, `cols` and the cell size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub rows: u32,
    pub cols: u32,
    pub cell_width: u32,
    pub cell_height: u32,

    /// Bars in the play time chart, 0 disables it.
    pub bar_count: usize,

    /// Pause between two image downloads.
    pub pacing_delay: Duration,

    pub art: ArtKind,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            rows: 5,
            cols: 5,
            cell_width: 200,
            cell_height: 100,
            bar_count: 10,
            pacing_delay: Duration::ZERO,
            art: ArtKind::Logo,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), Status> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Status::invalid_argument(format!(
                "collage grid must have at least one cell, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(Status::invalid_argument(format!(
                "collage cells must not be empty, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }

        let width = self.cols.checked_mul(self.cell_width);
        let height = self.rows.checked_mul(self.cell_height);
        let cells = (self.rows as usize).checked_mul(self.cols as usize);
        if width.is_none() || height.is_none() || cells.is_none() {
            return Err(Status::invalid_argument(format!(
                "collage of {}x{} cells of {}x{} pixels is too large",
                self.rows, self.cols, self.cell_width, self.cell_height
            )));
        }
        Ok(())
    }

    /// Number of games shown in the collage.
    pub fn image_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn canvas_width(&self) -> u32 {
        self.cols * self.cell_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.rows * self.cell_height
    }

    /// Top-left pixel where the image of the `index`-th ranked game goes.
    /// Cells are filled row by row.
    pub fn cell_origin(&self, index: usize) -> (i64, i64) {
        let cols = self.cols as usize;
        let col = (index % cols) as i64;
        let row = (index / cols) as i64;
        (
            col * self.cell_width as i64 + CELL_MARGIN_X,
            row * self.cell_height as i64 + CELL_MARGIN_Y,
        )
    }
}

pub const CELL_MARGIN_X: i64 = 10;
pub const CELL_MARGIN_Y: i64 = 20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_sizes_follow_grid() {
        let config = RenderConfig {
            rows: 2,
            cols: 3,
            cell_width: 50,
            cell_height: 40,
            ..Default::default()
        };

        assert_eq!(config.image_count(), 6);
        assert_eq!(config.canvas_width(), 150);
        assert_eq!(config.canvas_height(), 80);
    }

    #[test]
    fn cells_are_row_major_with_margin() {
        let config = RenderConfig {
            rows: 2,
            cols: 3,
            cell_width: 50,
            cell_height: 40,
            ..Default::default()
        };

        assert_eq!(config.cell_origin(0), (10, 20));
        assert_eq!(config.cell_origin(2), (110, 20));
        assert_eq!(config.cell_origin(3), (10, 60));
        assert_eq!(config.cell_origin(5), (110, 60));
    }

    #[test]
    fn empty_grid_is_rejected() {
        let config = RenderConfig {
            cols: 0,
            ..Default::default()
        };

        assert!(matches!(config.validate(), Err(Status::InvalidArgument(_))));
        assert_eq!(RenderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let wide = RenderConfig {
            rows: 1,
            cols: 70_000,
            cell_width: 70_000,
            ..Default::default()
        };
        let tall = RenderConfig {
            rows: 70_000,
            cell_height: 70_000,
            ..Default::default()
        };

        assert!(matches!(wide.validate(), Err(Status::InvalidArgument(_))));
        assert!(matches!(tall.validate(), Err(Status::InvalidArgument(_))));
    }

    #[test]
    fn art_kind_selects_url() {
        let record = GameRecord {
            logo_url: "logo".to_owned(),
            icon_url: "icon".to_owned(),
            ..Default::default()
        };

        assert_eq!(ArtKind::Logo.url(&record), "logo");
        assert_eq!(ArtKind::Icon.url(&record), "icon");
    }
}
