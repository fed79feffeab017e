use crate::{
    api::Fetch,
    documents::GameRecord,
    library::GameTable,
    logging::{RenderCounters, SteamCounters},
    Status,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, instrument};

use super::{BarChart, Collage, RenderConfig};

/// A collage cell left blank because its image could not be used.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedImage {
    pub index: usize,
    pub name: String,
    pub url: String,
    pub reason: Status,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderReport {
    pub collage_path: PathBuf,
    pub bar_chart_path: Option<PathBuf>,
    pub skipped: Vec<SkippedImage>,
}

pub struct Renderer {
    out_dir: PathBuf,
}

impl Renderer {
    pub fn new(out_dir: &Path) -> Self {
        Renderer {
            out_dir: out_dir.to_path_buf(),
        }
    }

    /// Writes the top games collage and, when `bar_count` is positive, the
    /// play time chart. Images that fail to download or decode are reported
    /// in `RenderReport::skipped`; failing to write an output is an error.
    #[instrument(level = "trace", skip(self, table, config, http), fields(games = table.len()))]
    pub async fn render(
        &self,
        table: &GameTable,
        user_id: &str,
        config: RenderConfig,
        http: &dyn Fetch,
    ) -> Result<RenderReport, Status> {
        config.validate()?;
        fs::create_dir_all(&self.out_dir).map_err(|e| {
            Status::render(format!("cannot create '{}': {e}", self.out_dir.display()))
        })?;

        let top = table.top(config.image_count());
        let (collage, skipped) = build_collage(&top, config, http).await;
        let collage_path = Collage::path(&self.out_dir, user_id, config.image_count());
        write_output("collage", &collage_path, |path| collage.save(path))?;

        let bar_chart_path = match config.bar_count {
            0 => None,
            _ if table.is_empty() => None,
            bar_count => {
                let chart = BarChart::new(&table.top(bar_count));
                let path = BarChart::path(&self.out_dir, user_id, bar_count);
                write_output("bar chart", &path, |path| chart.draw(path))?;
                Some(path)
            }
        };

        Ok(RenderReport {
            collage_path,
            bar_chart_path,
            skipped,
        })
    }
}

/// Fetches and pastes art for `games` in rank order. Sequential on purpose,
/// with `pacing_delay` between downloads.
async fn build_collage(
    games: &[&GameRecord],
    config: RenderConfig,
    http: &dyn Fetch,
) -> (Collage, Vec<SkippedImage>) {
    let mut collage = Collage::new(config);
    let mut skipped = vec![];

    for (index, game) in games.iter().enumerate() {
        if index > 0 && !config.pacing_delay.is_zero() {
            tokio::time::sleep(config.pacing_delay).await;
        }

        let url = config.art.url(game);
        let image = match http.fetch(url).await {
            Ok(bytes) => image::load_from_memory(&bytes)
                .map_err(|e| Status::fetch(format!("cannot decode {url}: {e}"))),
            Err(status) => Err(status),
        };

        match image {
            Ok(image) => collage.paste(index, &image),
            Err(status) => {
                SteamCounters::fetch_art_fail(game, url, &status);
                skipped.push(SkippedImage {
                    index,
                    name: game.name.clone(),
                    url: url.to_owned(),
                    reason: status,
                });
            }
        }
    }

    info!(
        "Collage has {} of {} images",
        games.len() - skipped.len(),
        config.image_count()
    );
    (collage, skipped)
}

fn write_output(
    kind: &str,
    path: &Path,
    write: impl FnOnce(&Path) -> Result<(), Status>,
) -> Result<(), Status> {
    match write(path) {
        Ok(()) => {
            RenderCounters::output_written(kind, path);
            Ok(())
        }
        Err(status) => {
            RenderCounters::output_fail(kind, path, &status);
            Err(status)
        }
    }
}
