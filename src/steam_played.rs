use clap::Parser;
use std::{path::PathBuf, time::Duration};
use steam_played::{
    api::HttpFetcher,
    library::{Collector, Credentials},
    render::{ArtKind, RenderConfig, Renderer},
    RunHistory, Tracing,
};
use tracing::{error, info, trace_span, warn};

/// Collects top games from a public Steam profile and renders a cover art
/// collage and a play time chart.
#[derive(Parser)]
struct Opts {
    /// Steam Web API developer key.
    api_key: String,

    /// Public Steam user id (steamid64).
    user_id: String,

    /// Number of rows in the collage.
    #[clap(short, long, default_value = "5")]
    rows: u32,

    /// Number of columns in the collage.
    #[clap(short, long, default_value = "5")]
    cols: u32,

    /// Width of an individual collage cell.
    #[clap(short, long, default_value = "200")]
    width: u32,

    /// Height of an individual collage cell.
    #[clap(short, long, default_value = "100")]
    tall: u32,

    /// Number of games in the play time chart, 0 skips the chart.
    #[clap(short, long, default_value = "10")]
    bars: usize,

    /// Specify if you don't want the visualizations.
    #[clap(short = 'v', long)]
    no_viz: bool,

    /// Specify if the data exists already and should be loaded from disk.
    #[clap(short = 'd', long)]
    reuse_data: bool,

    /// Directory for the saved table, images and logs.
    #[clap(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Pause between two image downloads, in milliseconds.
    #[clap(long, default_value = "0")]
    delay_ms: u64,

    /// Art shown in collage cells.
    #[clap(long, value_enum, default_value_t = ArtKind::Logo)]
    art: ArtKind,
}

impl Opts {
    fn credentials(&self) -> Credentials {
        Credentials {
            api_key: self.api_key.clone(),
            user_id: self.user_id.clone(),
        }
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            rows: self.rows,
            cols: self.cols,
            cell_width: self.width,
            cell_height: self.tall,
            bar_count: self.bars,
            pacing_delay: Duration::from_millis(self.delay_ms),
            art: self.art,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let opts: Opts = Opts::parse();

    Tracing::setup(&opts.out_dir)?;
    RunHistory::append(&opts.out_dir, std::env::args_os())?;

    let span = trace_span!("steam played", user_id = %opts.user_id);
    let _guard = span.enter();

    let http = HttpFetcher::new()?;

    let table = match Collector::new(&opts.out_dir)
        .collect(&opts.credentials(), !opts.reuse_data, &http)
        .await
    {
        Ok(table) => table,
        Err(status) => {
            error!("collect failed: {status}");
            return Err(status.into());
        }
    };

    if opts.no_viz {
        info!("Skipping viz");
        return Ok(());
    }

    info!("Generating viz");
    let report = match Renderer::new(&opts.out_dir)
        .render(&table, &opts.user_id, opts.render_config(), &http)
        .await
    {
        Ok(report) => report,
        Err(status) => {
            error!("render failed: {status}");
            return Err(status.into());
        }
    };

    if !report.skipped.is_empty() {
        warn!("{} collage cells left blank", report.skipped.len());
    }
    info!("Collage saved to {}", report.collage_path.display());
    if let Some(path) = &report.bar_chart_path {
        info!("Bar chart saved to {}", path.display());
    }

    Ok(())
}
