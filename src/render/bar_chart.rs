use crate::{documents::GameRecord, Status};
use plotters::prelude::*;
use std::{
    error::Error,
    path::{Path, PathBuf},
};

/// One horizontal bar. Position 0 is drawn at the bottom of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub hours: f64,
    pub position: usize,
}

pub struct BarChart {
    bars: Vec<Bar>,
}

impl BarChart {
    /// Builds the chart for games already ranked by play time. The plot
    /// stacks bars bottom-up, so the most played game gets the highest
    /// position to end up on top.
    pub fn new(ranked: &[&GameRecord]) -> Self {
        let count = ranked.len();
        BarChart {
            bars: ranked
                .iter()
                .enumerate()
                .map(|(rank, game)| Bar {
                    label: game.name.clone(),
                    hours: game.hours_played(),
                    position: count - 1 - rank,
                })
                .collect(),
        }
    }

    pub fn path(out_dir: &Path, user_id: &str, bar_count: usize) -> PathBuf {
        out_dir.join(format!("steam_bar{bar_count}_{user_id}.png"))
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn title(&self) -> String {
        format!("Top {} most played Steam games", self.bars.len())
    }

    pub fn draw(&self, path: &Path) -> Result<(), Status> {
        self.draw_chart(path)
            .map_err(|e| Status::render(format!("cannot draw '{}': {e}", path.display())))
    }

    fn draw_chart(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let count = self.bars.len();
        let height = CHART_HEADER + BAR_PITCH * count as u32;
        let root = BitMapBackend::new(path, (CHART_WIDTH, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let max_hours = self.bars.iter().map(|bar| bar.hours).fold(0.0, f64::max);
        let x_max = if max_hours > 0.0 { max_hours * 1.05 } else { 1.0 };
        let label_area = self
            .bars
            .iter()
            .map(|bar| bar.label.chars().count() as u32 * LABEL_CHAR_WIDTH)
            .max()
            .unwrap_or(0)
            .clamp(MIN_LABEL_AREA, MAX_LABEL_AREA);

        let mut chart = ChartBuilder::on(&root)
            .caption(self.title(), ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(label_area)
            .build_cartesian_2d(0f64..x_max, (0usize..count).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(count)
            .y_label_formatter(&|value| match value {
                SegmentValue::CenterOf(position) => self.label_at(*position),
                _ => String::new(),
            })
            .x_desc(X_AXIS_LABEL)
            .draw()?;

        chart.draw_series(
            Histogram::horizontal(&chart)
                .style(BAR_COLOR.filled())
                .margin(6)
                .data(self.bars.iter().map(|bar| (bar.position, bar.hours))),
        )?;

        root.present()?;
        Ok(())
    }

    fn label_at(&self, position: usize) -> String {
        self.bars
            .iter()
            .find(|bar| bar.position == position)
            .map(|bar| bar.label.clone())
            .unwrap_or_default()
    }
}

const X_AXIS_LABEL: &str = "Hours played";
const BAR_COLOR: RGBColor = RGBColor(27, 40, 56);
const CHART_WIDTH: u32 = 1024;
const CHART_HEADER: u32 = 120;
const BAR_PITCH: u32 = 36;
const LABEL_CHAR_WIDTH: u32 = 8;
const MIN_LABEL_AREA: u32 = 80;
const MAX_LABEL_AREA: u32 = 400;

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str, minutes_played: u64) -> GameRecord {
        GameRecord {
            name: name.to_owned(),
            minutes_played,
            ..Default::default()
        }
    }

    #[test]
    fn most_played_game_is_on_top() {
        let (a, b, c) = (game("A", 120), game("B", 600), game("C", 600));
        let ranked = vec![&b, &c, &a];

        let chart = BarChart::new(&ranked);

        assert_eq!(
            chart.bars(),
            &[
                Bar {
                    label: "B".to_owned(),
                    hours: 10.0,
                    position: 2,
                },
                Bar {
                    label: "C".to_owned(),
                    hours: 10.0,
                    position: 1,
                },
                Bar {
                    label: "A".to_owned(),
                    hours: 2.0,
                    position: 0,
                },
            ]
        );
        assert_eq!(chart.label_at(2), "B");
        assert_eq!(chart.label_at(0), "A");
        assert_eq!(chart.label_at(7), "");
    }

    #[test]
    fn title_counts_bars() {
        let a = game("A", 30);
        let chart = BarChart::new(&[&a]);

        assert_eq!(chart.title(), "Top 1 most played Steam games");
        assert_eq!(chart.bars()[0].hours, 0.5);
        assert_eq!(chart.bars()[0].position, 0);
    }

    #[test]
    fn path_names_bar_count() {
        assert_eq!(
            BarChart::path(Path::new("out"), "42", 10),
            PathBuf::from("out/steam_bar10_42.png")
        );
    }
}
