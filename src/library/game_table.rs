use crate::{documents::GameRecord, Status};
use csv::{ReaderBuilder, WriterBuilder};
use itertools::Itertools;
use std::{
    cmp::Reverse,
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
};
use tracing::instrument;

/// A user's owned games, in the order the API returned them.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct GameTable {
    pub games: Vec<GameRecord>,
}

impl GameTable {
    pub fn new(games: Vec<GameRecord>) -> Self {
        GameTable { games }
    }

    /// Location of the persisted table for `user_id`.
    pub fn path(out_dir: &Path, user_id: &str) -> PathBuf {
        out_dir.join(format!("steam_owned_{user_id}.csv"))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Games by play time, most played first. Equal play times keep their
    /// table order.
    pub fn ranked(&self) -> Vec<&GameRecord> {
        self.games
            .iter()
            .sorted_by_key(|game| Reverse(game.minutes_played))
            .collect()
    }

    /// The `n` most played games, fewer if the table is smaller.
    pub fn top(&self, n: usize) -> Vec<&GameRecord> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Replaces whatever table is stored at `path`.
    #[instrument(level = "trace", skip(self), fields(games = self.games.len()))]
    pub fn write(&self, path: &Path) -> Result<(), Status> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Header is written by hand so that an empty table still reloads.
        let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
        writer.write_record(COLUMNS)?;
        for game in &self.games {
            writer.serialize(game)?;
        }
        writer.flush()?;

        Ok(())
    }

    #[instrument(level = "trace")]
    pub fn read(path: &Path) -> Result<Self, Status> {
        let csv_file = File::open(path).map_err(|e| {
            Status::storage(format!("cannot open '{}': {e}", path.display()))
        })?;
        let mut reader = ReaderBuilder::new().from_reader(BufReader::new(csv_file));

        let headers = reader.headers()?.clone();
        let missing = COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|h| h == **column))
            .collect_vec();
        if !missing.is_empty() {
            return Err(Status::storage(format!(
                "'{}' is missing columns: {}",
                path.display(),
                missing.iter().join(", ")
            )));
        }

        let mut games = vec![];
        for result in reader.deserialize::<GameRecord>() {
            games.push(result?);
        }

        Ok(GameTable { games })
    }
}

const COLUMNS: [&str; 5] = ["names", "minutes_played", "appid", "logo_url", "icon_url"];
