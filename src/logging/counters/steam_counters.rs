use crate::{documents::GameRecord, Status};

use super::counters::*;

pub struct SteamCounters;

impl SteamCounters {
    pub fn fetch_owned_games(steam_id: &str, game_count: usize) {
        counter(
            "steam_fetch_owned_games",
            &format!("Steam owned games for {steam_id}: {game_count}"),
        )
    }

    pub fn fetch_owned_games_fail(steam_id: &str, status: &Status) {
        error_counter(
            "steam_fetch_owned_games_fail",
            &format!("Steam owned games fetch failed for {steam_id}"),
            status,
        )
    }

    pub fn fetch_art_fail(record: &GameRecord, url: &str, status: &Status) {
        warning_counter(
            "steam_fetch_art_fail",
            &format!(
                "Steam art fetch failed: {} ({url})",
                game_record_description(record)
            ),
            status,
        )
    }
}
