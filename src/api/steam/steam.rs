use crate::{api::Fetch, documents::GameRecord, logging::SteamCounters, Status};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

pub struct SteamApi {
    steam_key: String,
    steam_user_id: String,
}

impl SteamApi {
    pub fn new(steam_key: &str, steam_user_id: &str) -> SteamApi {
        SteamApi {
            steam_key: String::from(steam_key),
            steam_user_id: String::from(steam_user_id),
        }
    }

    /// Returns the owned-games endpoint for this user, free-to-play games
    /// and app info included.
    pub fn owned_games_uri(&self) -> String {
        format!(
            "{STEAM_HOST}{STEAM_GETOWNEDGAMES_SERVICE}?key={}&include_played_free_games=1&include_appinfo=1&format=json&steamid={}",
            self.steam_key, self.steam_user_id
        )
    }

    #[instrument(level = "trace", skip(self, http), fields(steam_id = %self.steam_user_id))]
    pub async fn get_owned_games(&self, http: &dyn Fetch) -> Result<Vec<GameRecord>, Status> {
        let body = match http.fetch(&self.owned_games_uri()).await {
            Ok(body) => body,
            Err(status) => {
                SteamCounters::fetch_owned_games_fail(&self.steam_user_id, &status);
                return Err(status);
            }
        };

        let resp = serde_json::from_slice::<SteamResponse>(&body).map_err(|e| {
            let status = Status::fetch(format!(
                "({}) Parse error: {e}\n Steam response: {}",
                self.steam_user_id,
                String::from_utf8_lossy(&body)
            ));
            SteamCounters::fetch_owned_games_fail(&self.steam_user_id, &status);
            status
        })?;
        info! {
            "steam games: {}", resp.response.games.len()
        }
        SteamCounters::fetch_owned_games(&self.steam_user_id, resp.response.games.len());

        Ok(resp
            .response
            .games
            .into_iter()
            .map(|entry| GameRecord {
                logo_url: art_url(entry.appid, &entry.img_logo_url),
                icon_url: art_url(entry.appid, &entry.img_icon_url),
                name: entry.name,
                minutes_played: entry.playtime_forever,
                app_id: entry.appid,
            })
            .collect())
    }
}

/// Image host path for one of an app's art files. The filename comes
/// verbatim from the API and is not checked for existence.
fn art_url(appid: u64, filename: &str) -> String {
    format!("{STEAM_IMG_HOST}/{appid}/{filename}.jpg")
}

#[derive(Debug, Serialize, Deserialize)]
struct SteamResponse {
    response: GetOwnedGamesResponse,
}

#[derive(Debug, Serialize, Deserialize)]
struct GetOwnedGamesResponse {
    // Private profiles answer with an empty response object.
    #[serde(default)]
    games: Vec<GameEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GameEntry {
    appid: u64,
    name: String,
    playtime_forever: u64,

    #[serde(default)]
    img_icon_url: String,

    #[serde(default)]
    img_logo_url: String,
}

const STEAM_HOST: &str = "http://api.steampowered.com";
const STEAM_GETOWNEDGAMES_SERVICE: &str = "/IPlayerService/GetOwnedGames/v0001/";
pub const STEAM_IMG_HOST: &str = "http://media.steampowered.com/steamcommunity/public/images/apps";
