use serde::{Deserialize, Serialize};

/// One owned game as persisted in the user's CSV table.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct GameRecord {
    #[serde(rename = "names")]
    pub name: String,

    pub minutes_played: u64,

    #[serde(rename = "appid")]
    pub app_id: u64,

    pub logo_url: String,
    pub icon_url: String,
}

impl GameRecord {
    pub fn hours_played(&self) -> f64 {
        self.minutes_played as f64 / 60.0
    }
}
