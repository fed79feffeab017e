mod steam;

pub use steam::{SteamApi, STEAM_IMG_HOST};
