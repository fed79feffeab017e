mod counters;
mod render_counters;
mod steam_counters;

pub use render_counters::RenderCounters;
pub use steam_counters::SteamCounters;
