mod game_record;

pub use game_record::GameRecord;
