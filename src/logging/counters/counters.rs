use tracing::{error, info, warn};

use crate::{documents::GameRecord, Status};

pub fn counter(name: &str, description: &str) {
    info!(
        labels.log_type = "counters",
        labels.counter = name,
        description
    );
}

pub fn warning_counter(name: &str, description: &str, status: &Status) {
    warn!(
        labels.log_type = "counters",
        labels.counter_type = "warning",
        labels.status = status.to_string(),
        labels.counter = name,
        description
    );
}

pub fn error_counter(name: &str, description: &str, status: &Status) {
    error!(
        labels.log_type = "counters",
        labels.counter_type = "error",
        labels.status = status.to_string(),
        labels.counter = name,
        description
    );
}

pub fn game_record_description(record: &GameRecord) -> String {
    format!(
        "'{}', steam: {}, played: {}m",
        record.name, record.app_id, record.minutes_played
    )
}
