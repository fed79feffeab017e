use std::path::Path;

use crate::Status;

use super::counters::*;

pub struct RenderCounters;

impl RenderCounters {
    pub fn output_written(kind: &str, path: &Path) {
        counter(
            "render_output_written",
            &format!("Wrote {kind} to {}", path.display()),
        )
    }

    pub fn output_fail(kind: &str, path: &Path, status: &Status) {
        error_counter(
            "render_output_fail",
            &format!("Failed to write {kind} to {}", path.display()),
            status,
        )
    }
}
