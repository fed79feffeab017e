use std::{
    ffi::OsStr,
    fs::{self, File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::Status;
use tracing::Level;
use tracing_subscriber::{fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt};

pub struct Tracing;

impl Tracing {
    /// Installs the process-wide subscriber. Info and above goes to stdout,
    /// warnings and errors are also appended to `<out_dir>/steam_played.log`.
    pub fn setup(out_dir: &Path) -> Result<(), Status> {
        let log_file = Mutex::new(open_append(&Self::log_path(out_dir))?);

        match tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::Layer::new()
                    .with_writer(std::io::stdout.with_max_level(Level::INFO)),
            )
            .with(
                // Persistent log only keeps what needs a second look.
                tracing_subscriber::fmt::Layer::new()
                    .with_ansi(false)
                    .with_writer(log_file.with_max_level(Level::WARN)),
            )
            .try_init()
        {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("{e}");
                Err(Status::storage(format!("Failed to setup tracing: {e}")))
            }
        }
    }

    pub fn log_path(out_dir: &Path) -> PathBuf {
        out_dir.join(LOG_FILE)
    }
}

/// Append-only record of every invocation's command line.
pub struct RunHistory;

impl RunHistory {
    /// Arguments that are not valid UTF-8 are written lossily.
    pub fn append<A: AsRef<OsStr>>(
        out_dir: &Path,
        args: impl IntoIterator<Item = A>,
    ) -> Result<(), Status> {
        let mut file = open_append(&Self::path(out_dir))?;
        let line = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            file,
            "{} {line}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        Ok(())
    }

    pub fn path(out_dir: &Path) -> PathBuf {
        out_dir.join(HISTORY_FILE)
    }
}

fn open_append(path: &Path) -> Result<File, Status> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Status::storage(format!("cannot open '{}': {e}", path.display())))
}

const LOG_FILE: &str = "steam_played.log";
const HISTORY_FILE: &str = "run_history.log";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_appends_one_line_per_run() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("out");

        RunHistory::append(&out_dir, ["steam_played".to_owned(), "key".to_owned()]).unwrap();
        RunHistory::append(&out_dir, ["steam_played".to_owned(), "-d".to_owned()]).unwrap();

        let history = fs::read_to_string(RunHistory::path(&out_dir)).unwrap();
        let lines = history.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" steam_played key"));
        assert!(lines[1].ends_with(" steam_played -d"));
    }

    #[cfg(unix)]
    #[test]
    fn history_keeps_non_utf8_arguments() {
        use std::{ffi::OsString, os::unix::ffi::OsStringExt};

        let dir = tempfile::tempdir().unwrap();
        let args = vec![
            OsString::from("steam_played"),
            OsString::from("--out-dir"),
            OsString::from_vec(vec![b'o', 0xff, b't']),
        ];

        RunHistory::append(dir.path(), args).unwrap();

        let history = fs::read_to_string(RunHistory::path(dir.path())).unwrap();
        assert!(history.trim_end().ends_with(" steam_played --out-dir o\u{FFFD}t"));
    }
}
