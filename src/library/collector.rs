use crate::{
    api::{Fetch, SteamApi},
    Status,
};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use super::GameTable;

/// Steam Web API key and the public profile it is used against.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub api_key: String,
    pub user_id: String,
}

/// Produces a user's `GameTable`, either from the Steam API or from the copy
/// saved by a previous run.
pub struct Collector {
    out_dir: PathBuf,
}

impl Collector {
    pub fn new(out_dir: &Path) -> Self {
        Collector {
            out_dir: out_dir.to_path_buf(),
        }
    }

    /// With `use_remote` the owned-games list is fetched and the saved table
    /// is replaced. Otherwise the saved table is loaded as is.
    #[instrument(level = "trace", skip(self, credentials, http), fields(user_id = %credentials.user_id))]
    pub async fn collect(
        &self,
        credentials: &Credentials,
        use_remote: bool,
        http: &dyn Fetch,
    ) -> Result<GameTable, Status> {
        let path = GameTable::path(&self.out_dir, &credentials.user_id);

        if use_remote {
            info!("Downloading from steam api");
            let steam = SteamApi::new(&credentials.api_key, &credentials.user_id);
            let table = GameTable::new(steam.get_owned_games(http).await?);

            table.write(&path)?;
            info!("Saved {} games to {}", table.len(), path.display());
            Ok(table)
        } else {
            info!("Skipping steam api, loading from {}", path.display());
            GameTable::read(&path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves one canned body and counts how often it was asked.
    struct StubSteam {
        body: Result<Vec<u8>, Status>,
        calls: AtomicUsize,
    }

    impl StubSteam {
        fn new(body: Result<&str, Status>) -> Self {
            StubSteam {
                body: body.map(|b| b.as_bytes().to_vec()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Fetch for StubSteam {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>, Status> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.body.clone()
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            api_key: "KEY".to_owned(),
            user_id: "7656".to_owned(),
        }
    }

    const OWNED_GAMES: &str = r#"{"response": {"game_count": 3, "games": [
        {"appid": 1, "name": "A", "playtime_forever": 120, "img_icon_url": "i1", "img_logo_url": "l1"},
        {"appid": 2, "name": "B", "playtime_forever": 600, "img_icon_url": "i2", "img_logo_url": "l2"},
        {"appid": 3, "name": "C", "playtime_forever": 600, "img_icon_url": "i3", "img_logo_url": "l3"}
    ]}}"#;

    #[tokio::test]
    async fn remote_collect_persists_table() {
        let dir = tempfile::tempdir().unwrap();
        let http = StubSteam::new(Ok(OWNED_GAMES));
        let collector = Collector::new(dir.path());

        let table = collector.collect(&credentials(), true, &http).await.unwrap();

        assert_eq!(http.calls(), 1);
        assert_eq!(table.len(), 3);
        let saved = GameTable::read(&GameTable::path(dir.path(), "7656")).unwrap();
        assert_eq!(saved, table);
    }

    #[tokio::test]
    async fn reuse_collect_loads_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let collector = Collector::new(dir.path());
        let remote = collector
            .collect(&credentials(), true, &StubSteam::new(Ok(OWNED_GAMES)))
            .await
            .unwrap();

        let offline = StubSteam::new(Err(Status::fetch("no network")));
        let table = collector.collect(&credentials(), false, &offline).await.unwrap();

        assert_eq!(offline.calls(), 0);
        assert_eq!(table, remote);
    }

    #[tokio::test]
    async fn reuse_without_cache_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let offline = StubSteam::new(Err(Status::fetch("no network")));

        let status = Collector::new(dir.path())
            .collect(&credentials(), false, &offline)
            .await
            .unwrap_err();

        assert!(status.is_storage());
    }

    #[tokio::test]
    async fn remote_failure_keeps_previous_table() {
        let dir = tempfile::tempdir().unwrap();
        let collector = Collector::new(dir.path());
        collector
            .collect(&credentials(), true, &StubSteam::new(Ok(OWNED_GAMES)))
            .await
            .unwrap();

        let status = collector
            .collect(
                &credentials(),
                true,
                &StubSteam::new(Err(Status::fetch("GET returned 500"))),
            )
            .await
            .unwrap_err();

        assert!(status.is_fetch());
        let saved = GameTable::read(&GameTable::path(dir.path(), "7656")).unwrap();
        assert_eq!(saved.len(), 3);
    }
}
