use crate::Status;
use async_trait::async_trait;
use tracing::instrument;

/// Capability to retrieve the body behind a URL.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, Status>;
}

/// `Fetch` over plain HTTP GET. Non-success statuses are errors.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, Status> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Status::fetch(format!("Failed to build http client: {e}")))?;
        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    #[instrument(level = "trace", skip(self))]
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, Status> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Status::fetch(format!("GET {url} returned {status}")));
        }
        Ok(resp.bytes().await?.to_vec())
    }
}

const USER_AGENT: &str = concat!("steam_played/", env!("CARGO_PKG_VERSION"));
