mod http;
mod steam;

pub use http::{Fetch, HttpFetcher};
pub use steam::*;
