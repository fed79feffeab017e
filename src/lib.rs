pub mod api;
pub mod documents;
pub mod library;
pub mod logging;
pub mod render;

mod status;
pub use status::Status;

mod tracing;
pub use crate::tracing::{RunHistory, Tracing};
