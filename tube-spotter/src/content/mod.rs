//! Startup content: station list, station/line associations and the
//! line status feed, assembled into a [`Catalog`](crate::catalog::Catalog).
//!
//! Loading is the only fallible, asynchronous step. It must complete before
//! any proximity or resolver work happens.

mod error;
mod handle;
mod loader;

pub use error::LoadError;
pub use handle::CatalogHandle;
pub use loader::{ContentPaths, RetryPolicy, load_catalog, load_with_retry, read_records};
