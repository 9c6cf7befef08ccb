pub mod http;
pub mod local;
pub mod traits;
pub mod view;

pub use http::HttpSource;
pub use local::StaticSource;
pub use traits::PropertySource;
pub use view::DetailView;

use crate::models::{Property, PropertyId};
use tracing::warn;

/// What the detail view shows
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Found(Property),
    NotFound,
}

impl DetailState {
    /// `Found` and `NotFound` stay put until the next navigation
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DetailState::Loading)
    }
}

/// Resolve `id` against `source`. Failures are logged and shown as not found.
pub async fn resolve_property(source: &dyn PropertySource, id: &PropertyId) -> DetailState {
    match source.fetch(id).await {
        Ok(Some(property)) => DetailState::Found(property),
        Ok(None) => DetailState::NotFound,
        Err(e) => {
            warn!("Lookup of {} via {} failed: {:#}", id, source.source_name(), e);
            DetailState::NotFound
        }
    }
}
