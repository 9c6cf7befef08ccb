use crate::models::{Property, PropertyId};
use anyhow::Result;
use async_trait::async_trait;

/// Where listings come from.
/// One implementation is active per run: the built-in catalog or the remote API.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Resolve a single property. `Ok(None)` means there is no such property.
    async fn fetch(&self, id: &PropertyId) -> Result<Option<Property>>;

    /// The full collection backing the listing view
    async fn list(&self) -> Result<Vec<Property>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
