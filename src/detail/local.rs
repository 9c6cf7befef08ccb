use crate::catalog;
use crate::detail::traits::PropertySource;
use crate::models::{Property, PropertyId};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_DETAIL_DELAY: Duration = Duration::from_millis(800);

/// In-memory source with a simulated lookup latency
pub struct StaticSource {
    properties: Vec<Property>,
    latency: Duration,
}

impl StaticSource {
    pub fn new(properties: Vec<Property>, latency: Duration) -> Self {
        Self { properties, latency }
    }

    /// Source backed by the built-in sample catalog
    pub fn sample(latency: Duration) -> Self {
        Self::new(catalog::sample_properties(), latency)
    }
}

#[async_trait]
impl PropertySource for StaticSource {
    async fn fetch(&self, id: &PropertyId) -> Result<Option<Property>> {
        tokio::time::sleep(self.latency).await;

        let found = self.properties.iter().find(|p| &p.id == id).cloned();
        debug!("Static lookup for {}: {}", id, if found.is_some() { "hit" } else { "miss" });
        Ok(found)
    }

    async fn list(&self) -> Result<Vec<Property>> {
        Ok(self.properties.clone())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}
