use crate::detail::{http, local};
use crate::listing::{TypeFilter, DEFAULT_PAGE_SIZE};
use crate::loading;
use crate::models::PropertyId;
use anyhow::Result;
use clap::Parser;
use std::time::Duration;

/// Browse property listings from the built-in catalog or a remote API
#[derive(Debug, Clone, Parser)]
#[command(name = "estate-listings", version)]
pub struct Config {
    /// Origin of the listings API. Without it the built-in catalog is used.
    #[arg(long, env = "ESTATE_API_BASE")]
    pub api_base: Option<String>,

    /// Listings per page
    #[arg(long, env = "ESTATE_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Filter tab: All, Sale, Rent or Shortlet
    #[arg(long, default_value = "All")]
    pub filter: TypeFilter,

    /// Page to show after filtering
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Also open the detail view for this property
    #[arg(long)]
    pub property: Option<PropertyId>,

    #[arg(long, default_value_t = loading::DEFAULT_LISTING_DELAY.as_millis() as u64)]
    pub listing_delay_ms: u64,

    #[arg(long, default_value_t = local::DEFAULT_DETAIL_DELAY.as_millis() as u64)]
    pub detail_delay_ms: u64,

    /// Request timeout for the listings API
    #[arg(long, default_value_t = http::DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("Page size must be at least 1");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("Timeout must be at least 1 second");
        }
        Ok(())
    }

    pub fn listing_delay(&self) -> Duration {
        Duration::from_millis(self.listing_delay_ms)
    }

    pub fn detail_delay(&self) -> Duration {
        Duration::from_millis(self.detail_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
