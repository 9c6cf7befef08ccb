pub mod filter;
pub mod state;

pub use filter::{TypeFilter, DEFAULT_PAGE_SIZE};
pub use state::{ListingState, PageControl};
