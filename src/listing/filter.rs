use crate::models::{Property, PropertyType};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Active filter tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl TypeFilter {
    /// Tabs in display order
    pub fn tabs() -> [TypeFilter; 4] {
        [
            TypeFilter::All,
            TypeFilter::Only(PropertyType::Sale),
            TypeFilter::Only(PropertyType::Rent),
            TypeFilter::Only(PropertyType::Shortlet),
        ]
    }

    pub fn matches(&self, property: &Property) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(kind) => property.kind == *kind,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str("All"),
            TypeFilter::Only(kind) => write!(f, "{}", kind),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(TypeFilter::All)
        } else {
            s.parse().map(TypeFilter::Only)
        }
    }
}

/// One window of a filtered listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub items: Vec<&'a Property>,
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Keep items matching `filter`, in their original order
pub fn filter_properties(all: &[Property], filter: TypeFilter) -> Vec<&Property> {
    all.iter().filter(|p| filter.matches(p)).collect()
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice `items` into the 1-based `page`. Out-of-range pages (including 0)
/// come back empty.
pub fn paginate<'a>(items: &[&'a Property], page: usize, page_size: usize) -> Page<'a> {
    let total_pages = total_pages(items.len(), page_size);
    let window = if page == 0 || page > total_pages {
        Vec::new()
    } else {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(items.len());
        items[start..end].to_vec()
    };

    Page {
        items: window,
        number: page,
        total_pages,
        total_items: items.len(),
    }
}

/// Filter then paginate in one step
pub fn visible_page(all: &[Property], filter: TypeFilter, page: usize, page_size: usize) -> Page<'_> {
    let filtered = filter_properties(all, filter);
    paginate(&filtered, page, page_size)
}
