use crate::listing::filter::{self, Page, TypeFilter};
use crate::models::ListingSnapshot;
use tracing::debug;

/// A pagination button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub number: usize,
    pub active: bool,
}

/// Listing store: the snapshot plus the user's current selection.
/// The visible page is re-derived on every read.
#[derive(Debug, Clone)]
pub struct ListingState {
    snapshot: ListingSnapshot,
    filter: TypeFilter,
    page: usize,
    page_size: usize,
}

impl ListingState {
    pub fn new(snapshot: ListingSnapshot, page_size: usize) -> Self {
        Self {
            snapshot,
            filter: TypeFilter::All,
            page: 1,
            page_size,
        }
    }

    pub fn filter(&self) -> TypeFilter {
        self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Switch tabs. Always lands on page 1.
    pub fn set_filter(&mut self, filter: TypeFilter) {
        debug!("Filter {} -> {}", self.filter, filter);
        self.filter = filter;
        self.page = 1;
    }

    /// Move to `page` if it exists for the current filter. Returns whether
    /// the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        if page == 0 || page > total {
            debug!("Ignoring page {} (total {})", page, total);
            return false;
        }
        self.page = page;
        true
    }

    pub fn total_pages(&self) -> usize {
        let count = filter::filter_properties(&self.snapshot.properties, self.filter).len();
        filter::total_pages(count, self.page_size)
    }

    pub fn visible(&self) -> Page<'_> {
        filter::visible_page(&self.snapshot.properties, self.filter, self.page, self.page_size)
    }

    /// Controls are hidden when everything fits on one page
    pub fn page_controls(&self) -> Vec<PageControl> {
        let total = self.total_pages();
        if total <= 1 {
            return Vec::new();
        }
        (1..=total)
            .map(|number| PageControl {
                number,
                active: number == self.page,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::filter::tests::eight_sale_two_rent;
    use crate::models::PropertyType;

    fn state() -> ListingState {
        ListingState::new(ListingSnapshot::new(eight_sale_two_rent()), 6)
    }

    #[test]
    fn starts_on_all_page_one() {
        let state = state();
        assert_eq!(state.filter(), TypeFilter::All);
        assert_eq!(state.page(), 1);
        assert_eq!(state.visible().items.len(), 6);
        assert_eq!(state.total_pages(), 2);
    }

    #[test]
    fn changing_filter_resets_page() {
        let mut state = state();
        assert!(state.set_page(2));

        for filter in TypeFilter::tabs() {
            state.set_filter(filter);
            assert_eq!(state.page(), 1, "filter {}", filter);
            if state.total_pages() > 1 {
                assert!(state.set_page(2));
            }
        }

        // re-selecting the active tab resets as well
        state.set_filter(TypeFilter::All);
        assert!(state.set_page(2));
        state.set_filter(TypeFilter::All);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn out_of_range_page_is_refused() {
        let mut state = state();
        assert!(!state.set_page(0));
        assert!(!state.set_page(3));
        assert_eq!(state.page(), 1);

        state.set_filter(TypeFilter::Only(PropertyType::Rent));
        assert!(!state.set_page(2));
    }

    #[test]
    fn rent_then_all_page_two() {
        let mut state = state();

        state.set_filter(TypeFilter::Only(PropertyType::Rent));
        let rent = state.visible();
        assert_eq!(rent.total_pages, 1);
        assert_eq!(rent.items.len(), 2);
        assert!(rent.items.iter().all(|p| p.kind == PropertyType::Rent));

        state.set_filter(TypeFilter::All);
        assert!(state.set_page(2));
        let page = state.visible();
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["7", "8", "9", "10"]);
    }

    #[test]
    fn controls_hidden_for_single_page() {
        let mut state = state();
        let controls = state.page_controls();
        assert_eq!(controls.len(), 2);
        assert!(controls[0].active);
        assert!(!controls[1].active);

        state.set_filter(TypeFilter::Only(PropertyType::Rent));
        assert!(state.page_controls().is_empty());
    }
}
