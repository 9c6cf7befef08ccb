//! Plain-text rendering of the listing and detail views.
//! Nothing here decides anything; it only formats state it is handed.

use crate::detail::DetailState;
use crate::listing::{ListingState, PageControl, TypeFilter};
use crate::models::{Property, PropertyId};

pub const CURRENCY: &str = "₦";

const DESCRIPTION_FALLBACK: &str = "This modern property offers exceptional design and functionality. \
Perfect for families or investors looking for comfort and convenience in a prime location.";

/// Append one line of output
fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}

pub fn property_path(id: &PropertyId) -> String {
    format!("/property/{}", id)
}

pub fn booking_path(id: &PropertyId) -> String {
    format!("/book/{}", id)
}

pub fn skeleton_cards(count: usize) -> String {
    let mut out = String::new();
    for _ in 0..count {
        out.push_str("┌──────────────────────┐\n");
        out.push_str("│ ░░░░░░░░░░░░░░░░     │\n");
        out.push_str("│ ░░░░░░░░░░           │\n");
        out.push_str("│ ░░░░░░               │\n");
        out.push_str("└──────────────────────┘\n");
    }
    out
}

pub fn property_card(property: &Property) -> String {
    let mut out = String::new();

    let mut badges = Vec::new();
    if let Some(status) = &property.status {
        badges.push(format!("[{}]", status));
    }
    if property.approved {
        badges.push("[✔ Verified]".to_string());
    }

    line(&mut out, &property.title);
    if !badges.is_empty() {
        line(&mut out, format!("   {}", badges.join(" ")));
    }
    line(&mut out, format!("   {}", property.location));
    line(&mut out, format!("   {}  ({})", property.price.display(CURRENCY), property.kind));
    if let Some(image) = property.primary_image() {
        line(&mut out, format!("   Image: {}", image));
    }
    line(&mut out, format!("   View Details → {}", property_path(&property.id)));
    out
}

pub fn filter_tabs(active: TypeFilter) -> String {
    TypeFilter::tabs()
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab)
            } else {
                format!(" {} ", tab)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Empty when there is nothing to page through
pub fn pagination(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|control| {
            if control.active {
                format!("[{}]", control.number)
            } else {
                format!(" {} ", control.number)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn listing(state: &ListingState, loading: bool, skeletons: usize) -> String {
    let mut out = String::new();
    line(&mut out, "Browse Properties");
    line(&mut out, filter_tabs(state.filter()));
    line(&mut out, "");

    if loading {
        out.push_str(&skeleton_cards(skeletons));
        return out;
    }

    let page = state.visible();
    line(&mut out, format!("{} properties", page.total_items));
    if page.items.is_empty() {
        line(&mut out, "No properties to show.");
    }
    for (i, property) in page.items.iter().enumerate() {
        let number = (page.number - 1) * state.page_size() + i + 1;
        line(&mut out, format!("{}. {}", number, property_card(property)));
    }

    let controls = pagination(&state.page_controls());
    if !controls.is_empty() {
        line(&mut out, format!("Pages: {}", controls));
    }
    out
}

pub fn detail(state: &DetailState) -> String {
    let property = match state {
        DetailState::Loading => return "Loading property...\n".to_string(),
        DetailState::NotFound => return "Property not found.\n".to_string(),
        DetailState::Found(property) => property,
    };

    let mut out = String::new();
    line(&mut out, "← Back to Properties");
    line(&mut out, "");

    if property.images.is_empty() {
        line(&mut out, "(no images)");
    }
    for (i, image) in property.images.iter().enumerate() {
        line(&mut out, format!("Image {}/{}: {}", i + 1, property.images.len(), image));
    }
    out.push('\n');

    line(&mut out, &property.title);
    line(&mut out, format!("📍 {}", property.location));
    line(&mut out, property.price.display(CURRENCY));
    match &property.status {
        Some(status) => line(&mut out, format!("[{}] [{}]", property.kind, status)),
        None => line(&mut out, format!("[{}]", property.kind)),
    }
    if property.approved {
        line(&mut out, "✔ Verified listing");
    }
    if let Some(area) = &property.area {
        line(&mut out, format!("Area: {}", area));
    }
    if !property.tags.is_empty() {
        line(&mut out, format!("Tags: {}", property.tags.join(", ")));
    }
    line(&mut out, "");
    line(&mut out, property.description.as_deref().unwrap_or(DESCRIPTION_FALLBACK));
    line(&mut out, "");
    line(&mut out, format!("Book a Visit → {}", booking_path(&property.id)));
    out
}
