use crate::models::{Price, Property, PropertyId, PropertyType};
use tracing::info;

const SAMPLE_IMAGE: &str = "https://res.cloudinary.com/demo/image/upload/v1699025938/sample.jpg";

fn listing(
    id: i64,
    title: &str,
    kind: PropertyType,
    price: Price,
    status: Option<&str>,
    location: &str,
) -> Property {
    Property {
        id: PropertyId::from(id),
        title: title.to_string(),
        kind,
        price,
        status: status.map(str::to_string),
        location: location.to_string(),
        images: vec![SAMPLE_IMAGE.to_string()],
        description: None,
        area: None,
        tags: Vec::new(),
        approved: status == Some("Verified"),
    }
}

/// Built-in sample listings used when no remote API is configured
pub fn sample_properties() -> Vec<Property> {
    info!("📋 Loading built-in sample listings");

    let label = |s: &str| Price::Label(s.to_string());

    let mut properties = vec![
        listing(1, "Luxury 4-Bed Duplex", PropertyType::Sale, label("₦150,000,000"), Some("Verified"), "Lekki Phase 1, Lagos"),
        listing(2, "Modern 2-Bed Apartment", PropertyType::Rent, label("₦2,500,000/year"), Some("New"), "Gwarinpa, Abuja"),
        listing(3, "Airbnb Shortlet - Ikoyi", PropertyType::Shortlet, label("₦80,000/night"), Some("Limited Offer"), "Ikoyi, Lagos"),
        listing(4, "5-Bed Detached Mansion", PropertyType::Sale, Price::Amount(420_000_000), Some("Verified"), "Banana Island, Lagos"),
        listing(5, "3-Bed Terrace", PropertyType::Sale, Price::Amount(85_000_000), None, "Ajah, Lagos"),
        listing(6, "Studio Apartment", PropertyType::Rent, label("₦1,200,000/year"), Some("New"), "Yaba, Lagos"),
        listing(7, "Penthouse Shortlet", PropertyType::Shortlet, label("₦150,000/night"), None, "Victoria Island, Lagos"),
        listing(8, "Semi-Detached Duplex", PropertyType::Sale, Price::Amount(120_000_000), None, "Maitama, Abuja"),
        listing(9, "Mini Flat", PropertyType::Rent, label("₦800,000/year"), None, "Surulere, Lagos"),
        listing(10, "Plot of Land (600 sqm)", PropertyType::Sale, Price::Amount(35_000_000), Some("Verified"), "Epe, Lagos"),
        listing(11, "Serviced 1-Bed Shortlet", PropertyType::Shortlet, label("₦45,000/night"), Some("New"), "Wuse 2, Abuja"),
        listing(12, "4-Bed Townhouse", PropertyType::Rent, label("₦6,000,000/year"), None, "Lekki Phase 1, Lagos"),
    ];

    properties[0].description = Some(
        "Fully detached duplex with a private pool, fitted kitchen and a boys' quarters.".to_string(),
    );
    properties[0].area = Some("450 sqm".to_string());
    properties[0].tags = vec!["Pool".to_string(), "BQ".to_string()];
    properties[3].images.push(SAMPLE_IMAGE.replace("sample", "sample_2"));

    properties
}
