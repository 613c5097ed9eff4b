//! Built-in catalog used when no properties file exists yet.

use chrono::{TimeZone, Utc};

use crate::models::{FurnishingStatus, Property, PropertyType};

/// The three listings a fresh install starts with.
pub fn seed_catalog() -> Vec<Property> {
    vec![
        Property {
            id: "p1".into(),
            owner_id: "o1".into(),
            title: "Luxury Glass Penthouse".into(),
            description: "Breathtaking 360-degree city views with floor-to-ceiling windows. \
                          This modern penthouse features high-end appliances, smart home \
                          automation, and a private rooftop garden."
                .into(),
            price: 85_000,
            area: "Bandra West".into(),
            location: "12 Sky Avenue, Mumbai".into(),
            sqft: 2_200,
            bedrooms: 3,
            bathrooms: 2,
            furnishing_status: FurnishingStatus::Furnished,
            property_type: PropertyType::Apartment,
            images: vec!["https://picsum.photos/seed/p1/800/600".into()],
            contact_details: "owner@penthouse.com".into(),
            created_at: Utc.with_ymd_and_hms(2023, 10, 1, 0, 0, 0).unwrap(),
        },
        Property {
            id: "p2".into(),
            owner_id: "o1".into(),
            title: "Cozy Scandinavian Studio".into(),
            description: "Perfect for minimalists! A bright and airy studio apartment with \
                          clever space-saving solutions. Located in a quiet neighborhood \
                          close to public transit."
                .into(),
            price: 22_000,
            area: "Indiranagar".into(),
            location: "44 Pine Street, Bengaluru".into(),
            sqft: 450,
            bedrooms: 1,
            bathrooms: 1,
            furnishing_status: FurnishingStatus::SemiFurnished,
            property_type: PropertyType::Studio,
            images: vec!["https://picsum.photos/seed/p2/800/600".into()],
            contact_details: "owner@studio.com".into(),
            created_at: Utc.with_ymd_and_hms(2023, 10, 5, 0, 0, 0).unwrap(),
        },
        Property {
            id: "p3".into(),
            owner_id: "o2".into(),
            title: "Family Friendly Villa".into(),
            description: "Spacious 4-bedroom villa with a large backyard and swimming pool. \
                          Ideal for families looking for comfort and privacy in an upscale \
                          gated community."
                .into(),
            price: 120_000,
            area: "Jubilee Hills".into(),
            location: "7 Green Valley, Hyderabad".into(),
            sqft: 3_500,
            bedrooms: 4,
            bathrooms: 3,
            furnishing_status: FurnishingStatus::Unfurnished,
            property_type: PropertyType::Villa,
            images: vec!["https://picsum.photos/seed/p3/800/600".into()],
            contact_details: "owner@villa.com".into(),
            created_at: Utc.with_ymd_and_hms(2023, 10, 10, 0, 0, 0).unwrap(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_three_distinct_listings() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 3);
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }
}
