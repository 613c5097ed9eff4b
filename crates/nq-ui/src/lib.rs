//! # nq-ui
//!
//! Askama templates for every NestQuest screen. The structs here are the
//! whole contract between the web layer and the markup: handlers build a
//! template, render it, and ship the HTML.

use askama::Template;

use nq_core::filter::TypeFacet;
use nq_core::models::{
    FurnishingStatus, Property, PropertyDraft, PropertyType, RentalRequest, User,
};

/// The filter chips shown on the renter dashboard, in display order.
pub const FACET_CHIPS: [&str; 5] = ["All", "House", "Apartment", "Villa", "Studio"];

/// Prefilled inquiry message on the detail page.
pub const DEFAULT_INQUIRY_MESSAGE: &str =
    "Hi! I am interested in this property. Is it available for viewing?";

mod filters {
    /// Thousands-grouped rent figure: 85000 -> "85,000".
    pub fn inr(value: &i64) -> askama::Result<String> {
        let digits = value.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            let remaining = digits.len() - i;
            if i > 0 && remaining % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        if *value < 0 {
            grouped.insert(0, '-');
        }
        Ok(grouped)
    }
}

/// One chip in the property-type facet row.
pub struct FacetChip {
    pub label: String,
    pub active: bool,
}

/// One `<option>` in a form select.
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate<'a> {
    pub user: Option<&'a User>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    pub user: Option<&'a User>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "renter_dashboard.html")]
pub struct RenterDashboardTemplate<'a> {
    pub user: Option<&'a User>,
    pub name: &'a str,
    pub query: &'a str,
    pub chips: Vec<FacetChip>,
    pub recommended: Vec<&'a Property>,
    pub recommending: bool,
    pub listings: Vec<&'a Property>,
}

impl<'a> RenterDashboardTemplate<'a> {
    /// Builds the facet chip row with the active facet marked.
    pub fn chips_for(facet: TypeFacet) -> Vec<FacetChip> {
        FACET_CHIPS
            .iter()
            .map(|label| FacetChip {
                label: (*label).to_string(),
                active: facet.to_string() == *label,
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "owner_dashboard.html")]
pub struct OwnerDashboardTemplate<'a> {
    pub user: Option<&'a User>,
    pub listings: Vec<&'a Property>,
    pub inquiries: Vec<&'a RentalRequest>,
}

#[derive(Template)]
#[template(path = "property_detail.html")]
pub struct PropertyDetailTemplate<'a> {
    pub user: Option<&'a User>,
    pub property: &'a Property,
    pub sent: bool,
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "add_property.html")]
pub struct AddPropertyTemplate<'a> {
    pub user: Option<&'a User>,
    pub draft: &'a PropertyDraft,
    pub error: Option<String>,
    pub type_options: Vec<SelectOption>,
    pub furnishing_options: Vec<SelectOption>,
    pub bedroom_options: Vec<SelectOption>,
    pub bathroom_options: Vec<SelectOption>,
}

impl<'a> AddPropertyTemplate<'a> {
    pub fn new(user: Option<&'a User>, draft: &'a PropertyDraft, error: Option<String>) -> Self {
        let type_options = PropertyType::ALL
            .iter()
            .map(|t| SelectOption {
                value: t.to_string(),
                selected: *t == draft.property_type,
            })
            .collect();
        let furnishing_options = [
            FurnishingStatus::Furnished,
            FurnishingStatus::SemiFurnished,
            FurnishingStatus::Unfurnished,
        ]
        .iter()
        .map(|s| SelectOption {
            value: s.to_string(),
            selected: *s == draft.furnishing_status,
        })
        .collect();
        let count_options = |selected: u8| {
            (1..=5)
                .map(|n| SelectOption {
                    value: n.to_string(),
                    selected: n == selected,
                })
                .collect::<Vec<_>>()
        };
        Self {
            user,
            draft,
            error,
            type_options,
            furnishing_options,
            bedroom_options: count_options(draft.bedrooms),
            bathroom_options: count_options(draft.bathrooms),
        }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate<'a> {
    pub user: Option<&'a User>,
    pub entity: &'a str,
    pub id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nq_core::seed::seed_catalog;

    #[test]
    fn price_filter_groups_thousands() {
        assert_eq!(filters::inr(&0).unwrap(), "0");
        assert_eq!(filters::inr(&999).unwrap(), "999");
        assert_eq!(filters::inr(&85_000).unwrap(), "85,000");
        assert_eq!(filters::inr(&1_200_000).unwrap(), "1,200,000");
        assert_eq!(filters::inr(&-7_500).unwrap(), "-7,500");
    }

    #[test]
    fn landing_renders_for_anonymous_visitor() {
        let html = LandingTemplate { user: None }.render().unwrap();
        assert!(html.contains("dream home"));
        assert!(html.contains("/login"));
    }

    #[test]
    fn renter_dashboard_renders_cards_and_active_chip() {
        let catalog = seed_catalog();
        let tpl = RenterDashboardTemplate {
            user: None,
            name: "Ana",
            query: "",
            chips: RenterDashboardTemplate::chips_for(TypeFacet::Only(PropertyType::Villa)),
            recommended: vec![&catalog[2]],
            recommending: false,
            listings: catalog.iter().collect(),
        };
        let html = tpl.render().unwrap();
        assert!(html.contains("Hello, Ana!"));
        assert!(html.contains("Luxury Glass Penthouse"));
        assert!(html.contains("85,000"));
        assert!(html.contains("AI Top Match"));
        assert!(html.contains("chip active\" href=\"/?q=&type=Villa\""));
    }

    #[test]
    fn empty_filter_result_shows_the_empty_state() {
        let tpl = RenterDashboardTemplate {
            user: None,
            name: "Ana",
            query: "lighthouse",
            chips: RenterDashboardTemplate::chips_for(TypeFacet::All),
            recommended: vec![],
            recommending: false,
            listings: vec![],
        };
        let html = tpl.render().unwrap();
        assert!(html.contains("No properties found"));
    }

    #[test]
    fn add_property_marks_current_draft_selection() {
        let draft = PropertyDraft {
            property_type: PropertyType::Studio,
            ..PropertyDraft::default()
        };
        let tpl = AddPropertyTemplate::new(None, &draft, None);
        let studio = tpl
            .type_options
            .iter()
            .find(|o| o.value == "Studio")
            .unwrap();
        assert!(studio.selected);
        let html = tpl.render().unwrap();
        assert!(html.contains("List Your Property"));
    }

    #[test]
    fn detail_page_swaps_form_for_confirmation_once_sent() {
        let catalog = seed_catalog();
        let unsent = PropertyDetailTemplate {
            user: None,
            property: &catalog[0],
            sent: false,
            message: DEFAULT_INQUIRY_MESSAGE,
        }
        .render()
        .unwrap();
        assert!(unsent.contains("Send Inquiry"));

        let sent = PropertyDetailTemplate {
            user: None,
            property: &catalog[0],
            sent: true,
            message: DEFAULT_INQUIRY_MESSAGE,
        }
        .render()
        .unwrap();
        assert!(sent.contains("Request Sent!"));
        assert!(!sent.contains("Send Inquiry"));
    }
}
