//! # Domain Models
//!
//! These structs represent the core entities of NestQuest.
//! State files are written as camelCase JSON, so every persisted struct
//! carries a `rename_all` attribute matching that wire shape.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Generates a random identifier for client-created records.
/// No uniqueness check is performed anywhere; collisions are accepted
/// the same way the login form accepts any name.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// The two roles a session user can pick at login. The role is chosen by
/// the user and never verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "OWNER")]
    Owner,
    #[serde(rename = "RENTER")]
    Renter,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Owner => "owner",
            Self::Renter => "renter",
        })
    }
}

/// Optional search bounds a renter attaches at login. Immutable afterwards;
/// there is no edit flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sqft: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
}

impl UserPreferences {
    /// True when no bound is set at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The session user. Created at login form submission with a random id;
/// destroyed on logout. There is no password and no backing account store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FurnishingStatus {
    #[serde(rename = "Furnished")]
    Furnished,
    #[serde(rename = "Semi-Furnished")]
    SemiFurnished,
    #[serde(rename = "Unfurnished")]
    Unfurnished,
}

impl fmt::Display for FurnishingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Furnished => "Furnished",
            Self::SemiFurnished => "Semi-Furnished",
            Self::Unfurnished => "Unfurnished",
        })
    }
}

impl FromStr for FurnishingStatus {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "Furnished" => Ok(Self::Furnished),
            "Semi-Furnished" => Ok(Self::SemiFurnished),
            "Unfurnished" => Ok(Self::Unfurnished),
            other => Err(AppError::Validation(format!(
                "unknown furnishing status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Condo,
    Studio,
}

impl PropertyType {
    /// All variants, in the order the UI lists them.
    pub const ALL: [PropertyType; 5] = [
        Self::Apartment,
        Self::House,
        Self::Villa,
        Self::Condo,
        Self::Studio,
    ];
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Villa => "Villa",
            Self::Condo => "Condo",
            Self::Studio => "Studio",
        })
    }
}

impl FromStr for PropertyType {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "Apartment" => Ok(Self::Apartment),
            "House" => Ok(Self::House),
            "Villa" => Ok(Self::Villa),
            "Condo" => Ok(Self::Condo),
            "Studio" => Ok(Self::Studio),
            other => Err(AppError::Validation(format!(
                "unknown property type: {other}"
            ))),
        }
    }
}

/// A rentable unit. Created through the add-listing form (owner role only)
/// and never updated or deleted afterwards — the edit/delete controls on the
/// owner portal are presentational stubs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    /// References the listing owner's `User.id`. Deliberately unenforced.
    pub owner_id: String,
    pub title: String,
    pub description: String,
    /// Monthly rent in whole currency units.
    pub price: i64,
    /// Neighborhood name, matched by the search engine alongside the title.
    pub area: String,
    /// Street address, display only.
    pub location: String,
    pub sqft: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub furnishing_status: FurnishingStatus,
    pub property_type: PropertyType,
    /// Ordered image URLs; the first one is the card/detail hero image.
    pub images: Vec<String>,
    pub contact_details: String,
    pub created_at: DateTime<Utc>,
}

impl Property {
    /// Placeholder hero image used when a listing carries no image URLs.
    pub fn hero_image(&self) -> String {
        self.images
            .first()
            .cloned()
            .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/800/600", self.id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "ACCEPTED")]
    Accepted,
    #[serde(rename = "REJECTED")]
    Rejected,
}

/// A renter-initiated inquiry directed at a property's owner.
///
/// Always created `PENDING` and never transitioned: the approve/decline
/// controls on the owner portal are intentionally unwired.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub id: String,
    /// References `Property.id`. Deliberately unenforced.
    pub property_id: String,
    pub renter_id: String,
    /// Denormalized so the owner portal needs no user lookup.
    pub renter_name: String,
    pub status: RequestStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl RentalRequest {
    pub fn new(property: &Property, renter: &User, message: String) -> Self {
        Self {
            id: new_id(),
            property_id: property.id.clone(),
            renter_id: renter.id.clone(),
            renter_name: renter.name.clone(),
            status: RequestStatus::Pending,
            message,
            created_at: Utc::now(),
        }
    }
}

// ── Form drafts ─────────────────────────────────────────────────────────────
//
// Each form has an explicit draft struct deserialized from the submitted
// fields and validated field-by-field before any record is created.

/// Deserializes `""` (an untouched optional form field) as `None` instead of
/// failing the numeric parse.
fn empty_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// The login form. Role is picked by the user; renters may attach
/// preference bounds, owners never do.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_price: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_price: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_sqft: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub preferred_area: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_bedrooms: Option<u8>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub property_type: Option<PropertyType>,
}

impl LoginForm {
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::Validation("email is required".into()));
        }
        Ok(())
    }

    /// Builds the session user. Preferences only exist for renters and only
    /// when at least one bound was filled in.
    pub fn into_user(self) -> User {
        let preferences = match self.role {
            UserRole::Owner => None,
            UserRole::Renter => {
                let prefs = UserPreferences {
                    min_price: self.min_price,
                    max_price: self.max_price,
                    min_sqft: self.min_sqft,
                    preferred_area: self.preferred_area,
                    min_bedrooms: self.min_bedrooms,
                    property_type: self.property_type,
                };
                (!prefs.is_empty()).then_some(prefs)
            }
        };
        User {
            id: new_id(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
            preferences,
            contact_number: None,
        }
    }
}

/// The add-listing form. Becomes a `Property` only after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    pub title: String,
    pub price: i64,
    pub area: String,
    pub location: String,
    pub sqft: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub furnishing_status: FurnishingStatus,
    pub property_type: PropertyType,
    #[serde(default)]
    pub contact_details: String,
    #[serde(default)]
    pub description: String,
}

impl Default for PropertyDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: 15_000,
            area: String::new(),
            location: String::new(),
            sqft: 800,
            bedrooms: 2,
            bathrooms: 2,
            furnishing_status: FurnishingStatus::Furnished,
            property_type: PropertyType::Apartment,
            contact_details: String::new(),
            description: String::new(),
        }
    }
}

impl PropertyDraft {
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title is required".into()));
        }
        if self.area.trim().is_empty() {
            return Err(AppError::Validation("area is required".into()));
        }
        if self.location.trim().is_empty() {
            return Err(AppError::Validation("location is required".into()));
        }
        if self.price <= 0 {
            return Err(AppError::Validation("price must be positive".into()));
        }
        if self.sqft == 0 {
            return Err(AppError::Validation("sqft must be positive".into()));
        }
        Ok(())
    }

    /// Promotes the validated draft to a full listing owned by `owner_id`.
    pub fn into_property(self, owner_id: &str) -> Property {
        let id = new_id();
        let images = vec![format!("https://picsum.photos/seed/{id}/800/600")];
        Property {
            id,
            owner_id: owner_id.to_string(),
            title: self.title,
            description: self.description,
            price: self.price,
            area: self.area,
            location: self.location,
            sqft: self.sqft,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            furnishing_status: self.furnishing_status,
            property_type: self.property_type,
            images,
            contact_details: self.contact_details,
            created_at: Utc::now(),
        }
    }
}

/// The inquiry form on the property detail page.
#[derive(Debug, Clone, Deserialize)]
pub struct InquiryForm {
    pub message: String,
}

impl InquiryForm {
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.message.trim().is_empty() {
            return Err(AppError::Validation("message is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_to_wire_strings() {
        assert_eq!(
            serde_json::to_string(&UserRole::Renter).unwrap(),
            "\"RENTER\""
        );
        assert_eq!(
            serde_json::to_string(&FurnishingStatus::SemiFurnished).unwrap(),
            "\"Semi-Furnished\""
        );
        assert_eq!(
            serde_json::to_string(&PropertyType::Villa).unwrap(),
            "\"Villa\""
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::Pending).unwrap(),
            "\"PENDING\""
        );
    }

    #[test]
    fn property_serializes_camel_case() {
        let property = PropertyDraft {
            title: "Test Flat".into(),
            area: "Midtown".into(),
            location: "1 Main St".into(),
            ..PropertyDraft::default()
        }
        .into_property("o1");
        let json = serde_json::to_value(&property).unwrap();
        assert!(json.get("ownerId").is_some());
        assert!(json.get("furnishingStatus").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["ownerId"], "o1");
    }

    #[test]
    fn draft_validation_rejects_missing_fields() {
        let draft = PropertyDraft::default();
        assert!(draft.validate().is_err());

        let draft = PropertyDraft {
            title: "Loft".into(),
            area: "Soho".into(),
            location: "2 Broome St".into(),
            ..PropertyDraft::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn renter_login_attaches_preferences_only_when_present() {
        let form = LoginForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            role: UserRole::Renter,
            min_price: None,
            max_price: Some(100_000),
            min_sqft: None,
            preferred_area: None,
            min_bedrooms: Some(2),
            property_type: None,
        };
        let user = form.into_user();
        let prefs = user.preferences.expect("bounds were given");
        assert_eq!(prefs.max_price, Some(100_000));
        assert_eq!(prefs.min_bedrooms, Some(2));

        let blank = LoginForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            role: UserRole::Renter,
            min_price: None,
            max_price: None,
            min_sqft: None,
            preferred_area: None,
            min_bedrooms: None,
            property_type: None,
        };
        assert!(blank.into_user().preferences.is_none());
    }

    #[test]
    fn owner_login_never_attaches_preferences() {
        let form = LoginForm {
            name: "Omar".into(),
            email: "omar@example.com".into(),
            role: UserRole::Owner,
            min_price: Some(1),
            max_price: None,
            min_sqft: None,
            preferred_area: None,
            min_bedrooms: None,
            property_type: None,
        };
        assert!(form.into_user().preferences.is_none());
    }

    #[test]
    fn optional_form_fields_accept_empty_strings() {
        let form: LoginForm = serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "email": "ana@example.com",
            "role": "RENTER",
            "maxPrice": "",
            "minBedrooms": "3"
        }))
        .unwrap();
        assert_eq!(form.max_price, None);
        assert_eq!(form.min_bedrooms, Some(3));
    }
}
