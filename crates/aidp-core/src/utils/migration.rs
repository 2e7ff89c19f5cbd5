// crates/aidp-core/src/utils/migration.rs
// ============================================================================
// Module: Listing Migration
// Description: Typed adapters from external directory listings to AIDP drafts.
// Purpose: Seed AIDP profiles from Google Places and Yelp Fusion records.
// Dependencies: serde, thiserror, time, tracing, crate::core
// ============================================================================

//! ## Overview
//! External listings arrive as JSON tagged by `source` (`google` or `yelp`)
//! and are mapped field by field into a [`ProfileDraft`]. A draft is a partial
//! profile: fields the external directory does not carry (services, email,
//! description) stay empty and are reported by
//! [`ProfileDraft::missing_fields`].
//! Invariants:
//! - The draft identifier is derived from `source` and the external id, so re-importing the same
//!   listing yields the same `biz_` identifier.
//! - Mapping never guesses a category; unknown platform types leave it unset.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;
use tracing::warn;

use crate::core::identifiers::BusinessId;
use crate::core::profile::Address;
use crate::core::profile::BusinessCategory;
use crate::core::profile::Coordinates;
use crate::core::profile::Media;
use crate::core::profile::Metadata;
use crate::core::profile::ProfileStatus;
use crate::core::profile::Trust;
use crate::core::profile::VerificationStatus;

// ============================================================================
// SECTION: External Listings
// ============================================================================

/// Listing exported from an external business directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ExternalListing {
    /// Google Places result.
    Google(GooglePlace),
    /// Yelp Fusion business.
    Yelp(YelpBusiness),
}

impl ExternalListing {
    /// Returns the source tag.
    #[must_use]
    pub const fn source(&self) -> &'static str {
        match self {
            Self::Google(_) => "google",
            Self::Yelp(_) => "yelp",
        }
    }
}

/// Subset of a Google Places result used for import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GooglePlace {
    /// Place identifier.
    pub place_id: String,
    /// Business name.
    pub name: String,
    /// Place types, most specific first.
    #[serde(default)]
    pub types: Vec<String>,
    /// Editorial summary.
    #[serde(default)]
    pub editorial_summary: Option<GoogleEditorialSummary>,
    /// Short street address.
    #[serde(default)]
    pub vicinity: Option<String>,
    /// Structured address parts.
    #[serde(default)]
    pub address_components: Vec<GoogleAddressComponent>,
    /// Place geometry.
    #[serde(default)]
    pub geometry: Option<GoogleGeometry>,
    /// Formatted phone number.
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    /// Website URL.
    #[serde(default)]
    pub website: Option<String>,
    /// Operational status (`OPERATIONAL`, `CLOSED_TEMPORARILY`, ...).
    #[serde(default)]
    pub business_status: Option<String>,
}

/// Google editorial summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleEditorialSummary {
    /// Summary text.
    #[serde(default)]
    pub overview: Option<String>,
}

/// Google structured address part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleAddressComponent {
    /// Full name.
    pub long_name: String,
    /// Abbreviated name.
    pub short_name: String,
    /// Component types (`locality`, `country`, ...).
    #[serde(default)]
    pub types: Vec<String>,
}

/// Google place geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoogleGeometry {
    /// Place location.
    pub location: GoogleLatLng,
}

/// Google latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoogleLatLng {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// Subset of a Yelp Fusion business used for import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YelpBusiness {
    /// Yelp business identifier.
    pub id: String,
    /// Business name.
    pub name: String,
    /// Categories, most relevant first.
    #[serde(default)]
    pub categories: Vec<YelpCategory>,
    /// Postal location.
    #[serde(default)]
    pub location: Option<YelpLocation>,
    /// Coordinates.
    #[serde(default)]
    pub coordinates: Option<YelpCoordinates>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Yelp page URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Photo URLs.
    #[serde(default)]
    pub photos: Vec<String>,
    /// Permanently closed.
    #[serde(default)]
    pub is_closed: bool,
}

/// Yelp category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YelpCategory {
    /// Machine alias (`italian`, `plumbing`).
    pub alias: String,
    /// Display title.
    pub title: String,
}

/// Yelp postal location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YelpLocation {
    /// First address line.
    #[serde(default)]
    pub address1: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// State or region code.
    #[serde(default)]
    pub state: Option<String>,
    /// ISO country code.
    #[serde(default)]
    pub country: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub zip_code: Option<String>,
}

/// Yelp coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YelpCoordinates {
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

// ============================================================================
// SECTION: Profile Draft
// ============================================================================

/// Partial business profile produced by a listing import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    /// Derived business identifier.
    pub id: BusinessId,
    /// Business name.
    pub name: String,
    /// Mapped category, when the platform type is recognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<BusinessCategory>,
    /// Description, when the platform carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Partial location.
    pub location: LocationDraft,
    /// Partial contact block.
    pub contact: ContactDraft,
    /// Imported media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    /// Verification state inferred from the listing status.
    pub trust: Trust,
    /// Draft metadata stamped with the import time.
    pub metadata: Metadata,
}

/// Location with optional coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDraft {
    /// Postal address; empty strings where the platform had no value.
    pub address: Address,
    /// Coordinates, when the platform supplied them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Contact block where every channel is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl ProfileDraft {
    /// Lists the profile fields that must be supplied before publication.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.category.is_none() {
            missing.push("category");
        }
        if self.description.is_none() {
            missing.push("description");
        }
        if self.location.address.street.is_empty() {
            missing.push("location.address.street");
        }
        if self.location.address.city.is_empty() {
            missing.push("location.address.city");
        }
        if self.location.address.country.is_empty() {
            missing.push("location.address.country");
        }
        if self.location.coordinates.is_none() {
            missing.push("location.coordinates");
        }
        if self.contact.phone.is_none() {
            missing.push("contact.phone");
        }
        if self.contact.email.is_none() {
            missing.push("contact.email");
        }
        missing.push("services");
        missing
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while mapping a listing.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Import timestamp could not be formatted.
    #[error("invalid import timestamp: {0}")]
    Timestamp(String),
}

// ============================================================================
// SECTION: Mapping
// ============================================================================

/// Maps an external listing into a profile draft.
///
/// # Errors
///
/// Returns [`MigrationError::Timestamp`] when `imported_at` cannot be rendered
/// as RFC 3339.
pub fn map_listing(
    listing: &ExternalListing,
    imported_at: OffsetDateTime,
) -> Result<ProfileDraft, MigrationError> {
    let stamp =
        imported_at.format(&Rfc3339).map_err(|err| MigrationError::Timestamp(err.to_string()))?;
    let metadata = Metadata {
        status: Some(ProfileStatus::Draft),
        created_at: Some(stamp.clone()),
        updated_at: Some(stamp),
        published_at: None,
    };
    let draft = match listing {
        ExternalListing::Google(place) => map_google(place, metadata),
        ExternalListing::Yelp(business) => map_yelp(business, metadata),
    };
    debug!(
        source = listing.source(),
        id = %draft.id,
        missing = draft.missing_fields().len(),
        "mapped external listing"
    );
    Ok(draft)
}

/// Maps a Google Places result.
fn map_google(place: &GooglePlace, metadata: Metadata) -> ProfileDraft {
    let component = |kind: &str, short: bool| {
        place.address_components.iter().find(|c| c.types.iter().any(|t| t == kind)).map(|c| {
            if short { c.short_name.clone() } else { c.long_name.clone() }
        })
    };
    let category = map_category("google", place.types.iter().map(String::as_str));
    let operational = place.business_status.as_deref() == Some("OPERATIONAL");
    ProfileDraft {
        id: BusinessId::derive("google", &place.place_id),
        name: place.name.clone(),
        category,
        description: place.editorial_summary.as_ref().and_then(|s| s.overview.clone()),
        location: LocationDraft {
            address: Address {
                street: place.vicinity.clone().unwrap_or_default(),
                city: component("locality", false).unwrap_or_default(),
                state: component("administrative_area_level_1", true),
                country: component("country", true).unwrap_or_default(),
                postal_code: component("postal_code", false),
            },
            coordinates: place.geometry.map(|geometry| Coordinates {
                lat: geometry.location.lat,
                lon: geometry.location.lng,
            }),
        },
        contact: ContactDraft {
            phone: place.formatted_phone_number.clone(),
            email: None,
            website: place.website.clone(),
        },
        media: None,
        trust: verification(operational),
        metadata,
    }
}

/// Maps a Yelp Fusion business.
fn map_yelp(business: &YelpBusiness, metadata: Metadata) -> ProfileDraft {
    let location = business.location.clone().unwrap_or_default();
    let category = map_category("yelp", business.categories.iter().map(|c| c.alias.as_str()));
    let media = (!business.photos.is_empty()).then(|| Media {
        photos: business.photos.clone(),
        ..Media::default()
    });
    ProfileDraft {
        id: BusinessId::derive("yelp", &business.id),
        name: business.name.clone(),
        category,
        description: None,
        location: LocationDraft {
            address: Address {
                street: location.address1.unwrap_or_default(),
                city: location.city.unwrap_or_default(),
                state: location.state,
                country: location.country.unwrap_or_else(|| "US".to_string()),
                postal_code: location.zip_code,
            },
            coordinates: business.coordinates.map(|c| Coordinates {
                lat: c.latitude,
                lon: c.longitude,
            }),
        },
        contact: ContactDraft {
            phone: business.phone.clone(),
            email: None,
            website: business.url.clone(),
        },
        media,
        trust: verification(!business.is_closed),
        metadata,
    }
}

/// Trust block derived from operational state.
fn verification(operational: bool) -> Trust {
    Trust {
        verification_status: Some(if operational {
            VerificationStatus::Approved
        } else {
            VerificationStatus::Pending
        }),
        ..Trust::default()
    }
}

/// Returns the category of the first recognized platform type.
fn map_category<'a>(source: &str, types: impl Iterator<Item = &'a str>) -> Option<BusinessCategory> {
    let types: Vec<&str> = types.collect();
    let category = types.iter().find_map(|token| category_for(token));
    if category.is_none() {
        warn!(source, types = ?types, "no AIDP category for external listing types");
    }
    category
}

/// Platform type and alias table shared by Google and Yelp.
fn category_for(token: &str) -> Option<BusinessCategory> {
    let category = match token {
        "restaurant" | "restaurants" | "cafe" | "cafes" | "bar" | "bars" | "bakery" | "food"
        | "meal_takeaway" | "meal_delivery" => BusinessCategory::Restaurants,
        "lodging" | "hotels" | "hotelstravel" | "bedbreakfast" => BusinessCategory::Hospitality,
        "tourist_attraction" | "travel_agency" | "museum" | "amusement_park" | "tours"
        | "museums" | "arts" => BusinessCategory::Tourism,
        "store" | "clothing_store" | "shopping_mall" | "book_store" | "supermarket"
        | "shopping" => BusinessCategory::Retail,
        "hospital" | "doctor" | "dentist" | "pharmacy" | "physiotherapist" | "health"
        | "dentists" | "physicians" => BusinessCategory::Healthcare,
        "plumber" | "electrician" | "roofing_contractor" | "locksmith" | "painter"
        | "moving_company" | "homeservices" | "plumbing" | "electricians" => {
            BusinessCategory::HomeServices
        }
        "lawyer" | "accounting" | "insurance_agency" | "real_estate_agency" | "professional"
        | "lawyers" | "accountants" => BusinessCategory::ProfessionalServices,
        "spa" | "gym" | "beauty_salon" | "hair_care" | "beautysvc" | "spas" | "gyms"
        | "fitness" => BusinessCategory::Wellness,
        _ => return None,
    };
    Some(category)
}
