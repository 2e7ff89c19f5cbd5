// crates/aidp-contract/src/schemas.rs
// ============================================================================
// Module: Entity Schemas
// Description: JSON Schema (draft 2020-12) documents for every AIDP entity.
// Purpose: Canonical wire validation contract shared by validators and docs.
// Dependencies: aidp-core, serde_json
// ============================================================================

//! ## Overview
//! Each entity schema is built from small composable fragments so shared
//! shapes (contact details, clock times, business identifiers) stay in sync.
//! Schemas express presence, type, enumeration, format, and the bounds that
//! belong to the wire contract (`partySize`, `rating`, text lengths).
//! Cross-field and score-range rules are not encoded here; the validator's
//! rule stage reports them so they appear alongside other findings.
//!
//! Object schemas leave `additionalProperties` open. Validators that want a
//! closed contract tighten the documents at compile time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use aidp_core::BusinessCategory;
use aidp_core::EntityKind;
use aidp_core::SCHEMA_BASE_URL;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// JSON Schema dialect used by every AIDP document.
pub const SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Pattern for business identifiers.
pub const BUSINESS_ID_PATTERN: &str = "^biz_[a-zA-Z0-9]{16,}$";

/// Pattern for ISO 4217 currency codes.
pub const CURRENCY_PATTERN: &str = "^[A-Z]{3}$";

/// Pattern for 24-hour booking clock times (`H:MM` or `HH:MM`).
pub const CLOCK_TIME_PATTERN: &str = "^([01]?[0-9]|2[0-3]):[0-5][0-9]$";

/// Largest value of a 32-bit counter field such as `duration` or `turn`.
pub const U32_LIMIT: u64 = 4_294_967_295;

// ============================================================================
// SECTION: Lookup
// ============================================================================

/// Returns the schema document for an entity kind.
#[must_use]
pub fn entity_schema(kind: EntityKind) -> Value {
    match kind {
        EntityKind::BusinessProfile => business_profile_schema(),
        EntityKind::BookingRequest => booking_request_schema(),
        EntityKind::BookingResponse => booking_response_schema(),
        EntityKind::Review => review_schema(),
        EntityKind::UpstreamMetrics => upstream_metrics_schema(),
        EntityKind::IntentJourney => intent_journey_schema(),
    }
}

/// Returns the canonical `$id` URL for an entity schema.
#[must_use]
pub fn schema_id(kind: EntityKind) -> String {
    format!("{SCHEMA_BASE_URL}/{}", kind.schema_file_name())
}

// ============================================================================
// SECTION: Business Profile
// ============================================================================

/// Returns the business profile schema.
#[must_use]
pub fn business_profile_schema() -> Value {
    let categories: Vec<&str> =
        BusinessCategory::all().iter().map(|category| category.as_str()).collect();
    let body = object(
        &json!({
            "id": business_id_schema(),
            "name": { "type": "string", "minLength": 1, "maxLength": 255 },
            "category": { "type": "string", "enum": categories },
            "description": { "type": "string", "minLength": 1 },
            "tagline": { "type": "string", "maxLength": 255 },
            "location": location_schema(),
            "contact": contact_schema(),
            "services": {
                "type": "array",
                "minItems": 1,
                "items": service_schema()
            },
            "availability": availability_schema(),
            "media": media_schema(),
            "aiOptimization": ai_optimization_schema(),
            "trust": trust_schema(),
            "subscription": subscription_schema(),
            "metadata": metadata_schema()
        }),
        &["id", "name", "category", "description", "location", "contact", "services"],
    );
    document(EntityKind::BusinessProfile, "AIDP Business Profile", body)
}

/// Location: postal address plus coordinates.
fn location_schema() -> Value {
    object(
        &json!({
            "address": object(
                &json!({
                    "street": { "type": "string" },
                    "city": { "type": "string" },
                    "state": { "type": "string" },
                    "country": { "type": "string" },
                    "postalCode": { "type": "string" }
                }),
                &["street", "city", "country"],
            ),
            "coordinates": coordinates_schema(),
            "serviceArea": object(
                &json!({
                    "type": { "type": "string", "enum": ["radius", "regions"] },
                    "radius": { "type": "number" },
                    "regions": string_array()
                }),
                &["type"],
            )
        }),
        &["address", "coordinates"],
    )
}

/// Coordinates accept `lon` or its alias `lng`, but not both.
fn coordinates_schema() -> Value {
    let mut schema = object(
        &json!({
            "lat": { "type": "number", "description": "Latitude in degrees." },
            "lon": { "type": "number", "description": "Longitude in degrees." },
            "lng": { "type": "number", "description": "Alias for lon." }
        }),
        &["lat"],
    );
    insert(
        &mut schema,
        "oneOf",
        json!([{ "required": ["lon"] }, { "required": ["lng"] }]),
    );
    schema
}

/// Contact channels.
fn contact_schema() -> Value {
    object(
        &json!({
            "phone": { "type": "string", "minLength": 1 },
            "email": email_schema(),
            "website": uri_schema(),
            "socialMedia": object(
                &json!({
                    "facebook": { "type": "string" },
                    "instagram": { "type": "string" },
                    "twitter": { "type": "string" },
                    "linkedin": { "type": "string" }
                }),
                &[],
            )
        }),
        &["phone", "email"],
    )
}

/// Service offering with pricing.
fn service_schema() -> Value {
    object(
        &json!({
            "id": { "type": "string", "minLength": 1 },
            "name": { "type": "string", "minLength": 1 },
            "description": { "type": "string" },
            "category": { "type": "string" },
            "pricing": object(
                &json!({
                    "type": { "type": "string", "enum": ["fixed", "hourly", "range", "quote"] },
                    "amount": { "type": "number" },
                    "minAmount": { "type": "number" },
                    "maxAmount": { "type": "number" },
                    "currency": { "type": "string", "pattern": CURRENCY_PATTERN }
                }),
                &["type", "currency"],
            ),
            "duration": bounded_integer(1, U32_LIMIT),
            "bookable": { "type": "boolean" },
            "requiresQuote": { "type": "boolean" }
        }),
        &["id", "name", "description", "pricing", "bookable", "requiresQuote"],
    )
}

/// Opening hours and blackout dates.
fn availability_schema() -> Value {
    let day = object(
        &json!({
            "open": { "type": "string", "description": "Opening time, HH:MM 24-hour." },
            "close": { "type": "string", "description": "Closing time, HH:MM 24-hour." },
            "closed": { "type": "boolean" }
        }),
        &[],
    );
    object(
        &json!({
            "hours": object(
                &json!({
                    "monday": day,
                    "tuesday": day,
                    "wednesday": day,
                    "thursday": day,
                    "friday": day,
                    "saturday": day,
                    "sunday": day
                }),
                &[],
            ),
            "blackoutDates": { "type": "array", "items": { "type": "string", "format": "date" } }
        }),
        &[],
    )
}

/// Media references.
fn media_schema() -> Value {
    object(
        &json!({
            "logo": uri_schema(),
            "photos": { "type": "array", "items": uri_schema() },
            "videos": { "type": "array", "items": uri_schema() },
            "virtualTour": uri_schema()
        }),
        &[],
    )
}

/// AI-facing content and scores.
fn ai_optimization_schema() -> Value {
    object(
        &json!({
            "exclusiveContent": object(
                &json!({
                    "insiderTips": { "type": "string" },
                    "localSecrets": { "type": "string" },
                    "behindTheScenes": { "type": "string" },
                    "culturalNotes": { "type": "string" },
                    "sustainabilityPractices": { "type": "string" },
                    "exclusiveOffers": string_array(),
                    "customerTestimonials": {
                        "type": "array",
                        "items": object(
                            &json!({
                                "name": { "type": "string" },
                                "text": { "type": "string" },
                                "date": { "type": "string" }
                            }),
                            &["name", "text", "date"],
                        )
                    }
                }),
                &[],
            ),
            "boostSignals": string_array(),
            "visibilityScore": { "type": "number", "description": "Score in [0, 100]." },
            "uniquenessScore": { "type": "number", "description": "Score in [0, 100]." }
        }),
        &[],
    )
}

/// Verification and reputation signals.
fn trust_schema() -> Value {
    let count = bounded_integer(0, u64::MAX);
    object(
        &json!({
            "verificationLevel": { "type": "string", "enum": ["basic", "certified", "elite"] },
            "verificationStatus": { "type": "string", "enum": ["pending", "approved", "rejected"] },
            "averageRating": { "type": "number", "description": "Rating in [0, 5]." },
            "totalReviews": count,
            "ratingBreakdown": object(
                &json!({ "1": count, "2": count, "3": count, "4": count, "5": count }),
                &["1", "2", "3", "4", "5"],
            ),
            "riskScore": { "type": "number", "description": "Score in [0, 100]." }
        }),
        &[],
    )
}

/// Subscription tier.
fn subscription_schema() -> Value {
    object(
        &json!({
            "tier": { "type": "string", "enum": ["free", "professional", "enterprise"] },
            "features": string_array()
        }),
        &[],
    )
}

/// Publication metadata.
fn metadata_schema() -> Value {
    object(
        &json!({
            "status": {
                "type": "string",
                "enum": ["draft", "pending_review", "published", "suspended"]
            },
            "createdAt": timestamp_schema(),
            "updatedAt": timestamp_schema(),
            "publishedAt": timestamp_schema()
        }),
        &[],
    )
}

// ============================================================================
// SECTION: Bookings
// ============================================================================

/// Returns the booking request schema.
#[must_use]
pub fn booking_request_schema() -> Value {
    let body = object(
        &json!({
            "businessId": { "type": "string", "minLength": 1 },
            "serviceId": { "type": "string" },
            "date": date_schema(),
            "time": clock_time_schema(),
            "duration": bounded_integer(1, U32_LIMIT),
            "partySize": party_size_schema(),
            "customer": customer_schema(),
            "paymentMethod": { "type": "string" },
            "notes": { "type": "string" }
        }),
        &["businessId", "date", "time", "partySize", "customer"],
    );
    document(EntityKind::BookingRequest, "AIDP Booking Request", body)
}

/// Returns the booking response schema.
#[must_use]
pub fn booking_response_schema() -> Value {
    let body = object(
        &json!({
            "id": { "type": "string", "minLength": 1 },
            "businessId": { "type": "string", "minLength": 1 },
            "businessName": { "type": "string" },
            "serviceId": { "type": "string" },
            "serviceName": { "type": "string" },
            "date": date_schema(),
            "time": clock_time_schema(),
            "duration": bounded_integer(1, U32_LIMIT),
            "partySize": party_size_schema(),
            "status": {
                "type": "string",
                "enum": ["pending", "confirmed", "cancelled", "completed"]
            },
            "customer": customer_schema(),
            "totalPrice": { "type": "number", "minimum": 0 },
            "currency": { "type": "string", "pattern": CURRENCY_PATTERN },
            "confirmationCode": { "type": "string", "minLength": 1 },
            "createdAt": timestamp_schema(),
            "cancellationDeadline": timestamp_schema(),
            "instructions": object(
                &json!({
                    "arrival": { "type": "string" },
                    "location": { "type": "string" },
                    "contact": { "type": "string" }
                }),
                &[],
            )
        }),
        &["id", "businessId", "date", "time", "partySize", "status", "confirmationCode"],
    );
    document(EntityKind::BookingResponse, "AIDP Booking Response", body)
}

/// Customer contact details.
fn customer_schema() -> Value {
    object(
        &json!({
            "name": { "type": "string", "minLength": 1 },
            "email": email_schema(),
            "phone": { "type": "string" },
            "specialRequests": { "type": "string" }
        }),
        &["name", "email"],
    )
}

/// Guests per booking.
fn party_size_schema() -> Value {
    json!({ "type": "integer", "minimum": 1, "maximum": 50 })
}

// ============================================================================
// SECTION: Reviews
// ============================================================================

/// Returns the review schema.
#[must_use]
pub fn review_schema() -> Value {
    let body = object(
        &json!({
            "id": { "type": "string" },
            "businessId": { "type": "string", "minLength": 1 },
            "rating": { "type": "integer", "minimum": 1, "maximum": 5 },
            "title": { "type": "string", "maxLength": 255 },
            "content": { "type": "string", "minLength": 10, "maxLength": 5000 },
            "author": object(
                &json!({
                    "name": { "type": "string", "minLength": 1 },
                    "verified": { "type": "boolean" },
                    "reviewCount": bounded_integer(0, U32_LIMIT),
                    "avatar": uri_schema()
                }),
                &["name"],
            ),
            "date": timestamp_schema(),
            "verified": { "type": "boolean" },
            "helpful": bounded_integer(0, U32_LIMIT),
            "businessResponse": object(
                &json!({
                    "text": { "type": "string" },
                    "date": { "type": "string" },
                    "responder": { "type": "string" }
                }),
                &["text", "date", "responder"],
            ),
            "tags": string_array(),
            "photos": { "type": "array", "items": uri_schema() }
        }),
        &["businessId", "rating", "content", "author"],
    );
    document(EntityKind::Review, "AIDP Review", body)
}

// ============================================================================
// SECTION: Analytics
// ============================================================================

/// Returns the upstream metrics schema.
#[must_use]
pub fn upstream_metrics_schema() -> Value {
    let count = bounded_integer(0, u64::MAX);
    let body = object(
        &json!({
            "impressions": object(
                &json!({
                    "total": count,
                    "trend": { "type": "number" },
                    "byPlatform": { "type": "object", "additionalProperties": count }
                }),
                &["total"],
            ),
            "citations": object(
                &json!({
                    "total": count,
                    "trend": { "type": "number" },
                    "placement": object(
                        &json!({ "primary": count, "secondary": count, "tertiary": count }),
                        &["primary", "secondary", "tertiary"],
                    )
                }),
                &["total"],
            ),
            "zeroClick": object(
                &json!({
                    "total": count,
                    "visibility": { "type": "number", "description": "Percentage in [0, 100]." },
                    "shareOfVoice": { "type": "number" }
                }),
                &["total"],
            ),
            "timeRange": object(
                &json!({ "start": timestamp_schema(), "end": timestamp_schema() }),
                &["start", "end"],
            )
        }),
        &["impressions", "citations", "zeroClick"],
    );
    document(EntityKind::UpstreamMetrics, "AIDP Upstream Metrics", body)
}

/// Returns the intent journey schema.
#[must_use]
pub fn intent_journey_schema() -> Value {
    let body = object(
        &json!({
            "id": { "type": "string", "minLength": 1 },
            "businessId": { "type": "string" },
            "pattern": {
                "type": "string",
                "enum": [
                    "steadily_increasing",
                    "spike_pattern",
                    "volatile_pattern",
                    "decreasing_pattern"
                ]
            },
            "conversionProbability": { "type": "number", "description": "Probability in [0, 1]." },
            "turns": {
                "type": "array",
                "items": object(
                    &json!({
                        "turn": bounded_integer(1, U32_LIMIT),
                        "intentScore": { "type": "number", "description": "Score in [0, 100]." },
                        "query": { "type": "string" },
                        "action": { "type": "string" },
                        "timestamp": timestamp_schema()
                    }),
                    &["turn", "intentScore", "query"],
                )
            },
            "outcome": { "type": "string", "enum": ["conversion", "abandonment", "ongoing"] },
            "createdAt": timestamp_schema()
        }),
        &["id", "turns"],
    );
    document(EntityKind::IntentJourney, "AIDP Intent Journey", body)
}

// ============================================================================
// SECTION: Shared Fragments
// ============================================================================

/// Integer bounded to the width of the field it decodes into.
#[must_use]
pub fn bounded_integer(minimum: u64, maximum: u64) -> Value {
    json!({ "type": "integer", "minimum": minimum, "maximum": maximum })
}

/// Business identifier.
#[must_use]
pub fn business_id_schema() -> Value {
    json!({
        "type": "string",
        "pattern": BUSINESS_ID_PATTERN,
        "description": "Business identifier: biz_ followed by at least 16 alphanumerics."
    })
}

/// Email address.
#[must_use]
pub fn email_schema() -> Value {
    json!({ "type": "string", "format": "email" })
}

/// Absolute URI.
#[must_use]
pub fn uri_schema() -> Value {
    json!({ "type": "string", "format": "uri" })
}

/// RFC 3339 timestamp.
#[must_use]
pub fn timestamp_schema() -> Value {
    json!({ "type": "string", "format": "date-time" })
}

/// Calendar date (`YYYY-MM-DD`).
#[must_use]
pub fn date_schema() -> Value {
    json!({ "type": "string", "format": "date" })
}

/// Booking clock time.
#[must_use]
pub fn clock_time_schema() -> Value {
    json!({ "type": "string", "pattern": CLOCK_TIME_PATTERN })
}

/// Array of strings.
fn string_array() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

/// Builds an object schema with the given properties and required keys.
#[must_use]
pub fn object(properties: &Value, required: &[&str]) -> Value {
    let mut schema = json!({ "type": "object", "properties": properties });
    if !required.is_empty() {
        insert(&mut schema, "required", json!(required));
    }
    schema
}

/// Wraps an entity body with `$schema`, `$id`, and `title`.
fn document(kind: EntityKind, title: &str, body: Value) -> Value {
    let mut schema = body;
    insert(&mut schema, "$schema", Value::String(SCHEMA_DIALECT.to_string()));
    insert(&mut schema, "$id", Value::String(schema_id(kind)));
    insert(&mut schema, "title", Value::String(title.to_string()));
    schema
}

/// Inserts a keyword into an object schema; non-objects are left untouched.
fn insert(schema: &mut Value, key: &str, value: Value) {
    if let Value::Object(map) = schema {
        map.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests;
