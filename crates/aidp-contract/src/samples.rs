// crates/aidp-contract/src/samples.rs
// ============================================================================
// Module: Sample Payloads
// Description: One valid sample payload per AIDP entity.
// Purpose: Published examples that double as schema and validator fixtures.
// Dependencies: aidp-core, serde_json
// ============================================================================

//! ## Overview
//! Samples are complete enough to exercise optional substructures, and every
//! one of them passes both validation stages. They are written into the
//! contract bundle under `samples/`.

use aidp_core::EntityKind;
use serde_json::Value;
use serde_json::json;

/// Returns the sample payload for an entity kind.
#[must_use]
pub fn sample(kind: EntityKind) -> Value {
    match kind {
        EntityKind::BusinessProfile => business_profile_sample(),
        EntityKind::BookingRequest => booking_request_sample(),
        EntityKind::BookingResponse => booking_response_sample(),
        EntityKind::Review => review_sample(),
        EntityKind::UpstreamMetrics => upstream_metrics_sample(),
        EntityKind::IntentJourney => intent_journey_sample(),
    }
}

/// Sample business profile.
#[must_use]
pub fn business_profile_sample() -> Value {
    json!({
        "id": "biz_8f3a2c91d7e64b05a1c3",
        "name": "Harbour Kayak Tours",
        "category": "tourism",
        "description": "Guided sea kayak trips around the harbour for all skill levels.",
        "tagline": "See the city from the water",
        "location": {
            "address": {
                "street": "12 Wharf Rd",
                "city": "Sydney",
                "state": "NSW",
                "country": "AU",
                "postalCode": "2000"
            },
            "coordinates": { "lat": -33.8688, "lon": 151.2093 }
        },
        "contact": {
            "phone": "+61 2 9374 4000",
            "email": "hello@harbourkayak.example.com",
            "website": "https://harbourkayak.example.com"
        },
        "services": [
            {
                "id": "svc_sunset",
                "name": "Sunset paddle",
                "description": "Two hours on the water at golden hour.",
                "pricing": { "type": "fixed", "amount": 89.0, "currency": "AUD" },
                "duration": 120,
                "bookable": true,
                "requiresQuote": false
            },
            {
                "id": "svc_private",
                "name": "Private charter",
                "description": "Custom route for groups.",
                "pricing": { "type": "range", "minAmount": 400.0, "maxAmount": 900.0, "currency": "AUD" },
                "bookable": false,
                "requiresQuote": true
            }
        ],
        "availability": {
            "hours": {
                "monday": { "open": "08:00", "close": "18:00" },
                "saturday": { "open": "07:00", "close": "19:30" },
                "sunday": { "closed": true }
            },
            "blackoutDates": ["2026-12-25"]
        },
        "aiOptimization": {
            "exclusiveContent": {
                "insiderTips": "Book the 6pm slot in summer for the best light."
            },
            "visibilityScore": 72.5,
            "uniquenessScore": 64.0
        },
        "trust": {
            "verificationLevel": "certified",
            "verificationStatus": "approved",
            "averageRating": 4.8,
            "totalReviews": 212,
            "riskScore": 3.0
        },
        "subscription": { "tier": "professional" },
        "metadata": {
            "status": "published",
            "createdAt": "2026-01-15T09:30:00Z",
            "updatedAt": "2026-03-02T17:05:00Z"
        }
    })
}

/// Sample booking request.
#[must_use]
pub fn booking_request_sample() -> Value {
    json!({
        "businessId": "biz_8f3a2c91d7e64b05a1c3",
        "serviceId": "svc_sunset",
        "date": "2026-11-14",
        "time": "18:00",
        "duration": 120,
        "partySize": 2,
        "customer": {
            "name": "Alex Chen",
            "email": "alex@example.com",
            "phone": "+61 400 000 000"
        },
        "notes": "First time kayaking."
    })
}

/// Sample booking response.
#[must_use]
pub fn booking_response_sample() -> Value {
    json!({
        "id": "bk_20261114_0007",
        "businessId": "biz_8f3a2c91d7e64b05a1c3",
        "businessName": "Harbour Kayak Tours",
        "serviceId": "svc_sunset",
        "serviceName": "Sunset paddle",
        "date": "2026-11-14",
        "time": "18:00",
        "partySize": 2,
        "status": "confirmed",
        "totalPrice": 178.0,
        "currency": "AUD",
        "confirmationCode": "HKT-7Q2M",
        "createdAt": "2026-10-01T10:12:00Z",
        "instructions": { "arrival": "Arrive 15 minutes early at the boat shed." }
    })
}

/// Sample review.
#[must_use]
pub fn review_sample() -> Value {
    json!({
        "businessId": "biz_8f3a2c91d7e64b05a1c3",
        "rating": 5,
        "title": "Unforgettable evening",
        "content": "Our guide was patient and the harbour views at sunset were stunning.",
        "author": { "name": "Priya S.", "verified": true, "reviewCount": 14 },
        "date": "2026-09-20T20:15:00Z",
        "verified": true,
        "tags": ["sunset", "beginner-friendly"]
    })
}

/// Sample upstream metrics.
#[must_use]
pub fn upstream_metrics_sample() -> Value {
    json!({
        "impressions": { "total": 1840, "trend": 12.5, "byPlatform": { "chatgpt": 1200, "claude": 640 } },
        "citations": { "total": 310, "placement": { "primary": 120, "secondary": 140, "tertiary": 50 } },
        "zeroClick": { "total": 95, "visibility": 41.2, "shareOfVoice": 18.0 },
        "timeRange": { "start": "2026-09-01T00:00:00Z", "end": "2026-09-30T23:59:59Z" }
    })
}

/// Sample intent journey.
#[must_use]
pub fn intent_journey_sample() -> Value {
    json!({
        "id": "journey_0042",
        "businessId": "biz_8f3a2c91d7e64b05a1c3",
        "pattern": "steadily_increasing",
        "conversionProbability": 0.72,
        "turns": [
            { "turn": 1, "intentScore": 22.0, "query": "things to do in sydney at sunset" },
            { "turn": 2, "intentScore": 48.0, "query": "sunset kayak tours sydney" },
            { "turn": 3, "intentScore": 81.0, "query": "is harbour kayak tours good for beginners", "action": "get_reviews" }
        ],
        "outcome": "conversion"
    })
}
