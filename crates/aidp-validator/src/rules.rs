// crates/aidp-validator/src/rules.rs
// ============================================================================
// Module: Business Rules
// Description: Cross-field and range checks over typed AIDP entities.
// Purpose: Second validation stage, run after the structural pass succeeds.
// Dependencies: aidp-core, serde_json
// ============================================================================

//! ## Overview
//! Rules are pure functions over a decoded entity and return every finding
//! at once. Each constraint lives in exactly one stage: coordinate and score
//! bounds, pricing completeness, opening-hours format, and contact syntax
//! (email, phone, website) are checked here;
//! booking party size, review rating, and review length are checked by the
//! schema.

// ============================================================================
// SECTION: Imports
// ============================================================================

use aidp_core::BookingRequest;
use aidp_core::BookingResponse;
use aidp_core::BusinessProfile;
use aidp_core::IntentJourney;
use aidp_core::Pricing;
use aidp_core::PricingKind;
use aidp_core::Review;
use aidp_core::UpstreamMetrics;
use aidp_core::WeeklyHours;
use aidp_core::schedule::weekday_key;
use aidp_core::utils::is_valid_clock_time;
use aidp_core::utils::is_valid_email;
use aidp_core::utils::is_valid_phone_number;
use aidp_core::utils::is_valid_url;

use crate::report::FieldError;

// ============================================================================
// SECTION: Business Profile
// ============================================================================

/// Checks a decoded business profile.
#[must_use]
pub fn business_profile_rules(profile: &BusinessProfile) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !profile.id.has_namespace_prefix() {
        errors.push(
            FieldError::new("id", "Business ID must start with 'biz_'")
                .with_value(profile.id.as_str()),
        );
    }

    let coordinates = &profile.location.coordinates;
    if !(-90.0 ..= 90.0).contains(&coordinates.lat) {
        errors.push(
            FieldError::new("location.coordinates.lat", "Latitude must be between -90 and 90")
                .with_value(coordinates.lat),
        );
    }
    if !(-180.0 ..= 180.0).contains(&coordinates.lon) {
        errors.push(
            FieldError::new("location.coordinates.lon", "Longitude must be between -180 and 180")
                .with_value(coordinates.lon),
        );
    }

    let contact = &profile.contact;
    contact_rules(&contact.email, Some(contact.phone.as_str()), "contact", &mut errors);
    if let Some(website) = &contact.website
        && !is_valid_url(website)
    {
        errors.push(
            FieldError::new("contact.website", "Website must be an absolute URL")
                .with_value(website.as_str()),
        );
    }

    for (index, service) in profile.services.iter().enumerate() {
        pricing_rules(&service.pricing, &format!("services[{index}].pricing"), &mut errors);
    }

    let hours = profile.availability.as_ref().and_then(|availability| availability.hours.as_ref());
    if let Some(hours) = hours {
        hours_rules(hours, "availability.hours", &mut errors);
    }

    if let Some(ai) = &profile.ai_optimization {
        score_rule(ai.visibility_score, "aiOptimization.visibilityScore", 100.0, &mut errors);
        score_rule(ai.uniqueness_score, "aiOptimization.uniquenessScore", 100.0, &mut errors);
    }
    if let Some(trust) = &profile.trust {
        score_rule(trust.average_rating, "trust.averageRating", 5.0, &mut errors);
        score_rule(trust.risk_score, "trust.riskScore", 100.0, &mut errors);
    }
    errors
}

/// Checks that pricing carries the amounts its mode needs.
///
/// `fixed` needs a positive `amount`; `range` needs both bounds with
/// `minAmount <= maxAmount`. `hourly` and `quote` carry no requirement.
pub fn pricing_rules(pricing: &Pricing, path: &str, errors: &mut Vec<FieldError>) {
    match pricing.kind {
        PricingKind::Fixed => match pricing.amount {
            None => errors.push(FieldError::new(
                format!("{path}.amount"),
                "Fixed pricing requires an amount",
            )),
            Some(amount) if amount <= 0.0 => errors.push(
                FieldError::new(format!("{path}.amount"), "Fixed pricing amount must be positive")
                    .with_value(amount),
            ),
            Some(_) => {}
        },
        PricingKind::Range => match (pricing.min_amount, pricing.max_amount) {
            (Some(min), Some(max)) if min > max => errors.push(
                FieldError::new(
                    path,
                    "Range pricing requires minAmount to be less than or equal to maxAmount",
                )
                .with_value(serde_json::json!({ "minAmount": min, "maxAmount": max })),
            ),
            (Some(_), Some(_)) => {}
            _ => errors.push(FieldError::new(
                path,
                "Range pricing requires both minAmount and maxAmount",
            )),
        },
        PricingKind::Hourly | PricingKind::Quote => {}
    }
}

/// Checks that every open day uses `HH:MM` 24-hour clock times.
pub fn hours_rules(hours: &WeeklyHours, path: &str, errors: &mut Vec<FieldError>) {
    for (weekday, day) in hours.entries() {
        if day.closed {
            continue;
        }
        let key = weekday_key(weekday);
        for (label, time) in [("open", &day.open), ("close", &day.close)] {
            if let Some(time) = time
                && !is_valid_clock_time(time)
            {
                errors.push(
                    FieldError::new(
                        format!("{path}.{key}.{label}"),
                        "Time must use HH:MM 24-hour format",
                    )
                    .with_value(time.as_str()),
                );
            }
        }
    }
}

// ============================================================================
// SECTION: Bookings
// ============================================================================

/// Checks a decoded booking request.
#[must_use]
pub fn booking_request_rules(booking: &BookingRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let customer = &booking.customer;
    contact_rules(&customer.email, customer.phone.as_deref(), "customer", &mut errors);
    errors
}

/// Checks a decoded booking response.
#[must_use]
pub fn booking_response_rules(booking: &BookingResponse) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if booking.confirmation_code.trim().is_empty() {
        errors.push(FieldError::new("confirmationCode", "Confirmation code must not be blank"));
    }
    if booking.total_price.is_some() && booking.currency.is_none() {
        errors.push(FieldError::new("currency", "A total price requires a currency"));
    }
    if let Some(customer) = &booking.customer {
        contact_rules(&customer.email, customer.phone.as_deref(), "customer", &mut errors);
    }
    errors
}

/// Checks email syntax and, when present, phone syntax.
fn contact_rules(email: &str, phone: Option<&str>, path: &str, errors: &mut Vec<FieldError>) {
    if !is_valid_email(email) {
        errors.push(
            FieldError::new(format!("{path}.email"), "Email address is not valid")
                .with_value(email),
        );
    }
    if let Some(phone) = phone
        && !is_valid_phone_number(phone)
    {
        errors.push(
            FieldError::new(format!("{path}.phone"), "Phone number is not valid")
                .with_value(phone),
        );
    }
}

// ============================================================================
// SECTION: Reviews
// ============================================================================

/// Checks a decoded review.
#[must_use]
pub fn review_rules(review: &Review) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if review.content.trim().is_empty() {
        errors.push(FieldError::new("content", "Review content must not be blank"));
    }
    if review.author.name.trim().is_empty() {
        errors.push(FieldError::new("author.name", "Author name must not be blank"));
    }
    if let Some(response) = &review.business_response
        && response.text.trim().is_empty()
    {
        errors.push(FieldError::new("businessResponse.text", "Response text must not be blank"));
    }
    errors
}

// ============================================================================
// SECTION: Analytics
// ============================================================================

/// Checks decoded upstream metrics.
#[must_use]
pub fn upstream_metrics_rules(metrics: &UpstreamMetrics) -> Vec<FieldError> {
    let mut errors = Vec::new();
    score_rule(metrics.zero_click.visibility, "zeroClick.visibility", 100.0, &mut errors);
    score_rule(metrics.zero_click.share_of_voice, "zeroClick.shareOfVoice", 100.0, &mut errors);
    if let Some(placement) = &metrics.citations.placement {
        let placed = placement
            .primary
            .saturating_add(placement.secondary)
            .saturating_add(placement.tertiary);
        if placed > metrics.citations.total {
            errors.push(
                FieldError::new("citations.placement", "Placement counts exceed total citations")
                    .with_value(placed),
            );
        }
    }
    errors
}

/// Checks a decoded intent journey.
#[must_use]
pub fn intent_journey_rules(journey: &IntentJourney) -> Vec<FieldError> {
    let mut errors = Vec::new();
    score_rule(journey.conversion_probability, "conversionProbability", 1.0, &mut errors);
    let mut previous: Option<u32> = None;
    for (index, turn) in journey.turns.iter().enumerate() {
        let field = format!("turns[{index}].intentScore");
        score_rule(Some(turn.intent_score), &field, 100.0, &mut errors);
        if previous.is_some_and(|previous| turn.turn <= previous) {
            errors.push(
                FieldError::new(format!("turns[{index}].turn"), "Turn numbers must increase")
                    .with_value(turn.turn),
            );
        }
        previous = Some(turn.turn);
    }
    errors
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Checks an optional score against the inclusive range `[0, max]`.
fn score_rule(score: Option<f64>, field: &str, max: f64, errors: &mut Vec<FieldError>) {
    if let Some(score) = score
        && !(0.0 ..= max).contains(&score)
    {
        errors.push(
            FieldError::new(field, format!("Must be between 0 and {max}")).with_value(score),
        );
    }
}
