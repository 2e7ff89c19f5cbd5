// crates/aidp-core/src/core/booking.rs
// ============================================================================
// Module: Booking Model
// Description: Booking requests submitted by assistants and business replies.
// Purpose: Typed shapes for the booking request/response entities.
// Dependencies: serde, crate::core::identifiers
// ============================================================================

//! ## Overview
//! A booking request is what an assistant sends on behalf of a customer; a
//! booking response is what the business returns. Dates and clock times stay
//! in their wire string form (`YYYY-MM-DD`, `HH:MM`) and are checked by the
//! schema layer.

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::BookingId;
use crate::core::identifiers::BusinessId;
use crate::core::identifiers::ServiceId;

// ============================================================================
// SECTION: Request
// ============================================================================

/// Booking request submitted on behalf of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Target business.
    pub business_id: BusinessId,
    /// Requested service, when the business offers several.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<ServiceId>,
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Clock time (`HH:MM`, 24-hour).
    pub time: String,
    /// Duration in minutes.
    #[serde(
        default,
        deserialize_with = "crate::core::integral::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<u32>,
    /// Number of guests (1..=50).
    #[serde(deserialize_with = "crate::core::integral::deserialize")]
    pub party_size: u32,
    /// Customer contact details.
    pub customer: Customer,
    /// Preferred payment method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Customer contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer name.
    pub name: String,
    /// Customer email.
    pub email: String,
    /// Customer phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Special requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

// ============================================================================
// SECTION: Response
// ============================================================================

/// Booking record returned by a business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    /// Booking identifier.
    pub id: BookingId,
    /// Business that accepted the booking.
    pub business_id: BusinessId,
    /// Business display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Booked service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<ServiceId>,
    /// Booked service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Clock time (`HH:MM`).
    pub time: String,
    /// Duration in minutes.
    #[serde(
        default,
        deserialize_with = "crate::core::integral::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<u32>,
    /// Number of guests.
    #[serde(deserialize_with = "crate::core::integral::deserialize")]
    pub party_size: u32,
    /// Booking status.
    pub status: BookingStatus,
    /// Customer contact details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// Total price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    /// ISO 4217 currency of `total_price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Confirmation code shown to the customer.
    pub confirmation_code: String,
    /// RFC 3339 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// RFC 3339 free-cancellation deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_deadline: Option<String>,
    /// Arrival instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<BookingInstructions>,
}

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Awaiting confirmation.
    Pending,
    /// Confirmed by the business.
    Confirmed,
    /// Cancelled by either party.
    Cancelled,
    /// Service delivered.
    Completed,
}

impl BookingStatus {
    /// Returns the wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

/// Instructions attached to a confirmed booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInstructions {
    /// Arrival guidance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,
    /// Meeting point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Contact on the day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}
