// crates/aidp-contract/src/tooling.rs
// ============================================================================
// Module: Tool Contracts
// Description: Descriptors for the assistant-callable AIDP operations.
// Purpose: Drive tool listings and generated tool documentation.
// Dependencies: aidp-core, serde_json, crate::schemas, crate::types
// ============================================================================

//! ## Overview
//! Eight tools cover discovery, booking, social proof, and lead capture.
//! Descriptors are purely declarative: this crate never executes a tool.
//! Input schemas use standard JSON Schema with per-object `required` arrays
//! and declared defaults, and reuse the entity schema fragments where the
//! shapes overlap (customer details, dates, clock times).

// ============================================================================
// SECTION: Imports
// ============================================================================

use aidp_core::DOCUMENTATION_URL;
use aidp_core::REPOSITORY_URL;
use aidp_core::ToolCategory;
use aidp_core::ToolName;
use serde_json::Value;
use serde_json::json;

use crate::schemas;
use crate::types::ToolContract;
use crate::types::ToolDefinition;
use crate::types::ToolExample;

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Returns every tool contract in canonical order.
#[must_use]
pub fn tool_contracts() -> Vec<ToolContract> {
    ToolName::all().iter().map(|name| tool_contract(*name)).collect()
}

/// Returns the listing form of every tool.
#[must_use]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    tool_contracts().iter().map(ToolContract::definition).collect()
}

/// Returns the tool contracts in a category, in canonical order.
#[must_use]
pub fn tools_in_category(category: ToolCategory) -> Vec<ToolContract> {
    category.tools().into_iter().map(tool_contract).collect()
}

/// Looks up a tool contract by wire name.
#[must_use]
pub fn find_tool(name: &str) -> Option<ToolContract> {
    ToolName::parse(name).map(tool_contract)
}

/// Returns the contract for one tool.
#[must_use]
pub fn tool_contract(name: ToolName) -> ToolContract {
    match name {
        ToolName::SearchBusinesses => search_businesses_contract(),
        ToolName::GetBusinessDetails => get_business_details_contract(),
        ToolName::CheckAvailability => check_availability_contract(),
        ToolName::CreateBooking => create_booking_contract(),
        ToolName::GetBooking => get_booking_contract(),
        ToolName::GetReviews => get_reviews_contract(),
        ToolName::CompareBusinesses => compare_businesses_contract(),
        ToolName::SubmitLead => submit_lead_contract(),
    }
}

// ============================================================================
// SECTION: Discovery
// ============================================================================

/// `search_businesses`.
fn search_businesses_contract() -> ToolContract {
    let input = tool_input_schema(
        &json!({
            "query": described_string("Search query, e.g. \"coffee shops\" or \"italian restaurants\"."),
            "location": described_string("Location, e.g. \"San Francisco, CA\"."),
            "category": described_string("Business category filter."),
            "radius": { "type": "number", "minimum": 0, "default": 5, "description": "Search radius in miles." },
            "limit": limit_schema("Maximum number of results."),
            "sortBy": {
                "type": "string",
                "enum": ["relevance", "rating", "distance", "price"],
                "default": "relevance",
                "description": "Sort order."
            },
            "filters": schemas::object(
                &json!({
                    "priceRange": { "type": "string", "enum": ["$", "$$", "$$$", "$$$$"], "description": "Price band." },
                    "rating": { "type": "number", "minimum": 1, "maximum": 5, "description": "Minimum rating." },
                    "openNow": { "type": "boolean", "description": "Only businesses open now." },
                    "verified": { "type": "boolean", "description": "Only verified businesses." }
                }),
                &[],
            )
        }),
        &["query", "location"],
    );
    build(
        ToolName::SearchBusinesses,
        "Find businesses matching search criteria with location-based filtering and advanced \
         options.",
        input,
        vec![example(
            "Top-rated coffee near a neighbourhood.",
            json!({
                "query": "coffee shops",
                "location": "Mission District, San Francisco, CA",
                "radius": 2,
                "sortBy": "rating",
                "filters": { "openNow": true }
            }),
        )],
        &[
            "Results are ranked by sortBy; relevance is the default.",
            "limit is capped at 50.",
        ],
    )
}

/// `get_business_details`.
fn get_business_details_contract() -> ToolContract {
    let input = tool_input_schema(
        &json!({
            "businessId": business_id("Business identifier."),
            "includeReviews": { "type": "boolean", "default": false, "description": "Include recent reviews." },
            "includeAvailability": { "type": "boolean", "default": false, "description": "Include current availability." }
        }),
        &["businessId"],
    );
    build(
        ToolName::GetBusinessDetails,
        "Get comprehensive details for a specific business, including AI-exclusive content.",
        input,
        vec![example(
            "Full profile with reviews.",
            json!({ "businessId": "biz_8f3a2c91d7e64b05a1c3", "includeReviews": true }),
        )],
        &["Returns the complete business profile entity."],
    )
}

// ============================================================================
// SECTION: Booking
// ============================================================================

/// `check_availability`.
fn check_availability_contract() -> ToolContract {
    let input = tool_input_schema(
        &json!({
            "businessId": business_id("Business identifier."),
            "serviceId": described_string("Specific service identifier."),
            "date": describe(schemas::date_schema(), "Date in YYYY-MM-DD format."),
            "time": describe(schemas::clock_time_schema(), "Preferred time in HH:MM format."),
            "partySize": { "type": "integer", "minimum": 1, "maximum": 50, "default": 1, "description": "Number of people." },
            "duration": { "type": "integer", "minimum": 1, "description": "Duration in minutes." }
        }),
        &["businessId", "date"],
    );
    build(
        ToolName::CheckAvailability,
        "Check availability for a business service or time slot.",
        input,
        vec![example(
            "Evening slot for two.",
            json!({
                "businessId": "biz_8f3a2c91d7e64b05a1c3",
                "date": "2026-11-14",
                "time": "18:00",
                "partySize": 2
            }),
        )],
        &["Omit time to list every open slot on the date."],
    )
}

/// `create_booking`.
fn create_booking_contract() -> ToolContract {
    let input = tool_input_schema(
        &json!({
            "businessId": business_id("Business identifier."),
            "serviceId": described_string("Service identifier."),
            "date": describe(schemas::date_schema(), "Date in YYYY-MM-DD format."),
            "time": describe(schemas::clock_time_schema(), "Time in HH:MM format."),
            "partySize": { "type": "integer", "minimum": 1, "maximum": 50, "description": "Number of people." },
            "duration": { "type": "integer", "minimum": 1, "description": "Duration in minutes." },
            "customer": customer_schema(true),
            "paymentMethod": described_string("Payment method if a deposit is required.")
        }),
        &["businessId", "date", "time", "partySize", "customer"],
    );
    build(
        ToolName::CreateBooking,
        "Create a new booking at a business.",
        input,
        vec![example(
            "Sunset paddle for two.",
            json!({
                "businessId": "biz_8f3a2c91d7e64b05a1c3",
                "serviceId": "svc_sunset",
                "date": "2026-11-14",
                "time": "18:00",
                "partySize": 2,
                "customer": {
                    "name": "Alex Chen",
                    "email": "alex@example.com",
                    "phone": "+61 400 000 000"
                }
            }),
        )],
        &[
            "Check availability first; the business may still decline.",
            "The response is a booking response entity with a confirmation code.",
        ],
    )
}

/// `get_booking`.
fn get_booking_contract() -> ToolContract {
    let input = tool_input_schema(
        &json!({
            "bookingId": described_string("Booking identifier."),
            "confirmationCode": described_string("Confirmation code."),
            "email": describe(schemas::email_schema(), "Customer email for verification.")
        }),
        &[],
    );
    build(
        ToolName::GetBooking,
        "Retrieve booking details by confirmation code or booking ID.",
        input,
        vec![example(
            "Lookup by confirmation code.",
            json!({ "confirmationCode": "HKT-7Q2M", "email": "alex@example.com" }),
        )],
        &["Provide bookingId or confirmationCode; email is used for verification."],
    )
}

// ============================================================================
// SECTION: Social
// ============================================================================

/// `get_reviews`.
fn get_reviews_contract() -> ToolContract {
    let input = tool_input_schema(
        &json!({
            "businessId": business_id("Business identifier."),
            "limit": limit_schema("Maximum reviews to return."),
            "sortBy": {
                "type": "string",
                "enum": ["newest", "oldest", "rating_high", "rating_low"],
                "default": "newest",
                "description": "Sort order."
            },
            "rating": { "type": "integer", "minimum": 1, "maximum": 5, "description": "Filter by rating." },
            "verified": { "type": "boolean", "description": "Only verified reviews." }
        }),
        &["businessId"],
    );
    build(
        ToolName::GetReviews,
        "Get reviews and ratings for a business.",
        input,
        vec![example(
            "Latest verified reviews.",
            json!({ "businessId": "biz_8f3a2c91d7e64b05a1c3", "limit": 5, "verified": true }),
        )],
        &["Each item is a review entity."],
    )
}

/// `compare_businesses`.
fn compare_businesses_contract() -> ToolContract {
    let input = tool_input_schema(
        &json!({
            "businessIds": {
                "type": "array",
                "minItems": 2,
                "maxItems": 5,
                "items": business_id("Business identifier."),
                "description": "Businesses to compare (2-5)."
            },
            "criteria": {
                "type": "array",
                "items": {
                    "type": "string",
                    "enum": ["rating", "price", "distance", "reviews", "amenities"]
                },
                "default": ["rating", "price", "distance"],
                "description": "Comparison criteria."
            }
        }),
        &["businessIds"],
    );
    build(
        ToolName::CompareBusinesses,
        "Compare multiple businesses side by side.",
        input,
        vec![example(
            "Two tour operators on price and rating.",
            json!({
                "businessIds": ["biz_8f3a2c91d7e64b05a1c3", "biz_1b2c3d4e5f6a7b8c9d0e"],
                "criteria": ["rating", "price"]
            }),
        )],
        &["Between two and five businesses per comparison."],
    )
}

// ============================================================================
// SECTION: Lead
// ============================================================================

/// `submit_lead`.
fn submit_lead_contract() -> ToolContract {
    let input = tool_input_schema(
        &json!({
            "businessId": business_id("Business identifier."),
            "customer": customer_schema(false),
            "inquiry": schemas::object(
                &json!({
                    "type": {
                        "type": "string",
                        "enum": ["general", "booking", "catering", "event", "pricing"],
                        "description": "Type of inquiry."
                    },
                    "subject": described_string("Inquiry subject."),
                    "message": described_string("Detailed message."),
                    "preferredContact": {
                        "type": "string",
                        "enum": ["email", "phone", "either"],
                        "default": "email",
                        "description": "Preferred contact method."
                    }
                }),
                &["type", "subject", "message"],
            ),
            "context": schemas::object(
                &json!({
                    "source": described_string("Where the lead came from."),
                    "urgency": {
                        "type": "string",
                        "enum": ["low", "medium", "high"],
                        "default": "medium",
                        "description": "Urgency level."
                    }
                }),
                &[],
            )
        }),
        &["businessId", "customer", "inquiry"],
    );
    build(
        ToolName::SubmitLead,
        "Submit a lead or inquiry to a business.",
        input,
        vec![example(
            "Catering inquiry.",
            json!({
                "businessId": "biz_8f3a2c91d7e64b05a1c3",
                "customer": { "name": "Jordan Lee", "email": "jordan@example.com" },
                "inquiry": {
                    "type": "event",
                    "subject": "Team outing for 12",
                    "message": "Can you host a private sunset tour in December?"
                },
                "context": { "urgency": "low" }
            }),
        )],
        &["Use for requests that need a quote or a human reply."],
    )
}

// ============================================================================
// SECTION: Markdown
// ============================================================================

/// Renders the tool surface as markdown, grouped by category.
#[must_use]
pub fn tooling_markdown(contracts: &[ToolContract]) -> String {
    let mut lines = vec![
        String::from("# AIDP Tools"),
        String::new(),
        format!("Protocol documentation: <{DOCUMENTATION_URL}>"),
        format!("Source: <{REPOSITORY_URL}>"),
    ];
    for category in ToolCategory::all() {
        lines.push(String::new());
        lines.push(format!("## {}", title_case(category.as_str())));
        for contract in contracts.iter().filter(|contract| contract.category == *category) {
            lines.push(String::new());
            lines.push(format!("### `{}`", contract.name));
            lines.push(String::new());
            lines.push(contract.description.clone());
            parameter_table(&contract.input_schema, &mut lines);
            if !contract.notes.is_empty() {
                lines.push(String::new());
                lines.extend(contract.notes.iter().map(|note| format!("- {note}")));
            }
        }
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Appends a parameter table when the input schema declares properties.
fn parameter_table(input_schema: &Value, lines: &mut Vec<String>) {
    let Some(Value::Object(properties)) = input_schema.get("properties") else {
        return;
    };
    let required = required_names(input_schema);
    lines.push(String::new());
    lines.push(String::from("| Parameter | Type | Required | Description |"));
    lines.push(String::from("| --- | --- | --- | --- |"));
    for (name, property) in properties {
        let kind = property.get("type").and_then(Value::as_str).unwrap_or("any");
        let description = property.get("description").and_then(Value::as_str).unwrap_or("");
        let flag = if required.contains(&name.as_str()) { "yes" } else { "no" };
        lines.push(format!("| `{name}` | {kind} | {flag} | {description} |"));
    }
}

/// Capitalizes the first letter of a category label.
fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

/// Reads the top-level `required` array of a schema.
fn required_names(schema: &Value) -> Vec<&str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

// ============================================================================
// SECTION: Schema Helpers
// ============================================================================

/// Builds a tool contract.
fn build(
    name: ToolName,
    description: &str,
    input_schema: Value,
    examples: Vec<ToolExample>,
    notes: &[&str],
) -> ToolContract {
    ToolContract {
        name,
        category: name.category(),
        description: description.to_string(),
        input_schema,
        examples,
        notes: notes.iter().map(|note| (*note).to_string()).collect(),
    }
}

/// Builds a tool example.
fn example(description: &str, input: Value) -> ToolExample {
    ToolExample {
        description: description.to_string(),
        input,
    }
}

/// Top-level tool input schema with a `$schema` header.
fn tool_input_schema(properties: &Value, required: &[&str]) -> Value {
    let mut schema = schemas::object(properties, required);
    if let Value::Object(map) = &mut schema {
        map.insert(
            String::from("$schema"),
            Value::String(schemas::SCHEMA_DIALECT.to_string()),
        );
        if required.is_empty() {
            map.insert(String::from("required"), json!([]));
        }
    }
    schema
}

/// Customer block; bookings also require a phone number.
fn customer_schema(phone_required: bool) -> Value {
    let required: &[&str] =
        if phone_required { &["name", "email", "phone"] } else { &["name", "email"] };
    let schema = schemas::object(
        &json!({
            "name": { "type": "string", "minLength": 1, "description": "Customer name." },
            "email": describe(schemas::email_schema(), "Customer email."),
            "phone": described_string("Customer phone number."),
            "specialRequests": described_string("Special requests or notes.")
        }),
        required,
    );
    describe(schema, "Customer information.")
}

/// Business identifier parameter.
fn business_id(description: &str) -> Value {
    describe(schemas::business_id_schema(), description)
}

/// Page-size parameter.
fn limit_schema(description: &str) -> Value {
    json!({ "type": "integer", "minimum": 1, "maximum": 50, "default": 10, "description": description })
}

/// String parameter with a description.
fn described_string(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

/// Attaches a description to a schema object.
fn describe(schema: Value, description: &str) -> Value {
    let Value::Object(mut map) = schema else {
        return schema;
    };
    map.insert(String::from("description"), Value::String(description.to_string()));
    Value::Object(map)
}
