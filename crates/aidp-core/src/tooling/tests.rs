// crates/aidp-core/src/tooling/tests.rs
// ============================================================================
// Module: Tool Name Unit Tests
// Description: Ordering, parsing, and category assignment of tool names.
// Purpose: Catch drift in the canonical tool surface.
// Dependencies: aidp-core
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions."
)]

use std::collections::BTreeSet;

use super::ToolCategory;
use super::ToolName;

#[test]
fn tool_names_are_unique_and_parse_back() {
    let mut seen = BTreeSet::new();
    for tool in ToolName::all() {
        assert!(seen.insert(tool.as_str()), "duplicate tool name {tool}");
        assert_eq!(ToolName::parse(tool.as_str()), Some(*tool));
    }
    assert_eq!(seen.len(), 8);
    assert_eq!(ToolName::parse("delete_everything"), None);
}

#[test]
fn canonical_order_starts_with_discovery() {
    let names: Vec<&str> = ToolName::all().iter().map(|tool| tool.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "search_businesses",
            "get_business_details",
            "check_availability",
            "create_booking",
            "get_booking",
            "get_reviews",
            "compare_businesses",
            "submit_lead",
        ]
    );
}

#[test]
fn categories_partition_tools() {
    let total: usize = ToolCategory::all().iter().map(|category| category.tools().len()).sum();
    assert_eq!(total, ToolName::all().len());
    assert_eq!(
        ToolCategory::Booking.tools(),
        vec![ToolName::CheckAvailability, ToolName::CreateBooking, ToolName::GetBooking]
    );
    assert_eq!(ToolCategory::Lead.tools(), vec![ToolName::SubmitLead]);
}

#[test]
fn tool_name_serializes_as_wire_name() {
    let value = serde_json::to_value(ToolName::CompareBusinesses).unwrap();
    assert_eq!(value, serde_json::json!("compare_businesses"));
}
