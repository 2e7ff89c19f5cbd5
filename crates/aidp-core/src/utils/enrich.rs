// crates/aidp-core/src/utils/enrich.rs
// ============================================================================
// Module: Profile Enrichment
// Description: Merge AI-exclusive content into an existing profile.
// Purpose: Fill gaps in exclusive content without overwriting owner edits.
// Dependencies: crate::core::profile
// ============================================================================

//! Merging of AI-exclusive content into a profile.

use crate::core::profile::BusinessProfile;
use crate::core::profile::ExclusiveContent;

/// Merges `patch` into the profile's exclusive content.
///
/// Values already present on the profile win; only empty fields are filled.
/// An empty patch leaves the profile untouched.
#[must_use]
pub fn enrich_exclusive_content(
    mut profile: BusinessProfile,
    patch: ExclusiveContent,
) -> BusinessProfile {
    if patch == ExclusiveContent::default() {
        return profile;
    }
    let target = profile
        .ai_optimization
        .get_or_insert_with(Default::default)
        .exclusive_content
        .get_or_insert_with(Default::default);
    fill(&mut target.insider_tips, patch.insider_tips);
    fill(&mut target.local_secrets, patch.local_secrets);
    fill(&mut target.behind_the_scenes, patch.behind_the_scenes);
    fill(&mut target.cultural_notes, patch.cultural_notes);
    fill(&mut target.sustainability_practices, patch.sustainability_practices);
    if target.exclusive_offers.is_empty() {
        target.exclusive_offers = patch.exclusive_offers;
    }
    if target.customer_testimonials.is_empty() {
        target.customer_testimonials = patch.customer_testimonials;
    }
    profile
}

/// Sets `slot` from `value` when the slot is empty.
fn fill(slot: &mut Option<String>, value: Option<String>) {
    if slot.is_none() {
        *slot = value;
    }
}
