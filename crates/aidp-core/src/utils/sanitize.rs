// crates/aidp-core/src/utils/sanitize.rs
// ============================================================================
// Module: Profile Sanitizing
// Description: Strip internal-only contact data before a profile is published.
// Purpose: Keep staff mailboxes out of assistant-facing profiles.
// Dependencies: tracing, crate::core::profile
// ============================================================================

//! ## Overview
//! A contact email on an `@internal...` domain is never published. The
//! email is a required profile field, so it is blanked rather than removed:
//! a sanitized profile with a blank email fails `contact.email` validation
//! until the owner supplies a public address.

use tracing::debug;

use crate::core::profile::BusinessProfile;

/// Domain prefix marking staff-only mailboxes.
const INTERNAL_DOMAIN_MARKER: &str = "@internal";

/// Returns true when `email` points at an internal mailbox.
#[must_use]
pub fn is_internal_email(email: &str) -> bool {
    email.to_ascii_lowercase().contains(INTERNAL_DOMAIN_MARKER)
}

/// Returns the profile with internal-only contact data removed.
#[must_use]
pub fn sanitize_profile(mut profile: BusinessProfile) -> BusinessProfile {
    if is_internal_email(&profile.contact.email) {
        debug!(business = profile.id.as_str(), "blanked internal contact email");
        profile.contact.email.clear();
    }
    profile
}
