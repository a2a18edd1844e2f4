//! Slug generation and custom alias validation.
//!
//! Generated slugs are the Base62 encoding of `id + 62^(min_length-1)`.
//! The offset guarantees every slug has at least `min_length` characters,
//! and because the store-assigned id is strictly unique and the transform
//! is injective, generated slugs are unique by construction. There is no
//! collision probe and no retry loop on this path.

use crate::error::AppError;
use crate::utils::base62;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Default minimum length of generated slugs.
pub const DEFAULT_MIN_SLUG_LENGTH: u32 = 6;

/// Allowed characters for user-chosen aliases (length enforced separately).
static ALIAS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

const ALIAS_MIN_LENGTH: usize = 3;
const ALIAS_MAX_LENGTH: usize = 50;

/// Offset added to link ids before encoding.
///
/// `62^(min_length-1)` is the smallest number whose Base62 form has
/// `min_length` digits, so `id + offset` always encodes to at least that
/// many characters.
pub fn slug_offset(min_length: u32) -> u64 {
    62u64.pow(min_length.saturating_sub(1))
}

/// Produces the slug for a freshly inserted link.
///
/// Deterministic with respect to `id`; the result decodes back to
/// `id + slug_offset(min_length)`.
pub fn generate_slug(id: i64, min_length: u32) -> String {
    debug_assert!(id >= 0, "store-assigned ids are non-negative");
    base62::encode(id as u64 + slug_offset(min_length))
}

/// Validates a user-chosen alias: 3-50 characters from `[A-Za-z0-9_-]`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the alias is out of bounds or
/// contains other characters. Availability is checked separately against
/// the store.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.len() < ALIAS_MIN_LENGTH || alias.len() > ALIAS_MAX_LENGTH {
        return Err(AppError::bad_request(
            "Custom alias must be 3-50 characters",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !ALIAS_PATTERN.is_match(alias) {
        return Err(AppError::bad_request(
            "Custom alias can only contain letters, digits, underscores, and hyphens",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
