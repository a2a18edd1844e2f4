//! Utility functions for slug encoding, validation, and key generation.
//!
//! - [`base62`] - Integer <-> Base62 string codec
//! - [`slug`] - Slug generation and custom alias validation
//! - [`destination`] - Destination URL validation
//! - [`api_key`] - API key generation for accounts

pub mod api_key;
pub mod base62;
pub mod destination;
pub mod slug;
