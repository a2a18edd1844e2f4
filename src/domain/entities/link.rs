//! Link entity: the mapping between a slug and a destination URL.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A shortened link owned by an account.
///
/// `id` is the store-assigned surrogate key, immutable once assigned.
/// `slug` is globally unique (unique index in the store) and changes only
/// through an explicit alias update. `click_count` only ever increases,
/// and only through the redirect path.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub destination: String,
    pub owner_id: Uuid,
    pub click_count: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Returns true if the link has passed its expiry relative to `now`.
    ///
    /// Expiry is strict: a link expiring exactly at `now` is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }
}

/// Input for inserting a link row.
///
/// The slug is not part of the input: the store assigns a provisional
/// placeholder on insert, and the slug assigner persists the real slug
/// once the surrogate id is known.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub destination: String,
    pub owner_id: Uuid,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn link_expiring_at(expires_at: Option<DateTime<Utc>>) -> Link {
        Link {
            id: 1,
            slug: "100001".to_string(),
            destination: "https://example.com/".to_string(),
            owner_id: Uuid::new_v4(),
            click_count: 0,
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[test]
    fn test_no_expiry_never_expires() {
        let link = link_expiring_at(None);
        assert!(!link.is_expired_at(Utc::now() + Duration::days(365 * 100)));
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let now = Utc::now();
        let link = link_expiring_at(Some(now - Duration::seconds(1)));
        assert!(link.is_expired_at(now));
    }

    #[test]
    fn test_expiry_comparison_is_strict() {
        let now = Utc::now();
        let link = link_expiring_at(Some(now));
        assert!(!link.is_expired_at(now));
        assert!(link.is_expired_at(now + Duration::nanoseconds(1)));
    }

    #[test]
    fn test_future_expiry_is_valid() {
        let now = Utc::now();
        let link = link_expiring_at(Some(now + Duration::hours(1)));
        assert!(!link.is_expired_at(now));
    }
}
