//! Click event model for asynchronous click logging.

/// An in-memory click record passed from the redirect handler to the
/// background worker via a bounded channel.
///
/// The click *counter* on the link row is incremented synchronously in the
/// redirect path; this event only feeds the best-effort analytics log.
/// All client metadata is optional since headers may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickEvent {
    pub link_id: i64,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}

impl ClickEvent {
    pub fn new(
        link_id: i64,
        ip: Option<String>,
        user_agent: Option<&str>,
        referrer: Option<&str>,
    ) -> Self {
        Self {
            link_id,
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
            referrer: referrer.map(|s| s.to_string()),
        }
    }
}
