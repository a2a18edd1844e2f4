//! Repository traits decoupling services from storage.

mod account_repository;
mod analytics_repository;
mod feedback_repository;
mod link_repository;

pub use account_repository::AccountRepository;
pub use analytics_repository::AnalyticsRepository;
pub use feedback_repository::FeedbackRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use analytics_repository::MockAnalyticsRepository;
#[cfg(test)]
pub use feedback_repository::MockFeedbackRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
