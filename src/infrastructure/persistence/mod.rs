pub mod memory;
pub mod pg_account_repository;
pub mod pg_analytics_repository;
pub mod pg_feedback_repository;
pub mod pg_link_repository;

pub use memory::MemoryStore;
pub use pg_account_repository::PgAccountRepository;
pub use pg_analytics_repository::PgAnalyticsRepository;
pub use pg_feedback_repository::PgFeedbackRepository;
pub use pg_link_repository::PgLinkRepository;
