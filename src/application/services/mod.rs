//! Business logic services orchestrating repositories.

mod feedback_service;
mod link_service;
mod redirect_service;

pub use feedback_service::FeedbackService;
pub use link_service::LinkService;
pub use redirect_service::RedirectService;
