//! Core business entities.

mod account;
mod feedback;
mod link;

pub use account::{Account, NewAccount};
pub use feedback::{FEEDBACK_KINDS, FEEDBACK_STATUS_PENDING, Feedback, NewFeedback};
pub use link::{Link, NewLink};
