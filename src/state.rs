//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{FeedbackService, LinkService, RedirectService};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::AccountRepository;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub feedback_service: Arc<FeedbackService>,
    pub accounts: Arc<dyn AccountRepository>,
    pub click_sender: mpsc::Sender<ClickEvent>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        redirect_service: Arc<RedirectService>,
        feedback_service: Arc<FeedbackService>,
        accounts: Arc<dyn AccountRepository>,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            link_service,
            redirect_service,
            feedback_service,
            accounts,
            click_sender,
        }
    }
}
