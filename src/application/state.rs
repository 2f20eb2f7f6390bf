// src/application/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::events::{create_event_bus, EventBus};
use crate::integrations::RagaApiClient;
use crate::services::{
    ArchiveService, CarnaticBrowser, ChatService, FeedbackService, RagaResolver,
    SearchController,
};

/// Application state shared by every command.
/// All fields are Arc-wrapped for sharing across tasks.
pub struct AppState {
    pub config: AppConfig,
    pub event_bus: Arc<EventBus>,
    pub search_controller: Arc<SearchController>,
    pub browser: Arc<CarnaticBrowser>,
    pub archive_service: Arc<ArchiveService>,
    pub chat_service: Arc<ChatService>,
    pub feedback_service: Arc<FeedbackService>,
}

impl AppState {
    /// Wire every service against one HTTP client for the configured server
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let client = Arc::new(RagaApiClient::new(config)?);
        let event_bus = Arc::new(create_event_bus());

        let resolver = Arc::new(RagaResolver::new(client.clone(), Arc::clone(&event_bus)));
        let search_controller = Arc::new(SearchController::new(resolver));
        let browser = Arc::new(CarnaticBrowser::new(client.clone()));
        let archive_service = Arc::new(ArchiveService::new(client.clone(), Arc::clone(&event_bus)));
        let chat_service = Arc::new(ChatService::new(client.clone(), Arc::clone(&event_bus)));
        let feedback_service = Arc::new(FeedbackService::new(client, Arc::clone(&event_bus)));

        log::info!(
            "event=app_state_ready module=application api_base_url={}",
            config.api_base_url
        );

        Ok(Self {
            config: config.clone(),
            event_bus,
            search_controller,
            browser,
            archive_service,
            chat_service,
            feedback_service,
        })
    }
}
