// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::provider::ModelProvider;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub provider: Arc<dyn ModelProvider>,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn ModelProvider>) -> Self {
        Self { config, provider }
    }
}
