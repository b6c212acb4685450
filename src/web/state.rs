// src/web/state.rs
// Web server state management

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::error::Result;
use crate::render::{LinkStyle, Renderer};

/// Shared application state. Everything in it is read-only.
#[derive(Clone)]
pub struct AppState {
    /// Portfolio records
    pub catalog: Arc<Catalog>,

    /// Page templates
    pub renderer: Arc<Renderer>,

    /// Simulated typing delay before a chat reply
    pub chat_delay: Duration,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, renderer: Renderer, chat_delay: Duration) -> Self {
        Self {
            catalog,
            renderer: Arc::new(renderer),
            chat_delay,
        }
    }

    /// State over the built-in catalog with dynamic category links
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let renderer = Renderer::new(settings, LinkStyle::Query)?;
        Ok(Self::new(Catalog::shared(), renderer, settings.chat_delay))
    }
}
