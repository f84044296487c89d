//! Application Context
//!
//! Shared API client and settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpTaskApi;
use crate::config::BoardConfig;

/// App-wide settings provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// One client for the page; clones share its connection pool
    api: StoredValue<HttpTaskApi, LocalStorage>,
    announce_success: bool,
}

impl AppContext {
    pub fn new(config: BoardConfig) -> Self {
        let announce_success = config.announce_success;
        Self {
            api: StoredValue::new_local(HttpTaskApi::new(config)),
            announce_success,
        }
    }

    pub fn api(&self) -> HttpTaskApi {
        self.api.get_value()
    }

    pub fn announce_success(&self) -> bool {
        self.announce_success
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
