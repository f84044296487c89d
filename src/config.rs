//! Board Configuration
//!
//! Read once at start-up from `data-*` attributes on the document element:
//! `data-api-base`, `data-log-level`, `data-announce-success`.

use std::str::FromStr;

use tracing::Level;

const ATTR_API_BASE: &str = "data-api-base";
const ATTR_LOG_LEVEL: &str = "data-log-level";
const ATTR_ANNOUNCE_SUCCESS: &str = "data-announce-success";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Prefix for every `/api/...` path, without trailing slash
    pub api_base: String,
    pub log_level: Level,
    /// Show a notice after a successful create or delete
    pub announce_success: bool,
}

impl BoardConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            log_level: Level::INFO,
            announce_success: true,
        }
    }

    /// Build from attribute values; `origin` is used when no API base is given
    pub fn from_attrs(
        origin: &str,
        api_base: Option<&str>,
        log_level: Option<&str>,
        announce_success: Option<&str>,
    ) -> Self {
        let base = api_base.map(str::trim).filter(|b| !b.is_empty()).unwrap_or(origin);
        let mut config = Self::new(base);
        if let Some(level) = log_level.and_then(|l| Level::from_str(l.trim()).ok()) {
            config.log_level = level;
        }
        if let Some(flag) = announce_success {
            config.announce_success = !flag.trim().eq_ignore_ascii_case("false");
        }
        config
    }

    /// Read configuration from the current page
    pub fn from_page() -> Self {
        let window = web_sys::window();
        let origin = window
            .as_ref()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let root = window
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        let attr = |name: &str| root.as_ref().and_then(|el| el.get_attribute(name));

        Self::from_attrs(
            &origin,
            attr(ATTR_API_BASE).as_deref(),
            attr(ATTR_LOG_LEVEL).as_deref(),
            attr(ATTR_ANNOUNCE_SUCCESS).as_deref(),
        )
    }

    /// Absolute URL for an API path such as `/api/tasks`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
