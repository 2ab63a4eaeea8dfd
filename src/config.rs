//! Page Configuration
//!
//! Build-time settings, overridden by `<meta>` tags in the host page:
//!
//! ```html
//! <meta name="tasklist-api-base" content="https://tasks.example/api/tasks">
//! <meta name="tasklist-log" content="debug">
//! ```

use tasklist_core::{ApiConfig, ConfigError};

const BASE_URL_META: &str = "tasklist-api-base";
const LOG_LEVEL_META: &str = "tasklist-log";

/// Resolve the configuration. Invalid values are skipped and returned
/// alongside so they can be logged once logging is up.
pub fn load() -> (ApiConfig, Vec<ConfigError>) {
    let mut problems = Vec::new();

    let mut config = ApiConfig::from_build_env().unwrap_or_else(|e| {
        problems.push(e);
        ApiConfig::default()
    });

    if let Some(url) = meta_content(BASE_URL_META) {
        match config.clone().with_base_url(&url) {
            Ok(updated) => config = updated,
            Err(e) => problems.push(e),
        }
    }

    if let Some(level) = meta_content(LOG_LEVEL_META) {
        match config.clone().with_log_level(&level) {
            Ok(updated) => config = updated,
            Err(e) => problems.push(e),
        }
    }

    (config, problems)
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element
        .get_attribute("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
