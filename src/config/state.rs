// Application state module
// Everything a request handler needs, shared read-only across connections

use std::path::PathBuf;

use super::types::Config;
use crate::browser::Browser;
use crate::logger::LogFormat;
use crate::render::{RenderError, Renderer};

/// Application state
pub struct AppState {
    pub config: Config,
    pub browser: Browser,
    pub renderer: Renderer,
    pub access_log_format: LogFormat,
}

impl AppState {
    /// Build the state for `root`, compiling the page templates
    pub fn new(config: &Config, root: PathBuf) -> Result<Self, RenderError> {
        Ok(Self {
            browser: Browser::new(root, config.browser.confine_to_root),
            renderer: Renderer::new()?,
            access_log_format: LogFormat::parse(&config.logging.access_log_format),
            config: config.clone(),
        })
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }

    /// Mount prefix of the file tree, always `/…/`
    pub fn mount(&self) -> &str {
        &self.config.browser.mount
    }
}
