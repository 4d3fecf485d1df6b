// Configuration module entry point
// Loads settings and builds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::PathBuf;

pub use state::AppState;
pub use types::{
    BrowserConfig, Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig,
};

/// Default config file, looked up without extension
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("FILETREE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("browser.mount", "/files/")?
            .set_default("browser.confine_to_root", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("performance.backlog", 128)?
            .set_default(
                "http.server_name",
                concat!("filetree/", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("http.enable_cors", false)?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;
        cfg.browser.mount = normalize_mount(&cfg.browser.mount);
        Ok(cfg)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Root directory of the tree, captured once at startup
    pub fn root_dir(&self) -> std::io::Result<PathBuf> {
        match self.browser.root.as_deref() {
            Some(root) => Ok(PathBuf::from(root)),
            None => std::env::current_dir(),
        }
    }
}

/// Force the mount prefix into `/prefix/` form
fn normalize_mount(mount: &str) -> String {
    let trimmed = mount.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
