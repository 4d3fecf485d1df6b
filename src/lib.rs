//! Web file browser: directory listings, inline views of text and code
//! files, and attachment downloads for everything else.

pub mod browser;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod render;
pub mod server;
