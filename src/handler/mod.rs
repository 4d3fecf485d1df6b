//! Request handler module
//!
//! Routes requests and serves the file tree pages.

pub mod files;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
