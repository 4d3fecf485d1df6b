//! HTTP protocol layer module
//!
//! MIME lookup and response builders, independent of the browsing logic.

pub mod mime;
pub mod response;

pub use response::{
    build_404_response, build_405_response, build_500_response, build_attachment_response,
    build_html_response, build_options_response, build_redirect_response,
};
