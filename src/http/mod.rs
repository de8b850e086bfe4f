//! HTTP module
//!
//! Response builders shared by the request handler.

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_413_response, build_html_response,
    build_options_response,
};
