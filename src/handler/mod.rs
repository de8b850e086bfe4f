//! Handler module
//!
//! Request dispatch entry point and the page handlers it renders.

pub mod pages;
pub mod router;

pub use router::handle_request;
