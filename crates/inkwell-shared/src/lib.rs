//! # Inkwell Shared
//!
//! Request and response types shared by the HTML and JSON surfaces.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
