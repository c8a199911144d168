//! # Inkwell Core
//!
//! The domain layer of the Inkwell blog.
//! This crate contains the post/comment model, the listing contract and the
//! query service, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::PostService;
