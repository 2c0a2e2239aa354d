//! Shared building blocks used across the data model

pub mod errors;

pub use errors::FieldError;
