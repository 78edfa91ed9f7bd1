//! Core business logic for the HostelHub backend.

pub mod services;

pub use services::*;
