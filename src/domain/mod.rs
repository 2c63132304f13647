//! # Domain Layer
//!
//! Entities, value objects and domain errors for the Treasury trading
//! fabric. Everything here is synchronous and side-effect free; services
//! in the application layer orchestrate the flow.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
