//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Every mutable record has an `Update…Params` whitelist that is applied with an explicit
//! `merge`, producing a new value the repository persists.

pub mod analytics;
pub mod asset;
pub mod customer;
pub mod dock;
pub mod enums;
pub mod feedback;
pub mod maintenance;
pub mod service_request;
pub mod visit;
