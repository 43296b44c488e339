//! Request and response DTOs for the HTTP API.
//!
//! Everything here is plain serde data with OpenAPI schemas. Field names are rendered
//! in camelCase and enumerations in SCREAMING_SNAKE_CASE.

pub mod analytics;
pub mod api;
pub mod asset;
pub mod customer;
pub mod dock;
pub mod feedback;
pub mod maintenance;
pub mod service_request;
pub mod visit;
