//! HTTP handlers.
//!
//! Each handler builds its service from `AppState`, converts the request DTO into
//! params, calls the service and converts the domain result back into a DTO. Access
//! control happens in `middleware::auth` before any handler runs.

pub mod analytics;
pub mod asset;
pub mod customer;
pub mod dock;
pub mod feedback;
pub mod health;
pub mod maintenance;
pub mod service_request;
pub mod visit;
