//! Service layer for marina business rules.
//!
//! Services sit between the controllers and the repositories. They:
//!
//! - **Enforce rules**: uniqueness checks, referenced-record existence, tier promotion
//! - **Orchestrate**: combine several repository reads, as the analytics engine does
//! - **Speak domain**: accept params and return domain models, never DTOs or entities
//! - **Map errors**: turn missing records into `AppError::NotFound`

pub mod analytics;
pub mod asset;
pub mod customer;
pub mod dock;
pub mod feedback;
pub mod maintenance;
pub mod service_request;
pub mod visit;
