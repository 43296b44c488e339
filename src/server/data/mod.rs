//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. The analytics
//! repository is read-only and spans several tables.

pub mod analytics;
pub mod asset;
pub mod customer;
pub mod dock;
pub mod feedback;
pub mod maintenance;
pub mod service_request;
pub mod visit;

#[cfg(test)]
mod test;
