//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Unlike fixtures, factories insert into the database and
//! return the stored model, so generated identifiers are available to the test.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let customer = factory::create_customer(&db).await?;
//!     let visit = factory::create_visit(&db, customer.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::sea_orm_active_enums::DockStatus;
//! use test_utils::factory::dock::DockFactory;
//!
//! let dock = DockFactory::new(&db)
//!     .dock_number("B12")
//!     .status(DockStatus::Maintenance)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `customer` - Create customer entities
//! - `visit` - Create visit entities for an existing customer
//! - `dock` - Create dock entities
//! - `service_request` - Create service request entities for an existing customer
//! - `feedback` - Create feedback entities for an existing customer
//! - `asset` - Create asset entities
//! - `maintenance_record` - Create maintenance records
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod asset;
pub mod customer;
pub mod dock;
pub mod feedback;
pub mod helpers;
pub mod maintenance_record;
pub mod service_request;
pub mod visit;

pub use asset::create_asset;
pub use customer::create_customer;
pub use dock::{create_dock, create_dock_with_status};
pub use feedback::create_feedback;
pub use maintenance_record::create_maintenance_record;
pub use service_request::create_service_request;
pub use visit::{create_active_visit, create_visit};
