//! Marina Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the marina
//! back-office service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of the following components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserting builders with sensible defaults for every entity
//! - **fixture**: In-memory entity models that never touch the database
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::{Customer, Visit};
//!
//! #[tokio::test]
//! async fn test_visit_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Customer)
//!         .with_table(Visit)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
