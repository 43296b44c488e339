//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests of domain conversions and
//! merge logic. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let customer = fixture::customer::entity();
//! assert_eq!(customer.email, fixture::customer::DEFAULT_EMAIL);
//! ```

pub mod customer;
pub mod dock;
