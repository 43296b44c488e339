//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// Keeps unique columns such as customer email and dock number from colliding when a
/// test creates several rows with default values.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a customer together with one completed visit.
///
/// # Arguments
/// - `db` - Database connection
/// - `charges` - Service charges recorded on the visit
///
/// # Returns
/// - `Ok((customer, visit))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_customer_with_visit(
    db: &DatabaseConnection,
    charges: f64,
) -> Result<(entity::customer::Model, entity::visit::Model), DbErr> {
    let customer = crate::factory::customer::create_customer(db).await?;
    let visit = crate::factory::visit::VisitFactory::new(db, customer.id)
        .service_charges(charges)
        .checked_out()
        .build()
        .await?;

    Ok((customer, visit))
}
