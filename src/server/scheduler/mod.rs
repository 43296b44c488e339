//! Cron jobs started alongside the HTTP server.
//!
//! - `maintenance_overdue` - Daily warning when scheduled maintenance has slipped

pub mod maintenance_overdue;
