//! Marina back-office API backend.
//!
//! Axum serves the HTTP API, SeaORM talks to SQLite and tokio-cron-scheduler runs the
//! daily maintenance check.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and the analytics engine
//! - **Data Layer** (`data/`) - Queries and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models, params, filters and statistics
//! - **Error Layer** (`error/`) - Application errors and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Database pool and API token shared with handlers
//! - **Startup** (`startup`) - Database connection, migrations and shutdown signal
//! - **Router** (`router`) - Route table, OpenAPI document, CORS and tracing layers
//! - **Scheduler** (`scheduler/`) - Cron jobs
//!
//! # Request Flow
//!
//! 1. **Router** matches the route; **Middleware** checks the bearer token
//! 2. **Controller** converts the DTO to params and calls the service
//! 3. **Service** applies business rules and calls repositories
//! 4. **Data** queries the database and returns domain models
//! 5. **Controller** converts the result to a DTO and picks the status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
