//! Request middleware.
//!
//! - `auth` - Static bearer-token guard applied to every API route

pub mod auth;
