//! Small parsing and validation helpers shared by controllers and params.

pub mod parse;
pub mod validate;
