//! SeaORM entities for the marina back-office database.

pub mod prelude;

pub mod asset;
pub mod customer;
pub mod dock;
pub mod feedback;
pub mod maintenance_record;
pub mod sea_orm_active_enums;
pub mod service_request;
pub mod visit;
