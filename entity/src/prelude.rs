pub use super::asset::Entity as Asset;
pub use super::customer::Entity as Customer;
pub use super::dock::Entity as Dock;
pub use super::feedback::Entity as Feedback;
pub use super::maintenance_record::Entity as MaintenanceRecord;
pub use super::service_request::Entity as ServiceRequest;
pub use super::visit::Entity as Visit;
