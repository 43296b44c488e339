mod analytics;
mod asset;
mod customer;
mod dock;
mod feedback;
mod maintenance;
mod service_request;
mod visit;
