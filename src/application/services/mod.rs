//! Business logic services for the application layer.

pub mod domain_service;
pub mod publisher_service;

pub use domain_service::DomainService;
pub use publisher_service::PublisherService;
