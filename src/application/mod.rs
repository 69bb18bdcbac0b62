//! Application layer services implementing business logic.
//!
//! Services validate input, delegate to repository traits and log every
//! mutation. HTTP handlers talk to services only.
//!
//! # Available Services
//!
//! - [`services::publisher_service::PublisherService`] - Publisher lifecycle
//! - [`services::domain_service::DomainService`] - Domains under a publisher

pub mod services;
