//! Repository trait definitions for the domain layer.
//!
//! Traits define the data-access contract; the implementation lives in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`PublisherRepository`] - Publisher CRUD
//! - [`DomainRepository`] - Domain CRUD under an owning publisher

pub mod domain_repository;
pub mod publisher_repository;

pub use domain_repository::DomainRepository;
pub use publisher_repository::PublisherRepository;

#[cfg(test)]
pub use domain_repository::MockDomainRepository;
#[cfg(test)]
pub use publisher_repository::MockPublisherRepository;
