//! Repository implementations.
//!
//! # Repositories
//!
//! - [`MemoryStore`] - process-memory store implementing both
//!   [`crate::domain::repositories::PublisherRepository`] and
//!   [`crate::domain::repositories::DomainRepository`]

pub mod memory_store;

pub use memory_store::MemoryStore;
