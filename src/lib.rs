//! # Publisher Registry
//!
//! An in-memory REST service managing publishers and the ad-serving domains
//! they own, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Input validation and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Data Model
//!
//! - A publisher has a unique name and an ordered list of domains
//! - A domain name is unique across all publishers
//! - Domain ids are unique within a publisher, increasing and never reused
//! - Deleting a publisher deletes its domains
//!
//! State lives in process memory and is lost on restart.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start with two sample publishers on port 5000
//! SEED_SAMPLE_DATA=true cargo run
//!
//! curl -X POST localhost:5000/publishers -H 'content-type: application/json' \
//!      -d '{"publisher":"p3"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DomainService, PublisherService};
    pub use crate::domain::entities::{Domain, NewDomain, Publisher, UpdateDomain};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryStore;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
