//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business rules that need the whole data set (uniqueness) are part of
//! the repository contracts; input checks live in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
