//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Domain payloads use camelCase keys.

pub mod domain;
pub mod health;
pub mod message;
pub mod publisher;
