//! Core domain entities of the publisher registry.
//!
//! Entities are plain data structures with a few invariant-keeping helpers.
//!
//! # Entity Types
//!
//! - [`Publisher`] - A named owner of domains
//! - [`Domain`] - A site with desktop/mobile ad counts
//!
//! Creation and partial updates use separate structs: [`NewDomain`] and
//! [`UpdateDomain`].

pub mod domain;
pub mod publisher;

pub use domain::{Domain, NewDomain, UpdateDomain};
pub use publisher::Publisher;
