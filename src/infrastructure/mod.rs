//! Infrastructure layer implementing the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementation

pub mod persistence;
