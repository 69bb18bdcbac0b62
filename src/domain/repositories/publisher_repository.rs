//! Repository trait for publishers.

use crate::domain::entities::Publisher;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for publisher records.
///
/// Each method is atomic: uniqueness checks and the mutation they guard happen
/// under one acquisition of the store, so concurrent requests never observe or
/// produce a half-applied change.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PublisherRepository: Send + Sync {
    /// Returns every publisher with its domains, in insertion order.
    async fn list(&self) -> Result<Vec<Publisher>, AppError>;

    /// Finds a publisher by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Publisher>, AppError>;

    /// Appends a new publisher with no domains.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Duplicate`] if the name is already taken.
    async fn create(&self, name: String) -> Result<Publisher, AppError>;

    /// Renames a publisher in place, keeping its domains.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `old_name` does not exist.
    /// Returns [`AppError::Duplicate`] if another publisher already uses `new_name`.
    async fn rename(&self, old_name: &str, new_name: String) -> Result<Publisher, AppError>;

    /// Removes a publisher together with all its domains and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the publisher does not exist.
    async fn delete(&self, name: &str) -> Result<Publisher, AppError>;
}
