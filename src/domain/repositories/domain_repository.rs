//! Repository trait for domains nested under a publisher.

use crate::domain::entities::{Domain, NewDomain, UpdateDomain};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the domains owned by publishers.
///
/// Domain names are unique across all publishers. Every method addresses the
/// owning publisher by name and fails with [`AppError::NotFound`] when it is
/// missing.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Appends a domain to a publisher and assigns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the publisher does not exist.
    /// Returns [`AppError::Conflict`] if the domain name exists under any publisher.
    async fn create_domain(
        &self,
        publisher: &str,
        new_domain: NewDomain,
    ) -> Result<Domain, AppError>;

    /// Merges `update` into the domain currently named `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the publisher or the domain does not exist.
    /// Returns [`AppError::Duplicate`] if the new name is used by another domain.
    async fn update_domain(
        &self,
        publisher: &str,
        domain: &str,
        update: UpdateDomain,
    ) -> Result<Domain, AppError>;

    /// Removes a domain from its publisher and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the publisher or the domain does not exist.
    async fn delete_domain(&self, publisher: &str, domain: &str) -> Result<Domain, AppError>;
}
