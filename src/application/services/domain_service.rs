//! Domain management service.

use crate::domain::entities::{Domain, NewDomain, UpdateDomain};
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for managing the domains owned by publishers.
///
/// Field rules (non-empty name, non-negative counts) are checked when request
/// bodies are parsed; the repository enforces existence and system-wide name
/// uniqueness.
pub struct DomainService<R: DomainRepository> {
    repository: Arc<R>,
}

impl<R: DomainRepository> DomainService<R> {
    /// Creates a new domain service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Adds a domain to a publisher.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the publisher does not exist.
    /// Returns [`AppError::Conflict`] if the domain name is already registered.
    pub async fn create_domain(
        &self,
        publisher: &str,
        new_domain: NewDomain,
    ) -> Result<Domain, AppError> {
        let domain = self.repository.create_domain(publisher, new_domain).await?;
        tracing::info!(
            publisher = %publisher,
            domain = %domain.domain,
            id = domain.id,
            "Domain created"
        );
        Ok(domain)
    }

    /// Merges a partial update into an existing domain.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the publisher or domain does not exist.
    /// Returns [`AppError::Duplicate`] if the new name is used by another domain.
    pub async fn update_domain(
        &self,
        publisher: &str,
        domain: &str,
        update: UpdateDomain,
    ) -> Result<Domain, AppError> {
        let updated = self
            .repository
            .update_domain(publisher, domain, update)
            .await?;
        tracing::info!(
            publisher = %publisher,
            domain = %updated.domain,
            id = updated.id,
            "Domain updated"
        );
        Ok(updated)
    }

    /// Removes a domain from its publisher.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the publisher or domain does not exist.
    pub async fn delete_domain(&self, publisher: &str, domain: &str) -> Result<(), AppError> {
        let removed = self.repository.delete_domain(publisher, domain).await?;
        tracing::info!(
            publisher = %publisher,
            domain = %removed.domain,
            id = removed.id,
            "Domain deleted"
        );
        Ok(())
    }
}
