//! Publisher management service.

use crate::domain::entities::Publisher;
use crate::domain::repositories::PublisherRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for creating, renaming, listing and deleting publishers.
pub struct PublisherService<R: PublisherRepository> {
    repository: Arc<R>,
}

impl<R: PublisherRepository> PublisherService<R> {
    /// Creates a new publisher service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every publisher with its domains.
    pub async fn list_publishers(&self) -> Result<Vec<Publisher>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a publisher by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the publisher does not exist.
    pub async fn get_publisher(&self, name: &str) -> Result<Publisher, AppError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("Publisher not found", json!({"publisher": name})))
    }

    /// Creates a publisher with no domains.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is empty.
    /// Returns [`AppError::Duplicate`] if the name is already taken.
    pub async fn create_publisher(&self, name: String) -> Result<Publisher, AppError> {
        validate_publisher_name(&name)?;

        let publisher = self.repository.create(name).await?;
        tracing::info!(publisher = %publisher.name, "Publisher created");
        Ok(publisher)
    }

    /// Renames a publisher, keeping its domains.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the new name is empty.
    /// Returns [`AppError::NotFound`] if `old_name` does not exist.
    /// Returns [`AppError::Duplicate`] if another publisher uses `new_name`.
    pub async fn rename_publisher(
        &self,
        old_name: &str,
        new_name: String,
    ) -> Result<Publisher, AppError> {
        validate_publisher_name(&new_name)?;

        let publisher = self.repository.rename(old_name, new_name).await?;
        tracing::info!(from = %old_name, to = %publisher.name, "Publisher renamed");
        Ok(publisher)
    }

    /// Deletes a publisher and every domain it owns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the publisher does not exist.
    pub async fn delete_publisher(&self, name: &str) -> Result<(), AppError> {
        let removed = self.repository.delete(name).await?;
        tracing::info!(
            publisher = %removed.name,
            domains = removed.domains.len(),
            "Publisher deleted"
        );
        Ok(())
    }
}

fn validate_publisher_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::bad_request(
            "Publisher name is required",
            json!({"field": "publisher"}),
        ));
    }
    Ok(())
}
