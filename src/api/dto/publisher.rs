//! DTOs for publisher endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::domain::DomainItem;
use crate::domain::entities::Publisher;

/// Request body for `POST /publishers` and `PUT /publishers/{name}`.
#[derive(Debug, Deserialize, Validate)]
pub struct PublisherRequest {
    /// Publisher name (new name when renaming).
    #[validate(required, length(min = 1))]
    pub publisher: Option<String>,
}

impl PublisherRequest {
    /// Returns the validated publisher name.
    pub fn into_name(self) -> Option<String> {
        self.validate().ok()?;
        self.publisher
    }
}

/// A publisher with all its domains.
#[derive(Debug, Serialize)]
pub struct PublisherItem {
    pub publisher: String,
    pub domains: Vec<DomainItem>,
}

impl From<Publisher> for PublisherItem {
    fn from(p: Publisher) -> Self {
        Self {
            publisher: p.name,
            domains: p.domains.into_iter().map(DomainItem::from).collect(),
        }
    }
}
