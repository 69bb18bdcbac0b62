//! Shared application state injected into every handler.

use crate::application::services::{DomainService, PublisherService};
use crate::infrastructure::persistence::MemoryStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Services and metadata shared by all handlers.
///
/// Both services operate on the same [`MemoryStore`]; cloning the state only
/// clones the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub publisher_service: Arc<PublisherService<MemoryStore>>,
    pub domain_service: Arc<DomainService<MemoryStore>>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Wires both services to the given store.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            publisher_service: Arc::new(PublisherService::new(store.clone())),
            domain_service: Arc::new(DomainService::new(store)),
            started_at: Utc::now(),
        }
    }
}
