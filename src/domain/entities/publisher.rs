//! Publisher entity: a named owner of an ordered list of domains.

use super::domain::{Domain, NewDomain};

/// A publisher and the domains it exclusively owns.
///
/// Deleting a publisher drops its domains with it. The publisher also tracks
/// the highest domain id it has ever issued so ids are never handed out twice,
/// even after the domain holding the highest id is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publisher {
    pub name: String,
    pub domains: Vec<Domain>,
    last_domain_id: i64,
}

impl Publisher {
    /// Creates a publisher with no domains.
    pub fn new(name: String) -> Self {
        Self {
            name,
            domains: Vec::new(),
            last_domain_id: 0,
        }
    }

    /// Returns the next domain id and records it as issued.
    ///
    /// The result is `max(existing ids) + 1` (or 1 for an empty publisher),
    /// bumped past any id issued earlier.
    pub fn allocate_domain_id(&mut self) -> i64 {
        let max_existing = self.domains.iter().map(|d| d.id).max().unwrap_or(0);
        let id = max_existing.max(self.last_domain_id) + 1;
        self.last_domain_id = id;
        id
    }

    /// Appends a domain with a freshly allocated id and returns a copy of it.
    pub fn push_domain(&mut self, new_domain: NewDomain) -> Domain {
        let id = self.allocate_domain_id();
        let domain = Domain::new(
            id,
            new_domain.domain,
            new_domain.desktop_ads,
            new_domain.mobile_ads,
        );
        self.domains.push(domain.clone());
        domain
    }

    pub fn has_domain(&self, name: &str) -> bool {
        self.domains.iter().any(|d| d.domain == name)
    }

    pub fn domain_position(&self, name: &str) -> Option<usize> {
        self.domains.iter().position(|d| d.domain == name)
    }
}
