//! Domain entity: a site owned by a publisher, with its ad counts.

/// A site entry belonging to exactly one publisher.
///
/// `domain` is unique across the whole registry. `id` is unique only within
/// the owning publisher and is assigned by [`super::Publisher::allocate_domain_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub id: i64,
    pub domain: String,
    pub desktop_ads: i64,
    pub mobile_ads: i64,
}

impl Domain {
    pub fn new(id: i64, domain: String, desktop_ads: i64, mobile_ads: i64) -> Self {
        Self {
            id,
            domain,
            desktop_ads,
            mobile_ads,
        }
    }

    /// Merges the provided fields of `update` into this domain.
    ///
    /// The id is never changed.
    pub fn apply(&mut self, update: UpdateDomain) {
        if let Some(domain) = update.domain {
            self.domain = domain;
        }
        if let Some(desktop_ads) = update.desktop_ads {
            self.desktop_ads = desktop_ads;
        }
        if let Some(mobile_ads) = update.mobile_ads {
            self.mobile_ads = mobile_ads;
        }
    }
}

/// Input data for creating a new domain. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDomain {
    pub domain: String,
    pub desktop_ads: i64,
    pub mobile_ads: i64,
}

/// Partial update of an existing domain. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDomain {
    pub domain: Option<String>,
    pub desktop_ads: Option<i64>,
    pub mobile_ads: Option<i64>,
}
