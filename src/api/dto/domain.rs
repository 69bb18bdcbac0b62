//! DTOs for domain management under a publisher.

use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{Domain, NewDomain, UpdateDomain};
use crate::error::AppError;

/// Request body for `POST /publishers/{name}/domains`.
///
/// All three fields are required; counts must be non-negative.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomainRequest {
    #[validate(length(min = 1))]
    pub domain: Option<String>,

    #[validate(range(min = 0))]
    pub desktop_ads: Option<i64>,

    #[validate(range(min = 0))]
    pub mobile_ads: Option<i64>,
}

impl CreateDomainRequest {
    /// Validates the request and converts it into a [`NewDomain`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any field is missing or invalid.
    pub fn into_new_domain(self) -> Result<NewDomain, AppError> {
        self.validate()
            .map_err(|e| AppError::invalid("Invalid domain data", e))?;

        match (self.domain, self.desktop_ads, self.mobile_ads) {
            (Some(domain), Some(desktop_ads), Some(mobile_ads)) => Ok(NewDomain {
                domain,
                desktop_ads,
                mobile_ads,
            }),
            (domain, desktop_ads, mobile_ads) => {
                let missing: Vec<&str> = [
                    ("domain", domain.is_none()),
                    ("desktopAds", desktop_ads.is_none()),
                    ("mobileAds", mobile_ads.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
                Err(AppError::bad_request(
                    "Invalid domain data",
                    json!({ "missing": missing }),
                ))
            }
        }
    }
}

/// Request body for `PUT /publishers/{name}/domains/{domain_name}`.
///
/// Every field is optional; only provided fields are changed. Unknown fields,
/// including `id`, are ignored.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDomainRequest {
    #[validate(length(min = 1))]
    pub domain: Option<String>,

    #[validate(range(min = 0))]
    pub desktop_ads: Option<i64>,

    #[validate(range(min = 0))]
    pub mobile_ads: Option<i64>,
}

impl UpdateDomainRequest {
    /// Validates the request and converts it into an [`UpdateDomain`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a provided field is invalid.
    pub fn into_update(self) -> Result<UpdateDomain, AppError> {
        self.validate()
            .map_err(|e| AppError::invalid("Invalid domain data", e))?;

        Ok(UpdateDomain {
            domain: self.domain,
            desktop_ads: self.desktop_ads,
            mobile_ads: self.mobile_ads,
        })
    }
}

/// Individual domain information.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainItem {
    pub domain: String,
    pub desktop_ads: i64,
    pub mobile_ads: i64,
    pub id: i64,
}

impl From<Domain> for DomainItem {
    fn from(d: Domain) -> Self {
        Self {
            domain: d.domain,
            desktop_ads: d.desktop_ads,
            mobile_ads: d.mobile_ads,
            id: d.id,
        }
    }
}
