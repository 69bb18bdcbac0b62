//! Handlers for domain endpoints nested under a publisher.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::domain::{CreateDomainRequest, DomainItem, UpdateDomainRequest};
use crate::api::dto::message::MessageResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Adds a domain to a publisher.
///
/// # Endpoint
///
/// `POST /publishers/{name}/domains`
///
/// ```json
/// { "domain": "x.com", "desktopAds": 1, "mobileAds": 2 }
/// ```
///
/// The body is validated before the publisher is looked up.
///
/// # Errors
///
/// Returns 400 if a field is missing or invalid.
/// Returns 404 if the publisher does not exist.
/// Returns 409 if the domain name is already registered.
pub async fn create_domain_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<CreateDomainRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DomainItem>), AppError> {
    let Json(request) = payload?;
    let new_domain = request.into_new_domain()?;

    let domain = state.domain_service.create_domain(&name, new_domain).await?;

    Ok((StatusCode::CREATED, Json(DomainItem::from(domain))))
}

/// Partially updates a domain.
///
/// # Endpoint
///
/// `PUT /publishers/{name}/domains/{domain_name}`
///
/// All fields are optional; only provided fields are changed.
///
/// # Errors
///
/// Returns 400 if a field is invalid or the new name is used by another domain.
/// Returns 404 if the publisher or domain does not exist.
pub async fn update_domain_handler(
    Path((name, domain_name)): Path<(String, String)>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateDomainRequest>, JsonRejection>,
) -> Result<Json<DomainItem>, AppError> {
    let Json(request) = payload?;
    let update = request.into_update()?;

    let domain = state
        .domain_service
        .update_domain(&name, &domain_name, update)
        .await?;

    Ok(Json(DomainItem::from(domain)))
}

/// Deletes a domain from a publisher.
///
/// # Endpoint
///
/// `DELETE /publishers/{name}/domains/{domain_name}`
///
/// # Errors
///
/// Returns 404 if the publisher or domain does not exist.
pub async fn delete_domain_handler(
    Path((name, domain_name)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .domain_service
        .delete_domain(&name, &domain_name)
        .await?;

    Ok(Json(MessageResponse::new("Domain deleted successfully")))
}
