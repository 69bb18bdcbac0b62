//! Handlers for publisher endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::message::MessageResponse;
use crate::api::dto::publisher::{PublisherItem, PublisherRequest};
use crate::error::AppError;
use crate::state::AppState;

fn name_from(payload: Result<Json<PublisherRequest>, JsonRejection>) -> Result<String, AppError> {
    let Json(request) = payload?;
    request.into_name().ok_or_else(|| {
        AppError::bad_request("Publisher name is required", json!({"field": "publisher"}))
    })
}

/// Lists all publishers with their domains.
///
/// # Endpoint
///
/// `GET /publishers`
pub async fn publisher_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublisherItem>>, AppError> {
    let publishers = state.publisher_service.list_publishers().await?;
    tracing::debug!(count = publishers.len(), "Fetched all publishers");

    Ok(Json(
        publishers.into_iter().map(PublisherItem::from).collect(),
    ))
}

/// Returns a single publisher with its domains.
///
/// # Endpoint
///
/// `GET /publishers/{name}`
///
/// # Errors
///
/// Returns 404 if the publisher does not exist.
pub async fn get_publisher_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PublisherItem>, AppError> {
    let publisher = state.publisher_service.get_publisher(&name).await?;

    Ok(Json(PublisherItem::from(publisher)))
}

/// Creates a new publisher with no domains.
///
/// # Endpoint
///
/// `POST /publishers`
///
/// ```json
/// { "publisher": "p3" }
/// ```
///
/// # Errors
///
/// Returns 400 if the name is missing or already taken.
pub async fn create_publisher_handler(
    State(state): State<AppState>,
    payload: Result<Json<PublisherRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PublisherItem>), AppError> {
    let name = name_from(payload)?;

    let publisher = state.publisher_service.create_publisher(name).await?;

    Ok((StatusCode::CREATED, Json(PublisherItem::from(publisher))))
}

/// Renames a publisher.
///
/// # Endpoint
///
/// `PUT /publishers/{name}`
///
/// The body carries the new name: `{ "publisher": "new name" }`.
///
/// # Errors
///
/// Returns 400 if the new name is missing or used by another publisher.
/// Returns 404 if the publisher does not exist.
pub async fn rename_publisher_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<PublisherRequest>, JsonRejection>,
) -> Result<Json<PublisherItem>, AppError> {
    let new_name = name_from(payload)?;

    let publisher = state
        .publisher_service
        .rename_publisher(&name, new_name)
        .await?;

    Ok(Json(PublisherItem::from(publisher)))
}

/// Deletes a publisher and all of its domains.
///
/// # Endpoint
///
/// `DELETE /publishers/{name}`
///
/// # Errors
///
/// Returns 404 if the publisher does not exist.
pub async fn delete_publisher_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.publisher_service.delete_publisher(&name).await?;

    Ok(Json(MessageResponse::new(
        "Publisher and related domains deleted successfully",
    )))
}
