//! Request handlers for the `/api` routes.
//!
//! Each handler runs one store operation and maps an absent row to
//! [`ApiError::NotFound`].

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::{Contact, ContactPayload};
use crate::server::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.store.list().await?;
    tracing::debug!(count = contacts.len(), "listed contacts");
    Ok(Json(contacts))
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Contact>, ApiError> {
    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let contact = state.store.create(&payload).await?;
    tracing::debug!(id = contact.id, "created contact");
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<Contact>, ApiError> {
    let contact = state
        .store
        .update(id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::debug!(id, "updated contact");
    Ok(Json(contact))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if !state.store.delete(id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::debug!(id, "deleted contact");
    Ok(StatusCode::NO_CONTENT)
}
