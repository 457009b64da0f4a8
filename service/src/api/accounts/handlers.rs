//! Handler functions for the account collection endpoints.
//!
//! These functions check the request, dispatch to the storage port, and map
//! each outcome onto the HTTP contract of the collection.

use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Json},
};
use tracing::info;

use crate::api::common::{json_body, require_json_content_type, validate_payload};
use crate::errors::{ServiceError, ServiceResult};
use crate::models::{Account, AccountData};
use crate::state::AppState;

#[axum::debug_handler]
pub async fn create_account(
    State(state): State<AppState>,
    body: Result<Json<AccountData>, JsonRejection>,
) -> ServiceResult<impl IntoResponse> {
    info!("Request to create an Account");

    let payload = json_body(body)?;
    validate_payload(&payload)?;

    let account = state.store.create(&payload.into_account(None)).await?;

    // The store guarantees an id on anything it returns from create.
    let location = format!("/accounts/{}", account.id.unwrap_or_default());
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(account)))
}

#[axum::debug_handler]
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ServiceResult<Json<Account>> {
    info!("Request to read an Account with id: {id}");

    let account = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Account", id))?;

    Ok(Json(account))
}

/// Replaces an existing account with the fields of the payload.
///
/// The content type gate runs before the existence check, which runs before
/// the schema check, so an unknown id answers 404 for any JSON body.
#[axum::debug_handler]
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<AccountData>, JsonRejection>,
) -> ServiceResult<Json<Account>> {
    info!("Request to update an Account with id: {id}");

    require_json_content_type(&body)?;

    if state.store.find(id).await?.is_none() {
        return Err(ServiceError::not_found("Account", id));
    }

    let payload = json_body(body)?;
    validate_payload(&payload)?;

    let updated = state
        .store
        .update(&payload.into_account(Some(id)))
        .await?
        .ok_or_else(|| ServiceError::not_found("Account", id))?;

    Ok(Json(updated))
}

/// Deletes an account. Deleting an id that does not exist is still a 204;
/// the endpoint only promises the record is gone.
#[axum::debug_handler]
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ServiceResult<StatusCode> {
    info!("Request to delete an Account with id: {id}");

    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn list_accounts(State(state): State<AppState>) -> ServiceResult<Json<Vec<Account>>> {
    info!("Request to list Accounts");

    let accounts = state.store.all().await?;
    Ok(Json(accounts))
}
