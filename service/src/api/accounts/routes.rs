//! Defines the HTTP routes for the account collection.

use super::handlers::{
    create_account, delete_account, get_account, list_accounts, update_account,
};
use axum::{Router, routing::get};

use crate::state::AppState;

pub fn account_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_accounts).post(create_account))
        .route(
            "/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
}
