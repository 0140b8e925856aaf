//! User registration endpoint.

use super::{ApiState, ErrorResponse, bad_request, internal_error};
use crate::{core::users, models::User};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(super) struct CreateUserRequest {
    user_id: String,
    username: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

#[derive(Serialize)]
pub(super) struct CreateUserResponse {
    message: &'static str,
    user_id: String,
}

/// `POST /users` - registers a user. 400 when the ID already exists.
pub(super) async fn create_user(
    State(state): State<ApiState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut user = User::new(request.user_id.clone());
    user.username = request.username;
    user.first_name = request.first_name;
    user.last_name = request.last_name;

    match users::create_user(state.store.as_ref(), &user).await {
        Ok(true) => Ok(Json(CreateUserResponse {
            message: "User created",
            user_id: request.user_id,
        })),
        Ok(false) => Err(bad_request("User already exists")),
        Err(e) => Err(internal_error(e.to_string())),
    }
}
