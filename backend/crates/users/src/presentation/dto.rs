//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Create user request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Create user response
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserResponse {
    pub name: String,
    pub email: String,
}

/// Update user request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}

/// Change password request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub password_old: String,
    pub password_new: String,
    pub password_confirm: String,
}

/// Id of the user a mutation touched
#[derive(Debug, Clone, Serialize)]
pub struct UserIdResponse {
    pub id: String,
}
