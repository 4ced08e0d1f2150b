use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::errors::errors::ServiceError;
use crate::state::AppState;
use crate::store::{NewUser, UpdateReport, User, UserPatch};

// ===== REQUEST DTOs =====

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub age: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
}

// ===== RESPONSE DTOs =====

/// Envelope wrapping every successful response
///
/// The `status` field always matches the transport status code.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { status: 200, data }
    }

    pub fn created(data: T) -> Self {
        Self { status: 201, data }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            age: user.age,
            gender: user.gender,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub deleted_count: u64,
}

// ===== HANDLERS =====

/// GET /user/:id
/// Fetch a single user by id
#[instrument(skip(state), fields(service = "/user/:id"))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    info!(user_id = %id, "Fetching user");

    let user = state.users.find_by_id(&id).await?;

    info!(user_id = %id, "User fetched successfully");
    Ok(ApiResponse::ok(UserResponse::from(user)))
}

/// GET /user
/// Fetch every user in the collection
#[instrument(skip(state), fields(service = "/user"))]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    info!("Fetching all users");

    let users = state.users.find_all().await?;

    info!(count = users.len(), "Users fetched successfully");
    let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(ApiResponse::ok(data))
}

/// POST /user
/// Create a new user
#[instrument(skip(state, payload), fields(service = "/user"))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    payload.validate()?;

    info!(name = %payload.name, "Creating new user");

    let new_user = NewUser {
        name: payload.name,
        age: payload.age,
        gender: payload.gender,
    };
    let id = state.users.insert(&new_user).await?;

    info!(user_id = %id.to_hex(), "User created successfully");
    Ok(ApiResponse::created(CreateUserResponse { id: id.to_hex() }))
}

/// PATCH /user/:id
/// Update name/age/gender of an existing user
///
/// A valid id matching no document reports success with zero counts.
#[instrument(skip(state, payload), fields(service = "/user/:id"))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    info!(user_id = %id, "Updating user");

    let patch = UserPatch {
        name: payload.name,
        age: payload.age,
        gender: payload.gender,
    };
    let report: UpdateReport = state.users.update_by_id(&id, &patch).await?;

    info!(
        user_id = %id,
        matched = report.matched_count,
        modified = report.modified_count,
        "User update completed"
    );
    Ok(ApiResponse::ok(report))
}

/// DELETE /user/:id
/// Delete a user by id
#[instrument(skip(state), fields(service = "/user/:id"))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    info!(user_id = %id, "Deleting user");

    let deleted_count = state.users.delete_by_id(&id).await?;

    info!(user_id = %id, "User deleted successfully");
    Ok(ApiResponse::ok(DeleteUserResponse { deleted_count }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_from_user() {
        let oid = ObjectId::new();
        let user = User {
            id: oid,
            name: "Ann".to_string(),
            age: Some("30".to_string()),
            gender: Some("F".to_string()),
        };

        let response = UserResponse::from(user);
        assert_eq!(response.id, oid.to_hex());
        assert_eq!(response.name, "Ann");
        assert_eq!(response.age.as_deref(), Some("30"));
        assert_eq!(response.gender.as_deref(), Some("F"));
    }

    #[test]
    fn test_envelope_status_matches_constructor() {
        let ok = ApiResponse::ok(serde_json::json!({}));
        assert_eq!(ok.status, 200);

        let created = ApiResponse::created(serde_json::json!({}));
        assert_eq!(created.status, 201);
    }

    #[test]
    fn test_create_request_validation() {
        let valid = CreateUserRequest {
            name: "Ann".to_string(),
            age: None,
            gender: None,
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateUserRequest {
            name: "".to_string(),
            age: None,
            gender: None,
        };
        assert!(invalid.validate().is_err());
    }
}
