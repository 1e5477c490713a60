//! Authentication and API key validation endpoints.
//!
//! Both operations are point lookups against the access database; the
//! only logic here is bcrypt verification and response shaping.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::app::SharedState;

use super::err_json;

// TODO: issue real signed JWTs once a token secret is provisioned.
const ACCESS_TOKEN: &str = "pseudo_jwt_token";
const TOKEN_TTL_SECS: u32 = 3600;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u32,
    pub error: Option<String>,
}

impl LoginResponse {
    fn success() -> Self {
        Self {
            access_token: ACCESS_TOKEN.into(),
            token_type: "Bearer".into(),
            expires_in: TOKEN_TTL_SECS,
            error: None,
        }
    }

    fn failure() -> Self {
        Self {
            access_token: String::new(),
            token_type: "Bearer".into(),
            expires_in: 0,
            error: Some("Authentication failed. Username or password is incorrect.".into()),
        }
    }
}

/// POST /auth/login
///
/// Bad credentials are reported in the response body with a 200 status,
/// not via an HTTP error, to keep the existing client contract. Only
/// lookup or hashing failures surface as 500s.
pub async fn login(
    State(state): State<SharedState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<Value>)> {
    let user = state
        .db()
        .get_user_by_email(&body.username)
        .map_err(|e| err_json(500, &format!("credential lookup failed: {e}")))?;

    let verified = match &user {
        Some(user) => bcrypt::verify(&body.password, &user.password_hash)
            .map_err(|e| err_json(500, &format!("password verification failed: {e}")))?,
        None => false,
    };

    if verified {
        Ok(Json(LoginResponse::success()))
    } else {
        tracing::warn!(username = %body.username, "login rejected");
        Ok(Json(LoginResponse::failure()))
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiKeyQuery {
    pub api_key: String,
}

#[derive(Debug, Serialize)]
pub struct ApiKeyAccessResponse {
    pub message: String,
    pub access_level: String,
}

/// GET /auth/api_key
///
/// An unknown key is a 404, distinguishable from genuine server faults.
pub async fn api_key_access(
    State(state): State<SharedState>,
    Query(query): Query<ApiKeyQuery>,
) -> Result<Json<ApiKeyAccessResponse>, (StatusCode, Json<Value>)> {
    let access_level = state
        .db()
        .get_api_key_access_level(&query.api_key)
        .map_err(|e| err_json(500, &format!("API key lookup failed: {e}")))?
        .ok_or_else(|| err_json(404, "API Key is not valid or does not exist."))?;

    Ok(Json(ApiKeyAccessResponse {
        message: "API Key validated successfully".into(),
        access_level,
    }))
}
