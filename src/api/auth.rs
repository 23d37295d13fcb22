//! Registration, login, and the bearer-token auth gate.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::error::ApiError;
use super::validation::{validate_email, validate_name, validate_password};
use crate::db::{AuthResponse, LoginRequest, RegisterRequest, User, UserResponse};
use crate::AppState;

/// JWT claims for bearer tokens.
/// No expiry is set; tokens remain valid for the lifetime of the secret.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject - the user id
    sub: String,
    /// Issued at time (Unix timestamp)
    iat: i64,
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Issue a signed bearer token embedding the user's id
pub fn issue_token(user_id: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id.to_string(),
        iat: chrono::Utc::now().timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a bearer token and return the embedded user id
pub fn verify_token(token: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Tokens are issued without an expiry
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims.sub)
}

/// Extract the bearer token from the Authorization header
fn extract_bearer(headers: &axum::http::HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Auth gate for protected routes.
///
/// Resolves the bearer token to a User and stashes it in request extensions.
/// Every failure path collapses to the same 401 response; callers are never
/// told whether the token was missing, invalid, or orphaned.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let denied = || ApiError::unauthorized("Please authenticate.");

    let token = extract_bearer(request.headers()).ok_or_else(denied)?;

    let user_id = verify_token(token, &state.config.auth.jwt_secret).map_err(|_| denied())?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(&user_id)
        .fetch_optional(&state.db)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to resolve token subject");
            denied()
        })?;

    let user = user.ok_or_else(denied)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Registration endpoint
pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let failed = || ApiError::bad_request("Registration failed");

    // Malformed or mistyped bodies collapse to the same generic failure
    let Json(request) = payload.map_err(|_| failed())?;

    validate_name(&request.name).map_err(|_| failed())?;
    validate_email(&request.email).map_err(|_| failed())?;
    validate_password(&request.password).map_err(|_| failed())?;

    let password_hash = hash_password(&request.password).map_err(|e| {
        tracing::error!(error = %e, "Failed to hash password");
        failed()
    })?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        email: request.email,
        password_hash,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    // UNIQUE(email) violations land here along with any other store error
    sqlx::query(
        "INSERT INTO users (id, name, email, password_hash, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.created_at)
    .execute(&state.db)
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to create user");
        failed()
    })?;

    let token = issue_token(&user.id, &state.config.auth.jwt_secret).map_err(|e| {
        tracing::error!(error = %e, "Failed to issue token");
        failed()
    })?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: UserResponse::from(user),
            token,
        }),
    ))
}

/// Login endpoint
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::bad_request("Login failed"))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(&request.email)
        .fetch_optional(&state.db)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to look up user");
            ApiError::internal("Internal server error")
        })?;

    // Unknown email and wrong password share one message
    let user = user.ok_or_else(|| ApiError::bad_request("Login failed"))?;

    if !verify_password(&request.password, &user.password_hash) {
        return Err(ApiError::bad_request("Login failed"));
    }

    let token = issue_token(&user.id, &state.config.auth.jwt_secret).map_err(|e| {
        tracing::error!(error = %e, "Failed to issue token");
        ApiError::internal("Internal server error")
    })?;

    Ok(Json(AuthResponse {
        user: UserResponse::from(user),
        token,
    }))
}
