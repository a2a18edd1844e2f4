//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using API keys from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <api_key>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract the key from the `Authorization` header
/// 2. Look up the owning account
/// 3. Insert the [`Account`](crate::domain::entities::Account) into
///    request extensions for handlers to read
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Key format is invalid
/// - No account owns the key
///
/// Adds `WWW-Authenticate: Bearer` header to 401 responses per RFC 6750.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(api_key) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let account = st
        .accounts
        .find_by_api_key(&api_key)
        .await?
        .ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Unknown API key"}),
            )
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(account);

    Ok(next.run(req).await)
}

/// Like [`layer`], but authentication is optional.
///
/// A valid Bearer key attributes the request to its account; a missing
/// header or unknown key passes through anonymously instead of failing
/// with 401. Handlers read the attribution via
/// `Option<Extension<Account>>`.
pub async fn optional_layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let account = match AuthBearer::from_request_parts(&mut parts, &()).await {
        Ok(AuthBearer(api_key)) => st.accounts.find_by_api_key(&api_key).await?,
        Err(_) => None,
    };

    let mut req = Request::from_parts(parts, body);
    if let Some(account) = account {
        req.extensions_mut().insert(account);
    }

    Ok(next.run(req).await)
}
