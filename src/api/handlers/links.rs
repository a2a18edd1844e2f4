//! Handlers for link management endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{
    CreateLinkRequest, LinkListResponse, LinkResponse, ListLinksQuery, UpdateLinkRequest,
};
use crate::domain::entities::Account;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com/some/long/path",
///   "custom_alias": "my-link",                  // optional
///   "expires_at": "2027-01-01T00:00:00Z"        // optional
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: invalid URL or malformed alias
/// - 409 Conflict: the alias is already taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(
            account.id,
            payload.original_url,
            payload.custom_alias,
            payload.expires_at,
        )
        .await?;

    let short_url = state.link_service.short_url(&link.slug);
    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, short_url)),
    ))
}

/// Lists the authenticated account's links, newest first.
///
/// # Endpoint
///
/// `GET /api/links?search=<substring>`
pub async fn list_links_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
    Query(query): Query<ListLinksQuery>,
) -> Result<Json<LinkListResponse>, AppError> {
    let (links, total_clicks) = state
        .link_service
        .list_links(account.id, query.search.as_deref())
        .await?;

    let links: Vec<LinkResponse> = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link.slug);
            LinkResponse::from_link(link, short_url)
        })
        .collect();

    Ok(Json(LinkListResponse {
        total: links.len(),
        total_clicks,
        links,
    }))
}

/// Fetches one owned link.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
pub async fn get_link_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
    Path(id): Path<i64>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(id, account.id).await?;
    let short_url = state.link_service.short_url(&link.slug);
    Ok(Json(LinkResponse::from_link(link, short_url)))
}

/// Updates an owned link's alias and/or expiry.
///
/// # Endpoint
///
/// `PUT /api/links/{id}`
///
/// # `expires_at` semantics
///
/// Absent means no change, `null` clears the expiry, a timestamp sets it.
///
/// # Errors
///
/// - 404 Not Found: no such link for this account
/// - 409 Conflict: the new alias is already taken
pub async fn update_link_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .update_link(id, account.id, payload.custom_alias, payload.expires_at)
        .await?;

    let short_url = state.link_service.short_url(&link.slug);
    Ok(Json(LinkResponse::from_link(link, short_url)))
}

/// Deletes an owned link and its click log.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// Returns 204 No Content on success, 404 if the link does not exist.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(id, account.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
