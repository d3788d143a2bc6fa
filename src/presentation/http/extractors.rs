// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

/// Resolve the bearer token, reusing the user a capability middleware may
/// already have stored on the request.
async fn resolve(parts: &mut Parts) -> Result<Option<AuthenticatedUser>, HttpError> {
    if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
        return Ok(Some(user.clone()));
    }

    let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() else {
        return Ok(None);
    };

    let app_state = parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::Infrastructure(
            "application state missing".into(),
        ))
    })?;

    let user = app_state
        .services
        .authenticate(header.token())
        .await
        .map_err(HttpError::from_error)?;
    Ok(Some(user))
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve(parts).await?.map(Self).ok_or_else(|| {
            HttpError::from_error(ApplicationError::Unauthorized(
                "missing Authorization header".into(),
            ))
        })
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve(parts).await.map(Self)
    }
}
