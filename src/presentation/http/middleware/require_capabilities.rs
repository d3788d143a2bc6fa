// src/presentation/http/middleware/require_capabilities.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Middleware function that enforces a single capability (resource, action).
/// The authenticated user is stored on the request for the handler.
///
/// Usage: `axum::middleware::from_fn(|req, next| require_capability(req, next, "articles", "approve"))`
pub async fn require_capability(
    mut req: Request<Body>,
    next: Next,
    resource: &'static str,
    action: &'static str,
) -> Response {
    let Some(header) = req.headers().typed_get::<Authorization<Bearer>>() else {
        return HttpError::from_error(ApplicationError::unauthorized(
            "missing Authorization header",
        ))
        .into_response();
    };

    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    match state
        .services
        .authenticate_and_authorize(header.token(), resource, action)
        .await
    {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(resource, action, error = %err, "capability check rejected request");
            HttpError::from_error(err).into_response()
        }
    }
}
