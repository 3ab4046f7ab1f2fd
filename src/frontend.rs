use std::{
    path::{Component, Path},
    sync::Arc,
};

use axum::{
    body::Body,
    extract::{Request, State as AxumState},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::state::State;

/// Fallback for everything the API router doesn't claim.
pub async fn serve_frontend(AxumState(state): AxumState<Arc<State>>, request: Request) -> Response {
    serve_from(&state.config.frontend_dir, request).await
}

pub async fn serve_from(dir: &Path, mut request: Request) -> Response {
    let path = request.uri().path().to_string();

    if path.starts_with("/api/") {
        return (StatusCode::NOT_FOUND, "404 page not found").into_response();
    }

    // Client-side routes have no extension; hand them the app shell.
    if !is_file(dir, &path) && !path.contains('.') && path != "/" {
        *request.uri_mut() = Uri::from_static("/");
    }

    match ServeDir::new(dir).oneshot(request).await {
        Ok(response) => response.map(Body::new).into_response(),
        Err(never) => match never {},
    }
}

fn is_file(dir: &Path, path: &str) -> bool {
    let relative = Path::new(path.trim_start_matches('/'));
    if relative
        .components()
        .any(|component| !matches!(component, Component::Normal(_)))
    {
        return false;
    }

    dir.join(relative).is_file()
}
