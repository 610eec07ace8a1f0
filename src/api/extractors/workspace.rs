use axum::{
    extract::{FromRequestParts, Path},
    http::{header::HOST, request::Parts, StatusCode},
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::models::workspace::Workspace;
use crate::domain::services::resolver;
use crate::state::AppState;

/// Path-scoped workspace id, validated against storage.
pub struct WorkspaceId(pub String);

impl FromRequestParts<Arc<AppState>> for WorkspaceId {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let params: Path<HashMap<String, String>> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;

        let workspace_id = params.get("workspace_id").ok_or(StatusCode::BAD_REQUEST)?;

        match state.workspace_repo.find_by_id(workspace_id).await {
            Ok(Some(_)) => Ok(WorkspaceId(workspace_id.clone())),
            Ok(None) => Err(StatusCode::NOT_FOUND),
            Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

/// Workspace resolved from the request's Host header. A miss is not a
/// rejection: the inner option is None and the handler serves the generic
/// experience.
pub struct ResolvedWorkspace(pub Option<Workspace>);

impl FromRequestParts<Arc<AppState>> for ResolvedWorkspace {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let host = parts
            .headers
            .get(HOST)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("");

        // Strip any port before resolving.
        let hostname = host.split(':').next().unwrap_or("");
        if hostname.is_empty() {
            return Ok(ResolvedWorkspace(None));
        }

        let workspace = resolver::resolve(state.workspace_repo.as_ref(), hostname).await;
        Ok(ResolvedWorkspace(workspace))
    }
}
