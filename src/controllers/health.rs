use std::sync::Arc;

use crate::context::AppContext;
use crate::http::{HttpResponse, Request, Response};

/// Service banner at the root path
pub async fn root(_req: Request, ctx: Arc<AppContext>) -> Response {
    HttpResponse::json(serde_json::json!({
        "status": "ok",
        "service": ctx.config.app_name,
    }))
    .ok()
}

/// Process liveness probe
pub async fn healthz(_req: Request) -> Response {
    HttpResponse::json(serde_json::json!({ "status": "ok" })).ok()
}
