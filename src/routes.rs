//! Route table
//!
//! Handlers receive the shared application context through a cloned `Arc`,
//! captured per route.

use std::sync::Arc;

use crate::context::AppContext;
use crate::controllers;
use crate::routing::Router;

macro_rules! with_ctx {
    ($ctx:expr, $handler:path) => {{
        let ctx = $ctx.clone();
        move |req| $handler(req, ctx.clone())
    }};
}

pub fn build(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .get("/", with_ctx!(ctx, controllers::health::root))
        .get("/healthz", controllers::health::healthz)
        // List collection
        .get("/api/todo/lists", with_ctx!(ctx, controllers::lists::index))
        .post("/api/todo/lists", with_ctx!(ctx, controllers::lists::store))
        .get(
            "/api/todo/lists/{list_id}",
            with_ctx!(ctx, controllers::lists::show),
        )
        .patch(
            "/api/todo/lists/{list_id}",
            with_ctx!(ctx, controllers::lists::update),
        )
        .delete(
            "/api/todo/lists/{list_id}",
            with_ctx!(ctx, controllers::lists::destroy),
        )
        // Item collection
        .get(
            "/api/todo/lists/{list_id}/items",
            with_ctx!(ctx, controllers::items::index),
        )
        .post(
            "/api/todo/lists/{list_id}/items",
            with_ctx!(ctx, controllers::items::store),
        )
        .get(
            "/api/todo/items/{item_id}",
            with_ctx!(ctx, controllers::items::show),
        )
        .patch(
            "/api/todo/items/{item_id}",
            with_ctx!(ctx, controllers::items::update),
        )
        .delete(
            "/api/todo/items/{item_id}",
            with_ctx!(ctx, controllers::items::destroy),
        )
}
