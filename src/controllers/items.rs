use std::sync::Arc;

use sea_orm::ActiveEnum;
use validator::Validate;

use crate::context::AppContext;
use crate::error::Error;
use crate::http::{json_body, HttpResponse, Request, Response, ResponseExt};
use crate::models::TodoStatus;
use crate::requests::{ItemCreate, ItemFilterQuery, ItemUpdate};
use crate::services::todos::{self, ItemFilters};

/// GET /api/todo/lists/{list_id}/items
pub async fn index(req: Request, ctx: Arc<AppContext>) -> Response {
    let list_id = req.param_uuid("list_id")?;
    let query: ItemFilterQuery = req.query()?;

    let status = match &query.status {
        Some(raw) => Some(
            TodoStatus::try_from_value(raw)
                .map_err(|_| Error::param_parse(raw.clone(), "todo status"))?,
        ),
        None => None,
    };
    let filters = ItemFilters {
        status,
        tag: query.tag,
        search: query.search,
    };

    let items = todos::list_items(&ctx.db, list_id, filters).await?;
    json_body(&items)
}

/// POST /api/todo/lists/{list_id}/items
pub async fn store(req: Request, ctx: Arc<AppContext>) -> Response {
    let list_id = req.param_uuid("list_id")?;
    let payload: ItemCreate = req.json().await?;
    payload.validate().map_err(Error::from)?;

    let item = todos::create_item(&ctx.db, list_id, payload).await?;
    json_body(&item).status(201)
}

/// GET /api/todo/items/{item_id}
pub async fn show(req: Request, ctx: Arc<AppContext>) -> Response {
    let item_id = req.param_uuid("item_id")?;
    let item = todos::get_item(&ctx.db, item_id).await?;
    json_body(&item)
}

/// PATCH /api/todo/items/{item_id}
pub async fn update(req: Request, ctx: Arc<AppContext>) -> Response {
    let item_id = req.param_uuid("item_id")?;
    let patch: ItemUpdate = req.json().await?;
    patch.validate().map_err(Error::from)?;

    let item = todos::update_item(&ctx.db, item_id, patch).await?;
    json_body(&item)
}

/// DELETE /api/todo/items/{item_id}
pub async fn destroy(req: Request, ctx: Arc<AppContext>) -> Response {
    let item_id = req.param_uuid("item_id")?;
    todos::delete_item(&ctx.db, item_id).await?;
    HttpResponse::no_content().ok()
}
