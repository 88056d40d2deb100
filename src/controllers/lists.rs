use std::sync::Arc;

use validator::Validate;

use crate::context::AppContext;
use crate::error::Error;
use crate::http::{json_body, HttpResponse, Request, Response, ResponseExt};
use crate::requests::{ListCreate, ListDetailQuery, ListUpdate};
use crate::services::todos::{self, ListDetail};

/// GET /api/todo/lists
pub async fn index(_req: Request, ctx: Arc<AppContext>) -> Response {
    let summaries = todos::list_lists(&ctx.db).await?;
    json_body(&summaries)
}

/// POST /api/todo/lists
pub async fn store(req: Request, ctx: Arc<AppContext>) -> Response {
    let payload: ListCreate = req.json().await?;
    payload.validate().map_err(Error::from)?;

    let list = todos::create_list(&ctx.db, payload).await?;
    json_body(&list).status(201)
}

/// GET /api/todo/lists/{list_id}
pub async fn show(req: Request, ctx: Arc<AppContext>) -> Response {
    let list_id = req.param_uuid("list_id")?;
    let query: ListDetailQuery = req.query()?;

    let detail = if query.include_items {
        todos::get_list_detail(&ctx.db, list_id).await?
    } else {
        ListDetail {
            list: todos::get_list(&ctx.db, list_id).await?,
            items: Vec::new(),
        }
    };
    json_body(&detail)
}

/// PATCH /api/todo/lists/{list_id}
pub async fn update(req: Request, ctx: Arc<AppContext>) -> Response {
    let list_id = req.param_uuid("list_id")?;
    let patch: ListUpdate = req.json().await?;
    patch.validate().map_err(Error::from)?;

    let list = todos::update_list(&ctx.db, list_id, patch).await?;
    json_body(&list)
}

/// DELETE /api/todo/lists/{list_id}
pub async fn destroy(req: Request, ctx: Arc<AppContext>) -> Response {
    let list_id = req.param_uuid("list_id")?;
    todos::delete_list(&ctx.db, list_id).await?;
    HttpResponse::no_content().ok()
}
