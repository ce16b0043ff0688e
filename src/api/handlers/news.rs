use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{NewsListItem, NewsListResponse};
use crate::database::{
    self,
    models::{NewsDemand, OrderColumn, SortDirection},
};
use crate::pagination::Paginator;

use super::{AppState, NewsParams};

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NewsParams>,
) -> impl IntoResponse {
    let page = params.page.unwrap_or(1);
    let items_per_page = match params.items_per_page {
        Some(n) if n > 0 => n.min(state.config.list.max_items_per_page as i64),
        _ => state.config.list.default_items_per_page as i64,
    };
    let limit = params.limit.unwrap_or(0);
    let offset = params.offset.unwrap_or(0);

    let order_by = match params.order_by.as_deref() {
        Some("title") => OrderColumn::Title,
        Some("datetime") => OrderColumn::Datetime,
        _ => OrderColumn::Id,
    };
    let direction = match params.order.as_deref() {
        Some("desc") => SortDirection::Desc,
        _ => SortDirection::Asc,
    };

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let demand = NewsDemand {
        order_by,
        direction,
        title_contains: params.filter,
        limit,
        offset,
    };

    let result = match database::news::find_demanded(&mut conn, &demand) {
        Ok(result) => result,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {e}"))
                .into_response();
        }
    };
    let total = result.len();

    // A requested page past the end clamps to the last page, never a 404.
    let paginator = Paginator::with_window(result, page, items_per_page, limit, offset);

    let items: Vec<NewsListItem> = paginator
        .paginated_items()
        .into_iter()
        .map(NewsListItem::from)
        .collect();

    Json(NewsListResponse {
        items,
        total,
        page: paginator.current_page_number(),
        items_per_page: items_per_page as usize,
        number_of_pages: paginator.number_of_pages(),
        first_item_key: paginator.key_of_first_paginated_item(),
        last_item_key: paginator.key_of_last_paginated_item(),
        limit: paginator.limit(),
        offset: paginator.offset(),
    })
    .into_response()
}

pub async fn get_news_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let item = match database::news::find_by_id(&mut conn, id) {
        Ok(item) => item,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {e}"))
                .into_response();
        }
    };

    match item {
        Some(item) => Json(NewsListItem::from(item)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
