use crate::api::handlers::{
    AppState,
    modules::get_module_status,
    news::{get_news, get_news_detail},
};
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/news", get(get_news))
        .route("/api/news/:id", get(get_news_detail))
        .route("/api/modules/:key", get(get_module_status))
        .with_state(state)
}
