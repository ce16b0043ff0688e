use serde::Serialize;

use crate::database::models::NewsItem;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsListItem {
    pub id: i64,
    pub title: String,
    pub teaser: Option<String>,
    pub datetime: String,
}

impl From<NewsItem> for NewsListItem {
    fn from(item: NewsItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            teaser: item.teaser,
            datetime: item.datetime.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsListResponse {
    pub items: Vec<NewsListItem>,
    /// Size of the windowed source the paginator paged over.
    pub total: usize,
    pub page: usize,
    pub items_per_page: usize,
    pub number_of_pages: usize,
    pub first_item_key: usize,
    pub last_item_key: usize,
    /// Upstream window echoed back so clients can map keys to unwindowed
    /// row numbers.
    pub limit: usize,
    pub offset: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleStatusResponse {
    pub key: String,
    pub active: bool,
}
