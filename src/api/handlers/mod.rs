use serde::Deserialize;

use crate::config::modules::ModuleRegistry;
use crate::config::settings::AppConfig;
use crate::database::DbPool;

pub mod modules;
pub mod news;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
    pub modules: ModuleRegistry,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsParams {
    pub page: Option<i64>,
    pub items_per_page: Option<i64>,
    pub order_by: Option<String>,
    pub order: Option<String>,
    pub filter: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}
