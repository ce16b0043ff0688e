#[derive(Debug, Clone)]
pub struct ListSettings {
    pub default_items_per_page: usize,
    pub max_items_per_page: usize,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            default_items_per_page: 10,
            max_items_per_page: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub default_path: &'static str,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            default_path: "newsdesk.db",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub list: ListSettings,
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            list: ListSettings::default(),
            database: DatabaseSettings::default(),
        }
    }
}
