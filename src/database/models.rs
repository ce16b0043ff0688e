use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub teaser: Option<String>,
    pub datetime: NaiveDateTime,
    pub hidden: bool,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub enum OrderColumn {
    Id,
    Datetime,
    Title,
}

#[derive(Debug, Clone)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Describes the ordered window a listing wants from the news table. `limit`
/// of 0 means no limit; both `limit` and `offset` shape the query itself and
/// are echoed to the paginator as bookkeeping.
#[derive(Debug, Clone)]
pub struct NewsDemand {
    pub order_by: OrderColumn,
    pub direction: SortDirection,
    pub title_contains: Option<String>,
    pub limit: usize,
    pub offset: usize,
}

impl Default for NewsDemand {
    fn default() -> Self {
        Self {
            order_by: OrderColumn::Id,
            direction: SortDirection::Asc,
            title_contains: None,
            limit: 0,
            offset: 0,
        }
    }
}
