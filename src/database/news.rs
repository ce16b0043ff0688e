use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::params;

use crate::pagination::QueryResult;

use super::connection::DbConn;
use super::models::{NewsDemand, NewsItem, OrderColumn, SortDirection};

const NEWS_COLUMNS: &str = "id, title, teaser, datetime, hidden, created_at";

pub fn insert_news(
    conn: &mut DbConn,
    title: &str,
    teaser: Option<&str>,
    datetime: NaiveDateTime,
) -> Result<NewsItem> {
    let sql = "INSERT INTO news (title, teaser, datetime) VALUES (?1, ?2, ?3) RETURNING id, title, teaser, datetime, hidden, created_at";

    conn.query_row(sql, params![title, teaser, datetime], parse_news_row)
        .context("Failed to insert news item")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<NewsItem>> {
    use rusqlite::OptionalExtension;

    let sql = "SELECT id, title, teaser, datetime, hidden, created_at FROM news WHERE id = ?1";

    conn.query_row(sql, params![id], parse_news_row)
        .optional()
        .context("Failed to query news item by id")
}

/// Every visible news row in id order, materialized once.
pub fn find_all(conn: &mut DbConn) -> Result<QueryResult<NewsItem>> {
    find_demanded(conn, &NewsDemand::default())
}

/// Runs the demanded ordered window and materializes the rows into a
/// snapshot the paginator can count and slice repeatedly.
pub fn find_demanded(conn: &mut DbConn, demand: &NewsDemand) -> Result<QueryResult<NewsItem>> {
    let sql = build_list_sql(demand);
    let mut stmt = conn.prepare(&sql)?;

    let rows = match title_pattern(demand) {
        Some(pattern) => stmt
            .query_map(params![pattern], parse_news_row)?
            .collect::<rusqlite::Result<Vec<_>>>(),
        None => stmt
            .query_map([], parse_news_row)?
            .collect::<rusqlite::Result<Vec<_>>>(),
    }
    .context("Failed to query demanded news")?;

    Ok(QueryResult::new(rows))
}

/// Number of visible rows matching the demand's filter, before its
/// limit/offset window is applied.
pub fn count_demanded(conn: &mut DbConn, demand: &NewsDemand) -> Result<usize> {
    let mut sql = String::from("SELECT COUNT(*) FROM news WHERE hidden = 0");
    if demand.title_contains.is_some() {
        sql.push_str(" AND title LIKE ?1");
    }

    let count: i64 = match title_pattern(demand) {
        Some(pattern) => conn.query_row(&sql, params![pattern], |row| row.get(0)),
        None => conn.query_row(&sql, [], |row| row.get(0)),
    }
    .context("Failed to count demanded news")?;

    Ok(count as usize)
}

fn build_list_sql(demand: &NewsDemand) -> String {
    let mut sql = format!("SELECT {NEWS_COLUMNS} FROM news WHERE hidden = 0");

    if demand.title_contains.is_some() {
        sql.push_str(" AND title LIKE ?1");
    }

    let column = match demand.order_by {
        OrderColumn::Id => "id",
        OrderColumn::Datetime => "datetime",
        OrderColumn::Title => "title",
    };
    let direction = match demand.direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };
    sql.push_str(&format!(" ORDER BY {column} {direction}"));

    // SQLite only accepts OFFSET after a LIMIT clause; -1 means unbounded.
    if demand.limit > 0 {
        sql.push_str(&format!(" LIMIT {}", demand.limit));
    } else if demand.offset > 0 {
        sql.push_str(" LIMIT -1");
    }
    if demand.offset > 0 {
        sql.push_str(&format!(" OFFSET {}", demand.offset));
    }

    sql
}

fn title_pattern(demand: &NewsDemand) -> Option<String> {
    demand
        .title_contains
        .as_ref()
        .map(|needle| format!("%{needle}%"))
}

fn parse_news_row(row: &rusqlite::Row) -> rusqlite::Result<NewsItem> {
    Ok(NewsItem {
        id: row.get(0)?,
        title: row.get(1)?,
        teaser: row.get(2)?,
        datetime: row.get(3)?,
        hidden: row.get(4)?,
        created_at: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::super::connection::create_memory_pool;
    use super::super::fixtures::seed_news;
    use super::super::setup::reset_schema;
    use super::*;
    use crate::pagination::Paginator;

    fn seeded_conn() -> DbConn {
        let pool = create_memory_pool().unwrap();
        let mut conn = pool.get().unwrap();
        reset_schema(&mut conn).unwrap();
        seed_news(&mut conn).unwrap();
        conn
    }

    #[test]
    fn fixture_holds_twenty_items() {
        let mut conn = seeded_conn();
        let result = find_all(&mut conn).unwrap();
        assert_eq!(result.len(), 20);
        assert_eq!(result.get(0).unwrap().title, "News1");
        assert_eq!(result.get(19).unwrap().title, "News20");
    }

    #[test]
    fn demand_offset_drops_leading_rows() {
        let mut conn = seeded_conn();
        let demand = NewsDemand {
            offset: 3,
            ..NewsDemand::default()
        };

        let result = find_demanded(&mut conn, &demand).unwrap();

        assert_eq!(result.len(), 17);
        assert_eq!(result.get(0).unwrap().title, "News4");
        // The filter count ignores the window.
        assert_eq!(count_demanded(&mut conn, &demand).unwrap(), 20);
    }

    #[test]
    fn demand_limit_caps_rows() {
        let mut conn = seeded_conn();
        let demand = NewsDemand {
            limit: 4,
            ..NewsDemand::default()
        };

        let result = find_demanded(&mut conn, &demand).unwrap();

        assert_eq!(result.len(), 4);
        assert_eq!(result.get(3).unwrap().title, "News4");
    }

    #[test]
    fn demand_filters_by_title() {
        let mut conn = seeded_conn();
        let demand = NewsDemand {
            title_contains: Some("News1".to_string()),
            ..NewsDemand::default()
        };

        // News1 and News10..News19.
        let result = find_demanded(&mut conn, &demand).unwrap();
        assert_eq!(result.len(), 11);
        assert_eq!(count_demanded(&mut conn, &demand).unwrap(), 11);
    }

    #[test]
    fn demand_orders_descending() {
        let mut conn = seeded_conn();
        let demand = NewsDemand {
            order_by: OrderColumn::Datetime,
            direction: SortDirection::Desc,
            ..NewsDemand::default()
        };

        let result = find_demanded(&mut conn, &demand).unwrap();
        assert_eq!(result.get(0).unwrap().title, "News20");
    }

    #[test]
    fn paginator_over_offset_window_reaches_news10() {
        let mut conn = seeded_conn();
        let demand = NewsDemand {
            offset: 3,
            ..NewsDemand::default()
        };
        let result = find_demanded(&mut conn, &demand).unwrap();

        let paginator = Paginator::with_window(result, 3, 3, demand.limit, demand.offset);

        assert_eq!(paginator.number_of_pages(), 6);
        assert_eq!(paginator.paginated_items().len(), 3);
        assert_eq!(paginator.paginated_items()[0].title, "News10");
    }

    #[test]
    fn paginator_over_limit_window_has_short_last_page() {
        let mut conn = seeded_conn();
        let demand = NewsDemand {
            limit: 4,
            ..NewsDemand::default()
        };
        let result = find_demanded(&mut conn, &demand).unwrap();

        let paginator = Paginator::with_window(result, 2, 3, demand.limit, demand.offset);

        assert_eq!(paginator.number_of_pages(), 2);
        assert_eq!(paginator.paginated_items().len(), 1);
        assert_eq!(paginator.paginated_items()[0].title, "News4");
    }

    #[test]
    fn paginator_over_limit_and_offset_window_reaches_news9() {
        let mut conn = seeded_conn();
        let demand = NewsDemand {
            limit: 12,
            offset: 5,
            ..NewsDemand::default()
        };
        let result = find_demanded(&mut conn, &demand).unwrap();

        let paginator = Paginator::with_window(result, 2, 3, demand.limit, demand.offset);

        assert_eq!(paginator.number_of_pages(), 4);
        assert_eq!(paginator.paginated_items().len(), 3);
        assert_eq!(paginator.paginated_items()[0].title, "News9");
    }
}
