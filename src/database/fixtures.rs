use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;

use super::connection::DbConn;
use super::news::insert_news;

#[derive(Debug, Deserialize)]
struct NewsFixture {
    title: String,
    teaser: Option<String>,
    datetime: NaiveDateTime,
}

/// Loads the bundled 20-item news fixture. Returns the number of rows
/// inserted.
pub fn seed_news(conn: &mut DbConn) -> Result<usize> {
    let fixtures: Vec<NewsFixture> = serde_json::from_str(include_str!("fixtures/news.json"))
        .context("Failed to parse bundled news fixture")?;

    for fixture in &fixtures {
        insert_news(
            conn,
            &fixture.title,
            fixture.teaser.as_deref(),
            fixture.datetime,
        )?;
    }

    log::info!("Seeded {} news fixture rows", fixtures.len());
    Ok(fixtures.len())
}
