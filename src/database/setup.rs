use anyhow::{Context, Result};

use super::connection::DbConn;

/// Drops and recreates the news schema from the bundled DDL.
pub fn reset_schema(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");

    conn.execute_batch(schema_sql)
        .context("Failed to reset news schema")?;

    log::info!("News schema reset successfully");
    Ok(())
}
