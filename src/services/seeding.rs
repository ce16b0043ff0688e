use anyhow::Result;
use log::info;

use crate::database::{self, DbPool};
use crate::database::fixtures::seed_news;
use crate::database::setup::reset_schema;

/// Resets the schema and loads the bundled news fixture.
pub struct SeedingService {
    pool: DbPool,
}

impl SeedingService {
    pub fn new(db_path: &str) -> Result<Self> {
        let pool = database::create_pool(db_path)?;
        Ok(Self { pool })
    }

    pub fn run(&self) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;

        reset_schema(&mut conn)?;
        let seeded = seed_news(&mut conn)?;

        info!("Seeding complete, {} news rows loaded", seeded);
        Ok(())
    }
}
