//! Statically declared dataset layout, checked once at startup.

use log::debug;
use sqlx::SqlitePool;

use super::Error;

#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

pub const MEASUREMENT: TableSchema = TableSchema {
    name: "measurement",
    columns: &["station", "date", "prcp", "tobs"],
};

pub const STATION: TableSchema = TableSchema {
    name: "station",
    columns: &["station"],
};

pub const DATASET_SCHEMA: &[TableSchema] = &[MEASUREMENT, STATION];

impl TableSchema {
    /// Declared columns absent from `found`; comparison ignores case like SQLite does
    pub fn missing_columns(&self, found: &[String]) -> Vec<&'static str> {
        self.columns
            .iter()
            .copied()
            .filter(|column| !found.iter().any(|f| f.eq_ignore_ascii_case(column)))
            .collect()
    }
}

pub async fn validate_schema(pool: &SqlitePool) -> Result<(), Error> {
    for table in DATASET_SCHEMA {
        let found: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
            .bind(table.name)
            .fetch_all(pool)
            .await?;

        if found.is_empty() {
            return Err(Error::Schema(format!("missing table '{}'", table.name)));
        }

        let missing = table.missing_columns(&found);
        if !missing.is_empty() {
            return Err(Error::Schema(format!(
                "table '{}' is missing columns: {}",
                table.name,
                missing.join(", ")
            )));
        }
        debug!("table '{}' has columns {:?}", table.name, found);
    }
    Ok(())
}
