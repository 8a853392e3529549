use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Rows in insertion order: (station, date, prcp, tobs)
pub const MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519397", "2010-01-01", Some(0.08), 65.0),
    ("USC00519281", "2016-08-22", Some(0.5), 70.0),
    ("USC00519281", "2016-08-23", Some(1.79), 77.0),
    ("USC00519281", "2017-01-01", None, 62.0),
    ("USC00519397", "2017-07-01", Some(0.02), 80.0),
    ("USC00519281", "2017-08-22", Some(0.06), 75.0),
    ("USC00519281", "2017-08-23", Some(0.0), 76.0),
    ("USC00519397", "2017-08-23", Some(0.0), 81.0),
    ("USC00513117", "2017-08-23", Some(0.45), 82.0),
];

/// Deliberately unsorted to catch accidental ordering
pub const STATIONS: &[&str] = &["USC00519397", "USC00513117", "USC00519281"];

pub const CREATE_TABLES: &str = "
    CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    );
    CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    );
";

/// Single-connection in-memory pool; the database lives as long as the connection
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database")
}

pub async fn seed(pool: &SqlitePool) {
    sqlx::raw_sql(CREATE_TABLES)
        .execute(pool)
        .await
        .expect("failed to create tables");

    for (station, date, prcp, tobs) in MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(*station)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(pool)
            .await
            .expect("failed to insert measurement");
    }

    for station in STATIONS {
        sqlx::query("INSERT INTO station (station, name) VALUES (?, ?)")
            .bind(*station)
            .bind(format!("{} station", station))
            .execute(pool)
            .await
            .expect("failed to insert station");
    }
}

pub async fn seeded_pool() -> SqlitePool {
    let pool = memory_pool().await;
    seed(&pool).await;
    pool
}
