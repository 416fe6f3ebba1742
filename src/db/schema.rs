//! Database schema and migrations for Filedrop.
//!
//! Migrations are applied in order when the database is opened. The
//! `schema_version` table tracks which ones have already run. Tables are
//! created with `IF NOT EXISTS` so databases that already carry a `files`
//! table keep their rows.

/// Table recording applied migrations.
#[cfg(feature = "sqlite")]
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version     INTEGER PRIMARY KEY,
    applied_at  TEXT NOT NULL DEFAULT (datetime('now'))
)
"#;

/// Table recording applied migrations.
#[cfg(feature = "postgres")]
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version     INTEGER PRIMARY KEY,
    applied_at  TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Database migrations (SQLite).
#[cfg(feature = "sqlite")]
pub const MIGRATIONS: &[&str] = &[
    // v1: files metadata table
    r#"
CREATE TABLE IF NOT EXISTS files (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    filename    VARCHAR(255) NOT NULL,
    filepath    VARCHAR(255) NOT NULL,
    uploaded_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
"#,
    // v2: listing is always newest first
    r#"
CREATE INDEX IF NOT EXISTS idx_files_uploaded_at ON files(uploaded_at);
"#,
];

/// Database migrations (PostgreSQL).
#[cfg(feature = "postgres")]
pub const MIGRATIONS: &[&str] = &[
    // v1: files metadata table
    r#"
CREATE TABLE IF NOT EXISTS files (
    id          SERIAL PRIMARY KEY,
    filename    VARCHAR(255),
    filepath    VARCHAR(255),
    uploaded_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
"#,
    // v2: listing is always newest first
    r#"
CREATE INDEX IF NOT EXISTS idx_files_uploaded_at ON files(uploaded_at);
"#,
];
