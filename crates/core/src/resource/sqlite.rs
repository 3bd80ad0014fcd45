//! SQLite-backed resource store implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use super::{NewResource, Resource, ResourceStore, ResourceStoreError};

/// SQLite-backed resource store.
pub struct SqliteResourceStore {
    conn: Mutex<Connection>,
}

impl SqliteResourceStore {
    /// Create a new SQLite store, creating the database file and table if needed.
    pub fn new(path: &Path) -> Result<Self, ResourceStoreError> {
        let conn =
            Connection::open(path).map_err(|e| ResourceStoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, ResourceStoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| ResourceStoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), ResourceStoreError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS resources (
                id TEXT PRIMARY KEY,
                unit_name TEXT NOT NULL,
                resource_type TEXT NOT NULL,
                file_name TEXT NOT NULL,
                file_path TEXT NOT NULL UNIQUE,
                file_size INTEGER NOT NULL,
                file_type TEXT NOT NULL,
                public_url TEXT NOT NULL,
                year_completed INTEGER,
                year_of_candidates TEXT,
                semester TEXT,
                week_number INTEGER,
                created_at TEXT NOT NULL,
                is_verified INTEGER NOT NULL DEFAULT 0
            );

            CREATE INDEX IF NOT EXISTS idx_resources_verified_created
                ON resources(is_verified, created_at);
            CREATE INDEX IF NOT EXISTS idx_resources_file_path
                ON resources(file_path);
            "#,
        )
        .map_err(|e| ResourceStoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Resource> {
        let created_at_str: String = row.get(12)?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(Resource {
            id: row.get(0)?,
            unit_name: row.get(1)?,
            resource_type: row.get(2)?,
            file_name: row.get(3)?,
            file_path: row.get(4)?,
            file_size: row.get(5)?,
            file_type: row.get(6)?,
            public_url: row.get(7)?,
            year_completed: row.get(8)?,
            year_of_candidates: row.get(9)?,
            semester: row.get(10)?,
            week_number: row.get(11)?,
            created_at,
            is_verified: row.get(13)?,
        })
    }
}

const SELECT_COLUMNS: &str = "id, unit_name, resource_type, file_name, file_path, file_size, \
     file_type, public_url, year_completed, year_of_candidates, semester, week_number, \
     created_at, is_verified";

impl ResourceStore for SqliteResourceStore {
    fn insert(&self, new: &NewResource) -> Result<Resource, ResourceStoreError> {
        let conn = self.conn.lock().unwrap();

        let resource = Resource {
            id: Uuid::new_v4().to_string(),
            unit_name: new.unit_name.clone(),
            resource_type: new.resource_type.clone(),
            file_name: new.file_name.clone(),
            file_path: new.file_path.clone(),
            file_size: new.file_size,
            file_type: new.file_type.clone(),
            public_url: new.public_url.clone(),
            year_completed: new.year_completed,
            year_of_candidates: new.year_of_candidates.clone(),
            semester: new.semester.clone(),
            week_number: new.week_number,
            created_at: Utc::now(),
            is_verified: false,
        };

        conn.execute(
            "INSERT INTO resources (id, unit_name, resource_type, file_name, file_path, \
             file_size, file_type, public_url, year_completed, year_of_candidates, semester, \
             week_number, created_at, is_verified) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                resource.id,
                resource.unit_name,
                resource.resource_type,
                resource.file_name,
                resource.file_path,
                resource.file_size,
                resource.file_type,
                resource.public_url,
                resource.year_completed,
                resource.year_of_candidates,
                resource.semester,
                resource.week_number,
                resource.created_at.to_rfc3339(),
                resource.is_verified,
            ],
        )
        .map_err(|e| ResourceStoreError::Database(e.to_string()))?;

        Ok(resource)
    }

    fn list_verified(&self) -> Result<Vec<Resource>, ResourceStoreError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM resources WHERE is_verified = 1 \
                 ORDER BY created_at DESC"
            ))
            .map_err(|e| ResourceStoreError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::map_row)
            .map_err(|e| ResourceStoreError::Database(e.to_string()))?;

        let mut resources = Vec::new();
        for row in rows {
            resources.push(row.map_err(|e| ResourceStoreError::Database(e.to_string()))?);
        }
        Ok(resources)
    }

    fn find_by_path(&self, file_path: &str) -> Result<Option<Resource>, ResourceStoreError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM resources WHERE file_path = ?1"
            ))
            .map_err(|e| ResourceStoreError::Database(e.to_string()))?;

        let mut rows = stmt
            .query_map(params![file_path], Self::map_row)
            .map_err(|e| ResourceStoreError::Database(e.to_string()))?;

        match rows.next() {
            Some(row) => Ok(Some(
                row.map_err(|e| ResourceStoreError::Database(e.to_string()))?,
            )),
            None => Ok(None),
        }
    }

    fn mark_verified(&self, id: &str) -> Result<(), ResourceStoreError> {
        let conn = self.conn.lock().unwrap();

        let updated = conn
            .execute(
                "UPDATE resources SET is_verified = 1 WHERE id = ?1",
                params![id],
            )
            .map_err(|e| ResourceStoreError::Database(e.to_string()))?;

        if updated == 0 {
            return Err(ResourceStoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn count(&self) -> Result<u64, ResourceStoreError> {
        let conn = self.conn.lock().unwrap();

        conn.query_row("SELECT COUNT(*) FROM resources", [], |row| row.get(0))
            .map_err(|e| ResourceStoreError::Database(e.to_string()))
    }
}
