//! libSQL backend — async `ProfileStore` implementation.
//!
//! Supports local file and in-memory databases. One connection is reused
//! for all operations; `libsql::Connection` is safe for concurrent async
//! use.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use libsql::{Connection, Database as LibSqlDatabase, params};
use tracing::info;

use crate::analysis::AnalysisResult;
use crate::error::DatabaseError;
use crate::profile::UserProfile;
use crate::store::migrations;
use crate::store::traits::{ProfileStore, StoredProfile};

const PROFILE_COLUMNS: &str =
    "name, email, education, skills, interests, resume_text, analysis_data, updated_at";

/// libSQL database backend.
pub struct LibSqlBackend {
    #[allow(dead_code)]
    db: Arc<LibSqlDatabase>,
    conn: Connection,
}

impl LibSqlBackend {
    /// Open (or create) a local database file and run migrations.
    pub async fn new_local(path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::Pool(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::Pool(format!("Failed to open libSQL database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Pool(format!("Failed to create connection: {e}")))?;

        let backend = Self {
            db: Arc::new(db),
            conn,
        };
        migrations::run_migrations(&backend.conn).await?;
        info!(path = %path.display(), "Database opened");
        Ok(backend)
    }

    /// Create an in-memory database (for tests).
    pub async fn new_memory() -> Result<Self, DatabaseError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| {
                DatabaseError::Pool(format!("Failed to create in-memory database: {e}"))
            })?;

        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Pool(format!("Failed to create connection: {e}")))?;

        let backend = Self {
            db: Arc::new(db),
            conn,
        };
        migrations::run_migrations(&backend.conn).await?;
        Ok(backend)
    }

    fn conn(&self) -> &Connection {
        &self.conn
    }
}

/// Convert `Option<String>` to a libsql Value.
fn opt_text_owned(s: Option<String>) -> libsql::Value {
    match s {
        Some(s) => libsql::Value::Text(s),
        None => libsql::Value::Null,
    }
}

/// Parse an RFC 3339 or SQLite datetime string into DateTime<Utc>.
fn parse_datetime(s: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return ndt.and_utc();
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return ndt.and_utc();
    }
    DateTime::<Utc>::MIN_UTC
}

/// Map a libsql row (in `PROFILE_COLUMNS` order) to a `StoredProfile`.
fn row_to_stored(row: &libsql::Row) -> Result<StoredProfile, DatabaseError> {
    let read = |idx: i32| -> Result<String, DatabaseError> {
        row.get(idx)
            .map_err(|e| DatabaseError::Query(format!("profile column {idx}: {e}")))
    };

    let analysis_str: Option<String> = row.get(6).ok();
    let analysis = match analysis_str {
        Some(raw) => Some(serde_json::from_str::<AnalysisResult>(&raw).map_err(|e| {
            DatabaseError::Serialization(format!("analysis_data column: {e}"))
        })?),
        None => None,
    };

    let updated_str: String = read(7)?;

    Ok(StoredProfile {
        profile: UserProfile {
            name: read(0)?,
            email: read(1)?,
            education: read(2)?,
            skills: read(3)?,
            interests: read(4)?,
            resume_text: read(5)?,
        },
        analysis,
        updated_at: parse_datetime(&updated_str),
    })
}

#[async_trait]
impl ProfileStore for LibSqlBackend {
    async fn get_profile(&self, user_id: &str) -> Result<Option<StoredProfile>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = ?1"),
                params![user_id],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("get_profile: {e}")))?;

        match rows.next().await {
            Ok(Some(row)) => Ok(Some(row_to_stored(&row)?)),
            Ok(None) => Ok(None),
            Err(e) => Err(DatabaseError::Query(format!("get_profile: {e}"))),
        }
    }

    async fn upsert_profile(
        &self,
        user_id: &str,
        profile: &UserProfile,
        analysis: Option<&AnalysisResult>,
    ) -> Result<(), DatabaseError> {
        let analysis_json = match analysis {
            Some(a) => Some(serde_json::to_string(a).map_err(|e| {
                DatabaseError::Serialization(format!("analysis_data: {e}"))
            })?),
            None => None,
        };
        let now = Utc::now().to_rfc3339();

        // COALESCE keeps a previously stored analysis when none is supplied
        self.conn()
            .execute(
                "INSERT INTO profiles
                    (id, name, email, education, skills, interests, resume_text, analysis_data, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    email = excluded.email,
                    education = excluded.education,
                    skills = excluded.skills,
                    interests = excluded.interests,
                    resume_text = excluded.resume_text,
                    analysis_data = COALESCE(excluded.analysis_data, profiles.analysis_data),
                    updated_at = excluded.updated_at",
                params![
                    user_id,
                    profile.name.as_str(),
                    profile.email.as_str(),
                    profile.education.as_str(),
                    profile.skills.as_str(),
                    profile.interests.as_str(),
                    profile.resume_text.as_str(),
                    opt_text_owned(analysis_json),
                    now
                ],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("upsert_profile: {e}")))?;

        Ok(())
    }

    async fn delete_profile(&self, user_id: &str) -> Result<(), DatabaseError> {
        self.conn()
            .execute("DELETE FROM profiles WHERE id = ?1", params![user_id])
            .await
            .map_err(|e| DatabaseError::Query(format!("delete_profile: {e}")))?;
        Ok(())
    }
}
