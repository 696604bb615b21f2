//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `tasks` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths persist whatever the caller hands over; the service layer
//!   validates before calling (repository adds no logic).
//! - Read paths reject invalid persisted rows instead of coercing them.
//! - `list_all` ordering is deterministic: `created_at DESC, uuid ASC`.

use crate::db::DbError;
use crate::model::task::{Task, TaskId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const TASK_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    notes,
    is_done,
    created_at,
    updated_at
FROM tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for task persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(TaskId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for task persistence.
///
/// A thin facade over the store: insert/update/delete forward as-is, and
/// `list_all` returns the full ordered snapshot the visible-set engine
/// consumes.
pub trait TaskRepository {
    /// Inserts one task.
    fn insert(&self, task: &Task) -> RepoResult<()>;
    /// Overwrites all mutable fields of an existing task.
    fn update(&self, task: &Task) -> RepoResult<()>;
    /// Gets one task by stable ID.
    fn get(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Returns all tasks ordered by `created_at DESC, uuid ASC`.
    fn list_all(&self) -> RepoResult<Vec<Task>>;
    /// Deletes one task. Missing ID is `RepoError::NotFound`.
    fn delete(&self, id: TaskId) -> RepoResult<()>;
    /// Deletes each listed task independently and returns the removed count.
    ///
    /// Not atomic: a failure mid-way leaves earlier deletes in place, which
    /// is acceptable because the deletes are independent. Missing IDs are
    /// skipped, not errors.
    fn delete_many(&self, ids: &[TaskId]) -> RepoResult<usize>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn insert(&self, task: &Task) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO tasks (uuid, title, notes, is_done, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                task.id.to_string(),
                task.title.as_str(),
                task.notes.as_deref(),
                bool_to_int(task.is_done),
                task.created_at,
                task.updated_at,
            ],
        )?;

        Ok(())
    }

    fn update(&self, task: &Task) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                title = ?1,
                notes = ?2,
                is_done = ?3,
                updated_at = ?4
             WHERE uuid = ?5;",
            params![
                task.title.as_str(),
                task.notes.as_deref(),
                bool_to_int(task.is_done),
                task.updated_at,
                task.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(task.id));
        }

        Ok(())
    }

    fn get(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_all(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY created_at DESC, uuid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn delete(&self, id: TaskId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_many(&self, ids: &[TaskId]) -> RepoResult<usize> {
        let mut removed = 0;
        for id in ids {
            removed += self
                .conn
                .execute("DELETE FROM tasks WHERE uuid = ?1;", [id.to_string()])?;
        }

        Ok(removed)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in tasks.uuid"))
    })?;

    let title: String = row.get("title")?;
    if title.trim().is_empty() {
        return Err(RepoError::InvalidData(format!(
            "empty title persisted for task `{id}`"
        )));
    }

    let is_done = match row.get::<_, i64>("is_done")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_done value `{other}` in tasks.is_done"
            )));
        }
    };

    let created_at: i64 = row.get("created_at")?;
    let updated_at: i64 = row.get("updated_at")?;
    if updated_at < created_at {
        return Err(RepoError::InvalidData(format!(
            "updated_at {updated_at} precedes created_at {created_at} for task `{id}`"
        )));
    }

    Ok(Task {
        id,
        title,
        notes: row.get("notes")?,
        is_done,
        created_at,
        updated_at,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
