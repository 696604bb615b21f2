//! List-view preference persistence (the external settings collaborator).
//!
//! # Responsibility
//! - Persist filter, sort, search text and the one-time seed flag between
//!   launches.
//! - Hand the core a plain [`ViewPrefs`] snapshot; the engine itself never
//!   touches ambient key-value state.
//!
//! # Invariants
//! - Unknown or invalid stored values fall back to defaults on load.
//!   Preferences are a convenience, not data; they must never fail a launch.
//! - `store` writes the complete preference set.

use crate::query::visible::{
    parse_sort_option, parse_status_filter, sort_option_as_str, status_filter_as_str, SortOption,
    StatusFilter,
};
use crate::repo::task_repo::RepoResult;
use rusqlite::{params, Connection};

const KEY_FILTER: &str = "filter";
const KEY_SORT: &str = "sort";
const KEY_SEARCH: &str = "search";
const KEY_SEEDED: &str = "seeded";

/// Persisted list-view preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewPrefs {
    pub filter: StatusFilter,
    pub sort: SortOption,
    /// Raw search text as last typed; blank means no search.
    pub search: String,
    /// One-time demo-seed marker, kept so reseeding never duplicates data.
    pub seeded: bool,
}

/// Repository interface for view preferences.
pub trait PrefsRepository {
    /// Loads the preference snapshot, applying defaults for missing or
    /// unparsable values.
    fn load(&self) -> RepoResult<ViewPrefs>;
    /// Persists the complete preference snapshot.
    fn store(&self, prefs: &ViewPrefs) -> RepoResult<()>;
}

/// SQLite-backed preference repository over the `view_prefs` table.
pub struct SqlitePrefsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePrefsRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn read_value(&self, key: &str) -> RepoResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM view_prefs WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn write_value(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO view_prefs (key, value) VALUES (?1, ?2)
             ON CONFLICT (key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;

        Ok(())
    }
}

impl PrefsRepository for SqlitePrefsRepository<'_> {
    fn load(&self) -> RepoResult<ViewPrefs> {
        let defaults = ViewPrefs::default();

        let filter = self
            .read_value(KEY_FILTER)?
            .and_then(|value| parse_status_filter(&value))
            .unwrap_or(defaults.filter);

        let sort = self
            .read_value(KEY_SORT)?
            .and_then(|value| parse_sort_option(&value))
            .unwrap_or(defaults.sort);

        let search = self.read_value(KEY_SEARCH)?.unwrap_or(defaults.search);

        let seeded = match self.read_value(KEY_SEEDED)?.as_deref() {
            Some("true") => true,
            Some("false") | None => false,
            Some(_) => defaults.seeded,
        };

        Ok(ViewPrefs {
            filter,
            sort,
            search,
            seeded,
        })
    }

    fn store(&self, prefs: &ViewPrefs) -> RepoResult<()> {
        self.write_value(KEY_FILTER, status_filter_as_str(prefs.filter))?;
        self.write_value(KEY_SORT, sort_option_as_str(prefs.sort))?;
        self.write_value(KEY_SEARCH, &prefs.search)?;
        self.write_value(KEY_SEEDED, if prefs.seeded { "true" } else { "false" })?;

        Ok(())
    }
}
