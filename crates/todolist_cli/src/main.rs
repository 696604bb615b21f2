//! Command-line presentation surface for the task-list core.
//!
//! # Responsibility
//! - Map subcommands onto the core's create/update/toggle/delete intents.
//! - Drive the visible-set engine and pagination cursor for `list`.
//! - Own the time-based behaviors the core keeps out of scope (settle and
//!   refresh delays).

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use todolist_core::{
    default_log_level, init_logging, now_epoch_ms, parse_sort_option, parse_status_filter,
    sort_option_as_str, status_filter_as_str, visible_tasks, AddOutcome, FeedbackSink, Intensity,
    Pager, PrefsRepository, SqlitePrefsRepository, SqliteTaskRepository, Task, TaskId,
    TaskRepository, TaskService, UpdateOutcome, VisibleQuery, SETTLE_DELAY_MS,
};

/// Terminal stand-in for the original haptic feedback: mutations leave a
/// structured trace in the log file instead of a buzz.
struct LogFeedback;

impl FeedbackSink for LogFeedback {
    fn success(&self) {
        log::debug!("event=feedback module=cli kind=success");
    }

    fn impact(&self, intensity: Intensity) {
        let strength = match intensity {
            Intensity::Light => "light",
            Intensity::Medium => "medium",
        };
        log::debug!("event=feedback module=cli kind=impact strength={strength}");
    }
}

#[derive(Parser, Debug)]
#[command(name = "todolist", version, about = "Personal to-do list")]
struct Cli {
    /// Database file path. Defaults to the platform data directory.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable file logging into this directory.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new task.
    Add {
        title: String,

        #[arg(long)]
        notes: Option<String>,

        /// Create the task as already completed.
        #[arg(long)]
        done: bool,
    },
    /// Show the task list (filtered, searched, sorted, paginated).
    List {
        /// Status filter: all | active | completed. Persisted for next time.
        #[arg(long)]
        filter: Option<String>,

        /// Sort order: newest | oldest | title_az | title_za. Persisted.
        #[arg(long)]
        sort: Option<String>,

        /// Search text matched against title and notes. Persisted.
        #[arg(long)]
        search: Option<String>,

        /// Advance the pagination cursor this many extra pages.
        #[arg(long, default_value_t = 0)]
        more: u32,

        /// Ignore pagination and print the whole visible set.
        #[arg(long)]
        all: bool,
    },
    /// Toggle a task between done and not done.
    Done { id: String },
    /// Edit a task's title, notes, or done flag.
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// New notes text; pass an empty string to clear.
        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        done: Option<bool>,
    },
    /// Delete one or more tasks.
    Rm { ids: Vec<String> },
    /// Pull-to-refresh stand-in; data is local so this only pauses.
    Refresh,
    /// Insert 100 demo tasks into an empty store (once).
    Seed,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let log_dir = log_dir.to_str().context("log dir must be valid UTF-8")?;
        init_logging(default_log_level(), log_dir).map_err(|message| anyhow!(message))?;
    }

    let db_path = match &cli.db {
        Some(path) => path.clone(),
        None => default_db_path()?,
    };
    let conn = todolist_core::db::open_db(&db_path)
        .with_context(|| format!("opening database at {}", db_path.display()))?;
    let service = TaskService::with_feedback(SqliteTaskRepository::new(&conn), LogFeedback);
    let prefs_repo = SqlitePrefsRepository::new(&conn);

    match cli.command {
        Command::Add { title, notes, done } => {
            match service.add_task(&title, notes.as_deref(), done)? {
                AddOutcome::Created(id) => println!("Added {}", short_id(id)),
                AddOutcome::Rejected => bail!("title cannot be empty"),
            }
        }
        Command::List {
            filter,
            sort,
            search,
            more,
            all,
        } => {
            let query = resolve_query(&prefs_repo, filter, sort, search)?;
            list_tasks(&service, &query, more, all)?;
        }
        Command::Done { id } => {
            let id = resolve_id(&service, &id)?;
            let task = service.toggle_done(id)?;
            let state = if task.is_done { "done" } else { "not done" };
            println!("{} is now {state}", short_id(task.id));
        }
        Command::Edit {
            id,
            title,
            notes,
            done,
        } => {
            let id = resolve_id(&service, &id)?;
            let current = service
                .list_tasks()?
                .into_iter()
                .find(|task| task.id == id)
                .context("task disappeared between lookup and edit")?;

            // Unspecified flags keep the stored values; the core update
            // itself always overwrites all three fields at once.
            let title = title.unwrap_or_else(|| current.title.clone());
            let notes = notes.or_else(|| current.notes.clone());
            let done = done.unwrap_or(current.is_done);

            match service.update_task(id, &title, notes.as_deref(), done)? {
                UpdateOutcome::Applied => println!("Updated {}", short_id(id)),
                UpdateOutcome::Rejected => bail!("title cannot be empty"),
            }
        }
        Command::Rm { ids } => {
            if ids.is_empty() {
                bail!("nothing to delete");
            }
            for raw in ids {
                let id = resolve_id(&service, &raw)?;
                service.delete_task(id)?;
                println!("Deleted {}", short_id(id));
            }
        }
        Command::Refresh => {
            thread::sleep(Duration::from_millis(service.refresh()));
            println!("Up to date.");
        }
        Command::Seed => seed_demo_data(&SqliteTaskRepository::new(&conn), &prefs_repo)?,
    }

    Ok(())
}

fn default_db_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "todolist")
        .context("could not determine a data directory for this platform")?;
    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("creating {}", data_dir.display()))?;
    Ok(data_dir.join("todolist.db"))
}

/// Merges persisted preferences with command-line overrides and writes the
/// result back, mirroring how the original UI remembered its last state.
fn resolve_query(
    prefs_repo: &SqlitePrefsRepository<'_>,
    filter: Option<String>,
    sort: Option<String>,
    search: Option<String>,
) -> Result<VisibleQuery> {
    let mut prefs = prefs_repo.load()?;

    if let Some(raw) = filter {
        prefs.filter = parse_status_filter(&raw)
            .with_context(|| format!("unknown filter `{raw}`; expected all|active|completed"))?;
    }
    if let Some(raw) = sort {
        prefs.sort = parse_sort_option(&raw).with_context(|| {
            format!("unknown sort `{raw}`; expected newest|oldest|title_az|title_za")
        })?;
    }
    if let Some(raw) = search {
        prefs.search = raw;
    }

    prefs_repo.store(&prefs)?;

    Ok(VisibleQuery {
        filter: prefs.filter,
        search: prefs.search,
        sort: prefs.sort,
    })
}

fn list_tasks<R: TaskRepository, F: FeedbackSink>(
    service: &TaskService<R, F>,
    query: &VisibleQuery,
    more: u32,
    all: bool,
) -> Result<()> {
    let tasks = service.list_tasks()?;
    let visible = visible_tasks(&tasks, query);

    if visible.is_empty() {
        println!("No tasks. Try a different filter or search.");
        return Ok(());
    }

    let mut pager = Pager::new();
    pager.sync(visible.len());
    if all {
        while pager.advance(visible.len()) {
            pager.settle();
        }
    } else {
        for _ in 0..more {
            if !pager.advance(visible.len()) {
                break;
            }
            thread::sleep(Duration::from_millis(SETTLE_DELAY_MS));
            pager.settle();
        }
    }

    println!(
        "filter={} sort={} search={:?}",
        status_filter_as_str(query.filter),
        sort_option_as_str(query.sort),
        query.search.trim()
    );
    for task in pager.page(&visible) {
        print_task(task);
    }

    let shown = pager.page(&visible).len();
    if pager.has_more(visible.len()) {
        println!(
            "... {} of {} shown (run with --more 1 to load the next page)",
            shown,
            visible.len()
        );
    }

    Ok(())
}

fn print_task(task: &Task) {
    let marker = if task.is_done { "[x]" } else { "[ ]" };
    match &task.notes {
        Some(notes) => println!("{marker} {} {} - {notes}", short_id(task.id), task.title),
        None => println!("{marker} {} {}", short_id(task.id), task.title),
    }
}

fn short_id(id: TaskId) -> String {
    id.to_string()[..8].to_string()
}

/// Resolves a full or prefix task ID against the store.
fn resolve_id<R: TaskRepository, F: FeedbackSink>(
    service: &TaskService<R, F>,
    raw: &str,
) -> Result<TaskId> {
    let needle = raw.trim().to_lowercase();
    if needle.is_empty() {
        bail!("empty task id");
    }

    let matches: Vec<TaskId> = service
        .list_tasks()?
        .iter()
        .map(|task| task.id)
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => bail!("no task matches id `{raw}`"),
        _ => bail!("id `{raw}` is ambiguous; give more characters"),
    }
}

/// Seeds 100 demo tasks, one hour apart going back in time, exactly once.
fn seed_demo_data(
    repo: &SqliteTaskRepository<'_>,
    prefs_repo: &SqlitePrefsRepository<'_>,
) -> Result<()> {
    let mut prefs = prefs_repo.load()?;

    if prefs.seeded {
        println!("Demo data was already seeded.");
        return Ok(());
    }
    if !repo.list_all()?.is_empty() {
        bail!("store is not empty; refusing to seed demo data");
    }

    let now = now_epoch_ms();
    for i in 1..=100i64 {
        let created_at = now - i * 3_600_000;
        let task = Task::new(&format!("Task {i}"), None, false, created_at)
            .context("demo titles are never blank")?;
        repo.insert(&task)?;
    }

    prefs.seeded = true;
    prefs_repo.store(&prefs)?;
    println!("Seeded 100 demo tasks.");

    Ok(())
}
