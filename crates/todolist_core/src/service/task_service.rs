//! Task use-case service: validated create/update/toggle/delete.
//!
//! # Responsibility
//! - Enforce the single validation rule (non-empty trimmed title) before any
//!   mutation reaches the repository.
//! - Surface feedback side-effect points without owning their effects.
//!
//! # Invariants
//! - Rejected input is a silent no-op: nothing is persisted and no error is
//!   raised, the caller keeps the input for correction.
//! - Updates are all-or-nothing; a rejected update leaves the task untouched.
//! - Toggle always succeeds and strictly increases `updated_at`.

use crate::model::task::{now_epoch_ms, Task, TaskId};
use crate::query::pager::REFRESH_DELAY_MS;
use crate::repo::task_repo::{RepoError, RepoResult, TaskRepository};
use log::{debug, info};

/// Strength of a feedback impact, mirroring the usual light/medium haptics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Light,
    Medium,
}

/// Side-effect point for user-visible feedback (haptics, animation cues).
///
/// The effects themselves live with the presentation surface; the core only
/// decides when they fire.
pub trait FeedbackSink {
    /// A mutation completed in a way worth celebrating.
    fn success(&self);
    /// A mutation completed with a neutral thud.
    fn impact(&self, intensity: Intensity);
}

/// Default sink that swallows all feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn success(&self) {}
    fn impact(&self, _intensity: Intensity) {}
}

/// Outcome of a create attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Created(TaskId),
    /// Trimmed title was empty; the store is unchanged.
    Rejected,
}

/// Outcome of an update attempt on an existing task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Applied,
    /// Trimmed title was empty; the task is unchanged.
    Rejected,
}

/// Use-case service wrapper for task mutations.
pub struct TaskService<R: TaskRepository, F: FeedbackSink = NoFeedback> {
    repo: R,
    feedback: F,
}

impl<R: TaskRepository> TaskService<R, NoFeedback> {
    /// Creates a service with feedback disabled.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            feedback: NoFeedback,
        }
    }
}

impl<R: TaskRepository, F: FeedbackSink> TaskService<R, F> {
    /// Creates a service with an explicit feedback collaborator.
    pub fn with_feedback(repo: R, feedback: F) -> Self {
        Self { repo, feedback }
    }

    /// Adds a validated task to the store.
    ///
    /// An empty-after-trim title is rejected without touching the store.
    pub fn add_task(
        &self,
        title: &str,
        notes: Option<&str>,
        is_done: bool,
    ) -> RepoResult<AddOutcome> {
        let Some(task) = Task::new(title, notes, is_done, now_epoch_ms()) else {
            debug!("event=task_add module=service status=rejected reason=empty_title");
            return Ok(AddOutcome::Rejected);
        };

        self.repo.insert(&task)?;
        info!("event=task_add module=service status=ok id={}", task.id);
        self.feedback.success();
        Ok(AddOutcome::Created(task.id))
    }

    /// Overwrites title, notes and done flag of an existing task.
    ///
    /// Missing tasks are `RepoError::NotFound`; an empty-after-trim title is
    /// a rejection that leaves the task fully unchanged.
    pub fn update_task(
        &self,
        id: TaskId,
        title: &str,
        notes: Option<&str>,
        is_done: bool,
    ) -> RepoResult<UpdateOutcome> {
        let mut task = self.load(id)?;

        if !task.apply_update(title, notes, is_done, now_epoch_ms()) {
            debug!("event=task_update module=service status=rejected reason=empty_title id={id}");
            return Ok(UpdateOutcome::Rejected);
        }

        self.repo.update(&task)?;
        info!("event=task_update module=service status=ok id={id}");
        Ok(UpdateOutcome::Applied)
    }

    /// Flips the done flag and returns the stored task.
    pub fn toggle_done(&self, id: TaskId) -> RepoResult<Task> {
        let mut task = self.load(id)?;
        task.toggle_done(now_epoch_ms());
        self.repo.update(&task)?;

        info!(
            "event=task_toggle module=service status=ok id={id} is_done={}",
            task.is_done
        );
        if task.is_done {
            self.feedback.success();
        } else {
            self.feedback.impact(Intensity::Light);
        }
        Ok(task)
    }

    /// Deletes one task.
    pub fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        self.repo.delete(id)?;
        info!("event=task_delete module=service status=ok id={id}");
        self.feedback.impact(Intensity::Medium);
        Ok(())
    }

    /// Deletes tasks by their positions in the currently visible sequence
    /// (swipe-to-delete on a filtered list). Out-of-range offsets are
    /// ignored. Returns the number of removed rows.
    pub fn delete_visible_at(&self, offsets: &[usize], visible_ids: &[TaskId]) -> RepoResult<usize> {
        let targets: Vec<TaskId> = offsets
            .iter()
            .filter_map(|&offset| visible_ids.get(offset).copied())
            .collect();

        let removed = self.repo.delete_many(&targets)?;
        info!(
            "event=task_delete_many module=service status=ok requested={} removed={removed}",
            targets.len()
        );
        Ok(removed)
    }

    /// Full ordered snapshot for the visible-set engine.
    pub fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        self.repo.list_all()
    }

    /// Pull-to-refresh stand-in: data is local, so there is nothing to
    /// fetch. Returns the delay a driver should pause for to give the
    /// gesture visible weight.
    pub fn refresh(&self) -> u64 {
        debug!("event=refresh module=service status=ok delay_ms={REFRESH_DELAY_MS}");
        REFRESH_DELAY_MS
    }

    fn load(&self, id: TaskId) -> RepoResult<Task> {
        self.repo.get(id)?.ok_or(RepoError::NotFound(id))
    }
}
