//! Incremental pagination cursor over the visible set.
//!
//! # Responsibility
//! - Track how many visible tasks the consumer currently sees.
//! - Gate advance requests through an explicit idle/loading state machine.
//!
//! # Invariants
//! - `0 <= items_to_show <= visible length` after every [`Pager::sync`].
//! - No advance fires while a previous advance is still settling.
//! - No transition fires when the whole sequence is already shown.
//!
//! The settle delay is a driver concern: core state changes are instant and
//! deterministic, callers decide when [`Pager::settle`] runs. A stale settle
//! after a reset is harmless because it only clears the loading flag.

/// Number of additional tasks revealed per page advance.
pub const PAGE_SIZE: usize = 15;

/// Fixed settle delay (milliseconds) a driver should wait after an advance
/// before clearing its loading indicator.
pub const SETTLE_DELAY_MS: u64 = 200;

/// Fixed delay (milliseconds) for the dummy pull-to-refresh gesture. Data is
/// local, so refresh performs no work beyond the pause.
pub const REFRESH_DELAY_MS: u64 = 600;

/// Pagination cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    Idle,
    Loading,
}

/// Pagination cursor over a visible task sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    items_to_show: usize,
    state: PagerState,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    /// Creates a cursor showing the first page.
    pub fn new() -> Self {
        Self {
            items_to_show: PAGE_SIZE,
            state: PagerState::Idle,
        }
    }

    /// Current cursor position.
    pub fn items_to_show(&self) -> usize {
        self.items_to_show
    }

    /// Current state machine state.
    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Whether an advance is still settling.
    pub fn is_loading(&self) -> bool {
        self.state == PagerState::Loading
    }

    /// Whether more of the sequence remains beyond the current page.
    pub fn has_more(&self, visible_len: usize) -> bool {
        self.items_to_show < visible_len
    }

    /// Prefix of the visible sequence currently shown.
    pub fn page<'a, T>(&self, visible: &'a [T]) -> &'a [T] {
        &visible[..self.items_to_show.min(visible.len())]
    }

    /// Re-clamps the cursor after the visible sequence changed in place
    /// (task added, deleted, or edited without a filter/sort/search change).
    ///
    /// The cursor is confined to `[min(PAGE_SIZE, len), len]`: it never
    /// exceeds the sequence, and a sequence that regrows shows a full first
    /// page again instead of staying stuck at an old clamp.
    pub fn sync(&mut self, visible_len: usize) {
        let floor = PAGE_SIZE.min(visible_len);
        self.items_to_show = self.items_to_show.clamp(floor, visible_len);
    }

    /// Resets the cursor to the first page.
    ///
    /// Triggered whenever filter, search, or sort changes: the derived
    /// sequence is a different one, so the old position is meaningless.
    pub fn reset(&mut self) {
        self.items_to_show = PAGE_SIZE;
        self.state = PagerState::Idle;
    }

    /// Requests one page advance.
    ///
    /// Fires only when idle and more items remain; the cursor grows by
    /// [`PAGE_SIZE`] capped at `visible_len` and the pager enters `Loading`
    /// until [`Pager::settle`] runs. Returns whether the advance fired, so
    /// both triggers (last row became visible, explicit load-more) share this
    /// one entry point.
    pub fn advance(&mut self, visible_len: usize) -> bool {
        if self.state == PagerState::Loading || !self.has_more(visible_len) {
            return false;
        }

        self.items_to_show = (self.items_to_show + PAGE_SIZE).min(visible_len);
        self.state = PagerState::Loading;
        true
    }

    /// Clears the loading flag once the settle delay elapsed.
    ///
    /// Idempotent: stale completions after a reset are no-ops.
    pub fn settle(&mut self) {
        self.state = PagerState::Idle;
    }
}
