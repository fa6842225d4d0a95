use chrono::{DateTime, Utc};

use crate::session::format_elapsed;
use crate::ui::mvi::UiState;

/// Whether the persisted session has been read yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

/// The two answers of the reset prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
    #[default]
    Cancel,
    Ok,
}

impl ConfirmChoice {
    pub fn other(self) -> Self {
        match self {
            Self::Cancel => Self::Ok,
            Self::Ok => Self::Cancel,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cancel => "Cancel",
            Self::Ok => "OK",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetDialogState {
    #[default]
    Hidden,
    Visible { selected: ConfirmChoice },
}

impl ResetDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackerState {
    pub phase: LoadPhase,
    pub count: u64,
    pub start_time: Option<DateTime<Utc>>,
    /// Empty means there is no joke to show.
    pub joke: String,
    /// Joke requests that have not settled yet.
    pub pending_jokes: u32,
    pub reset_dialog: ResetDialogState,
}

impl UiState for TrackerState {}

impl TrackerState {
    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    pub fn elapsed_text(&self, now: DateTime<Utc>) -> String {
        format_elapsed(self.start_time, now)
    }

    pub fn has_joke(&self) -> bool {
        !self.joke.is_empty()
    }

    pub fn is_fetching_joke(&self) -> bool {
        self.pending_jokes > 0
    }
}
