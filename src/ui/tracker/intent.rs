use chrono::{DateTime, Utc};

use crate::session::LoadedSession;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TrackerIntent {
    /// Stored session finished loading.
    Loaded(LoadedSession),
    /// Primary action: one more beer.
    AddBeer,
    /// Open the reset confirmation.
    RequestReset,
    /// Move the highlighted choice in the reset prompt.
    ToggleResetChoice,
    /// Reset confirmed at `now`.
    ConfirmReset { now: DateTime<Utc> },
    /// Reset prompt dismissed.
    CancelReset,
    /// A joke request was sent.
    JokeRequested,
    /// A joke request came back with text.
    JokeReceived { text: String },
    /// A joke request failed.
    JokeFailed,
}

impl Intent for TrackerIntent {}
