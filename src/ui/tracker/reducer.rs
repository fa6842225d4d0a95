use crate::joke::FALLBACK_JOKE;
use crate::ui::mvi::Reducer;

use super::intent::TrackerIntent;
use super::state::{ConfirmChoice, LoadPhase, ResetDialogState, TrackerState};

pub struct TrackerReducer;

impl Reducer for TrackerReducer {
    type State = TrackerState;
    type Intent = TrackerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TrackerIntent::Loaded(loaded) => match state.phase {
                LoadPhase::Loading => TrackerState {
                    phase: LoadPhase::Ready,
                    count: loaded.count,
                    start_time: loaded.start_time,
                    ..state
                },
                // Initialisation runs once per view
                LoadPhase::Ready => state,
            },

            TrackerIntent::AddBeer => {
                if !state.is_ready() || state.reset_dialog.is_visible() {
                    return state;
                }
                TrackerState {
                    count: state.count.saturating_add(1),
                    ..state
                }
            }

            TrackerIntent::RequestReset => {
                if !state.is_ready() || state.reset_dialog.is_visible() {
                    return state;
                }
                TrackerState {
                    reset_dialog: ResetDialogState::Visible {
                        selected: ConfirmChoice::Cancel,
                    },
                    ..state
                }
            }

            TrackerIntent::ToggleResetChoice => match state.reset_dialog {
                ResetDialogState::Visible { selected } => TrackerState {
                    reset_dialog: ResetDialogState::Visible {
                        selected: selected.other(),
                    },
                    ..state
                },
                ResetDialogState::Hidden => state,
            },

            TrackerIntent::ConfirmReset { now } => match state.reset_dialog {
                ResetDialogState::Visible { .. } => TrackerState {
                    count: 0,
                    start_time: Some(now),
                    joke: String::new(),
                    reset_dialog: ResetDialogState::Hidden,
                    ..state
                },
                ResetDialogState::Hidden => state,
            },

            TrackerIntent::CancelReset => TrackerState {
                reset_dialog: ResetDialogState::Hidden,
                ..state
            },

            TrackerIntent::JokeRequested => {
                if state.reset_dialog.is_visible() {
                    return state;
                }
                TrackerState {
                    pending_jokes: state.pending_jokes.saturating_add(1),
                    ..state
                }
            }

            TrackerIntent::JokeReceived { text } => TrackerState {
                joke: text,
                pending_jokes: state.pending_jokes.saturating_sub(1),
                ..state
            },

            TrackerIntent::JokeFailed => TrackerState {
                joke: FALLBACK_JOKE.to_string(),
                pending_jokes: state.pending_jokes.saturating_sub(1),
                ..state
            },
        }
    }
}
