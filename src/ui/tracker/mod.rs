//! The tracker screen.
//!
//! - `state.rs` - count, session start, joke and dialog state
//! - `intent.rs` - user actions and background results
//! - `reducer.rs` - state transitions
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::TrackerIntent;
pub use reducer::TrackerReducer;
pub use state::{ConfirmChoice, LoadPhase, ResetDialogState, TrackerState};
pub use view::{render_body, render_reset_dialog};
