//! Session domain: the tracked values, how they are encoded in storage,
//! and how they are loaded and written back.

mod elapsed;
mod persist;

pub use elapsed::format_elapsed;
pub use persist::{
    decode_count, decode_start_time, encode_start_time, load_session, LoadedSession, PersistHandle,
};

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of "now" for everything that stamps or measures the session.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Wall clock.
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}
