//! Loading the session from storage and writing changes back in order.

use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};

use crate::storage::{KeyValueStore, BEER_COUNT_KEY, START_TIME_KEY};

/// Values recovered from storage on first display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedSession {
    pub count: u64,
    /// `None` only when the start time could not be read at all.
    pub start_time: Option<DateTime<Utc>>,
}

/// Parse a stored beer count.
pub fn decode_count(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Parse a stored RFC 3339 session start.
pub fn decode_start_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Encode a session start as `2024-01-01T12:00:00.000Z`.
pub fn encode_start_time(start: DateTime<Utc>) -> String {
    start.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Read the count and session start, initialising the start if absent.
///
/// Never fails: read errors are logged and replaced by defaults. A missing
/// or unparseable start time becomes `now` and is written back before
/// returning. A start time whose read failed stays unset so a valid stored
/// value is not overwritten.
pub async fn load_session(store: &dyn KeyValueStore, now: DateTime<Utc>) -> LoadedSession {
    let count = match store.get(BEER_COUNT_KEY).await {
        Ok(Some(raw)) => decode_count(&raw).unwrap_or_else(|| {
            tracing::warn!(key = BEER_COUNT_KEY, value = %raw, "Ignoring malformed stored count");
            0
        }),
        Ok(None) => 0,
        Err(err) => {
            tracing::error!(key = BEER_COUNT_KEY, error = %err, "Error loading data");
            0
        }
    };

    let start_time = match store.get(START_TIME_KEY).await {
        Ok(Some(raw)) => match decode_start_time(&raw) {
            Some(start) => Some(start),
            None => {
                tracing::warn!(key = START_TIME_KEY, value = %raw, "Ignoring malformed stored start time");
                Some(start_fresh(store, now).await)
            }
        },
        Ok(None) => Some(start_fresh(store, now).await),
        Err(err) => {
            tracing::error!(key = START_TIME_KEY, error = %err, "Error loading data");
            None
        }
    };

    tracing::info!(count, start_time = ?start_time, "Session loaded");
    LoadedSession { count, start_time }
}

async fn start_fresh(store: &dyn KeyValueStore, now: DateTime<Utc>) -> DateTime<Utc> {
    if let Err(err) = store.set(START_TIME_KEY, &encode_start_time(now)).await {
        tracing::error!(key = START_TIME_KEY, error = %err, "Error saving data");
    }
    now
}

enum PersistCommand {
    Write { key: &'static str, value: String },
    Flush(oneshot::Sender<()>),
}

/// Handle to the single writer task.
///
/// Writes are applied strictly in the order they were issued, so the last
/// write to land is always the last one requested. Failed writes are logged
/// and dropped.
#[derive(Clone)]
pub struct PersistHandle {
    tx: mpsc::UnboundedSender<PersistCommand>,
}

impl PersistHandle {
    /// Spawn the writer task on `runtime`.
    pub fn spawn(store: Arc<dyn KeyValueStore>, runtime: &Handle) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<PersistCommand>();

        runtime.spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    PersistCommand::Write { key, value } => match store.set(key, &value).await {
                        Ok(()) => tracing::debug!(key, value = %value, "Saved"),
                        Err(err) => tracing::error!(key, error = %err, "Error saving data"),
                    },
                    PersistCommand::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
        });

        Self { tx }
    }

    pub fn save_count(&self, count: u64) {
        self.write(BEER_COUNT_KEY, count.to_string());
    }

    pub fn save_start_time(&self, start: DateTime<Utc>) {
        self.write(START_TIME_KEY, encode_start_time(start));
    }

    /// Wait until every write issued before this call has been attempted.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(PersistCommand::Flush(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }

    fn write(&self, key: &'static str, value: String) {
        if self.tx.send(PersistCommand::Write { key, value }).is_err() {
            tracing::error!(key, "Writer task has stopped; dropping write");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn encodes_with_millis_and_z() {
        assert_eq!(encode_start_time(now()), "2024-01-01T12:00:00.000Z");
    }

    #[test]
    fn decodes_offset_timestamps_to_utc() {
        let decoded = decode_start_time("2024-01-01T14:00:00+02:00").unwrap();
        assert_eq!(decoded, now());
    }

    #[test]
    fn decode_count_rejects_garbage() {
        assert_eq!(decode_count(" 12 "), Some(12));
        assert_eq!(decode_count("-1"), None);
        assert_eq!(decode_count("abc"), None);
    }

    #[tokio::test]
    async fn empty_store_initialises_start_time() {
        let store = MemoryStore::new();
        let loaded = load_session(&store, now()).await;

        assert_eq!(loaded.count, 0);
        assert_eq!(loaded.start_time, Some(now()));
        assert_eq!(
            store.value(START_TIME_KEY).as_deref(),
            Some("2024-01-01T12:00:00.000Z")
        );
        assert_eq!(store.value(BEER_COUNT_KEY), None);
    }

    #[tokio::test]
    async fn stored_values_are_restored() {
        let store = MemoryStore::with_entries([
            (BEER_COUNT_KEY, "5"),
            (START_TIME_KEY, "2023-12-31T20:30:00.000Z"),
        ]);
        let loaded = load_session(&store, now()).await;

        assert_eq!(loaded.count, 5);
        assert_eq!(
            loaded.start_time,
            Some(Utc.with_ymd_and_hms(2023, 12, 31, 20, 30, 0).unwrap())
        );
    }

    #[tokio::test]
    async fn malformed_start_time_is_replaced() {
        let store = MemoryStore::with_entries([(START_TIME_KEY, "yesterday")]);
        let loaded = load_session(&store, now()).await;

        assert_eq!(loaded.start_time, Some(now()));
        assert_eq!(
            store.value(START_TIME_KEY).as_deref(),
            Some("2024-01-01T12:00:00.000Z")
        );
    }

    #[tokio::test]
    async fn read_failure_leaves_start_unset() {
        let store = MemoryStore::with_entries([(START_TIME_KEY, "2023-12-31T20:30:00.000Z")]);
        store.set_fail_reads(true);
        let loaded = load_session(&store, now()).await;

        assert_eq!(loaded, LoadedSession { count: 0, start_time: None });
        assert_eq!(
            store.value(START_TIME_KEY).as_deref(),
            Some("2023-12-31T20:30:00.000Z")
        );
    }

    #[tokio::test]
    async fn writes_land_in_issue_order() {
        let store = MemoryStore::new();
        let handle = PersistHandle::spawn(Arc::new(store.clone()), &Handle::current());

        for count in 1..=20 {
            handle.save_count(count);
        }
        handle.flush().await;

        assert_eq!(store.value(BEER_COUNT_KEY).as_deref(), Some("20"));
    }

    #[tokio::test]
    async fn failed_writes_are_dropped() {
        let store = MemoryStore::new();
        let handle = PersistHandle::spawn(Arc::new(store.clone()), &Handle::current());

        store.set_fail_writes(true);
        handle.save_count(3);
        handle.flush().await;
        assert_eq!(store.value(BEER_COUNT_KEY), None);

        store.set_fail_writes(false);
        handle.save_count(4);
        handle.flush().await;
        assert_eq!(store.value(BEER_COUNT_KEY).as_deref(), Some("4"));
    }
}
