//! Shared test utilities: a driven `App`, stub gateways, a mock joke server.

#![allow(dead_code, unused_imports)]

pub mod mock_joke_server;

use async_trait::async_trait;
use beer_tracker::joke::{JokeError, JokeGateway};
use beer_tracker::session::Clock;
use beer_tracker::storage::{KeyValueStore, MemoryStore};
use beer_tracker::ui::app::App;
use beer_tracker::ui::events::AppEvent;
use chrono::{DateTime, Duration, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Runtime;

/// Fixed starting instant for every test clock.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

/// Clock that only moves when told to.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(now)))
    }

    pub fn now(&self) -> DateTime<Utc> {
        *self.0.lock()
    }

    pub fn advance(&self, by: Duration) {
        *self.0.lock() += by;
    }

    pub fn as_clock(&self) -> Clock {
        let inner = Arc::clone(&self.0);
        Arc::new(move || *inner.lock())
    }
}

// -- Joke gateway stubs -------------------------------------------------------

/// Gateway that always answers the same way and counts calls.
pub struct StubJokes {
    outcome: Result<String, u16>,
    calls: AtomicUsize,
}

impl StubJokes {
    pub fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(status),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JokeGateway for StubJokes {
    async fn fetch_joke(&self) -> Result<String, JokeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(JokeError::ApiError {
                status: *status,
                message: "stub failure".to_string(),
            }),
        }
    }
}

// -- App harness --------------------------------------------------------------

/// An `App` wired to a memory store, a stub gateway and a manual clock,
/// with the event channel exposed so tests can pump background results.
pub struct Harness {
    pub app: App,
    pub rx: Receiver<AppEvent>,
    pub store: MemoryStore,
    pub clock: ManualClock,
    pub runtime: Runtime,
}

impl Harness {
    pub fn new(store: MemoryStore, jokes: Arc<dyn JokeGateway>) -> Self {
        let runtime = Runtime::new().expect("runtime");
        let (tx, rx) = mpsc::channel();
        let clock = ManualClock::new(t0());
        let shared: Arc<dyn KeyValueStore> = Arc::new(store.clone());
        let app = App::new(shared, jokes, runtime.handle().clone(), tx).with_clock(clock.as_clock());
        Self {
            app,
            rx,
            store,
            clock,
            runtime,
        }
    }

    /// Harness whose session has already been loaded.
    pub fn loaded(store: MemoryStore, jokes: Arc<dyn JokeGateway>) -> Self {
        let mut harness = Self::new(store, jokes);
        harness.app.start();
        assert!(harness.pump_until(|app| app.tracker().is_ready()), "session never loaded");
        harness
    }

    /// Feed channel events into the app until `done` holds or 5s pass.
    pub fn pump_until(&mut self, done: impl Fn(&App) -> bool) -> bool {
        let deadline = Instant::now() + std::time::Duration::from_secs(5);
        while !done(&self.app) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            if let Ok(event) = self.rx.recv_timeout(remaining.min(std::time::Duration::from_millis(50))) {
                self.app.handle_event(event);
            }
        }
        true
    }

    pub fn press(&mut self, code: KeyCode) {
        self.app.handle_event(AppEvent::Key(key(code)));
    }

    pub fn click(&mut self, column: u16, row: u16) {
        self.app.handle_event(AppEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    pub fn flush(&self) {
        self.app.flush_writes();
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}
