use chrono::{DateTime, Utc};
use crossterm::event::{KeyEvent, MouseEvent};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::joke::JokeGateway;
use crate::session::{load_session, system_clock, Clock, PersistHandle};
use crate::storage::KeyValueStore;
use crate::ui::events::AppEvent;
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::mvi::Reducer;
use crate::ui::tracker::{
    ConfirmChoice, ResetDialogState, TrackerIntent, TrackerReducer, TrackerState,
};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The session tracker view.
///
/// Owns the tracker state and performs the side effects that follow each
/// transition: writes go to the ordered writer task, loads and joke requests
/// run on the tokio runtime and report back through the event channel.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    animation_tick: u8,
    load_started: bool,
    tracker: TrackerState,
    store: Arc<dyn KeyValueStore>,
    persist: PersistHandle,
    jokes: Arc<dyn JokeGateway>,
    runtime: Handle,
    events: Sender<AppEvent>,
    clock: Clock,
}

impl App {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        jokes: Arc<dyn JokeGateway>,
        runtime: Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        let persist = PersistHandle::spawn(Arc::clone(&store), &runtime);
        Self {
            should_quit: false,
            size: None,
            animation_tick: 0,
            load_started: false,
            tracker: TrackerState::default(),
            store,
            persist,
            jokes,
            runtime,
            events,
            clock: system_clock(),
        }
    }

    /// Replace the wall clock, e.g. with a fixed instant in tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn tracker(&self) -> &TrackerState {
        &self.tracker
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn elapsed_text(&self) -> String {
        self.tracker.elapsed_text(self.now())
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Header status: loading indicator until the session is read.
    pub fn status_text(&self) -> Option<&'static str> {
        if self.tracker.is_ready() {
            None
        } else {
            Some("Loading…")
        }
    }

    /// Read the stored session. Only the first call does anything.
    pub fn start(&mut self) {
        if self.load_started {
            return;
        }
        self.load_started = true;

        let store = Arc::clone(&self.store);
        let events = self.events.clone();
        let now = self.now();
        self.runtime.spawn(async move {
            let loaded = load_session(store.as_ref(), now).await;
            let _ = events.send(AppEvent::SessionLoaded(loaded));
        });
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Mouse(mouse) => self.on_mouse(mouse),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::SessionLoaded(loaded) => {
                dispatch_mvi!(self, tracker, TrackerReducer, TrackerIntent::Loaded(loaded));
            }
            AppEvent::JokeFinished(Ok(text)) => {
                dispatch_mvi!(self, tracker, TrackerReducer, TrackerIntent::JokeReceived { text });
            }
            AppEvent::JokeFinished(Err(err)) => {
                tracing::error!(error = %err, "Error generating joke");
                dispatch_mvi!(self, tracker, TrackerReducer, TrackerIntent::JokeFailed);
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        handle_key(self, key);
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        handle_mouse(self, mouse);
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Count one more beer and persist the new total.
    pub fn add_beer(&mut self) {
        let before = self.tracker.count;
        dispatch_mvi!(self, tracker, TrackerReducer, TrackerIntent::AddBeer);
        if self.tracker.count != before {
            self.persist.save_count(self.tracker.count);
        }
    }

    /// Open the reset prompt.
    pub fn request_reset(&mut self) {
        dispatch_mvi!(self, tracker, TrackerReducer, TrackerIntent::RequestReset);
    }

    pub fn toggle_reset_choice(&mut self) {
        dispatch_mvi!(self, tracker, TrackerReducer, TrackerIntent::ToggleResetChoice);
    }

    /// Activate whichever choice is highlighted in the reset prompt.
    pub fn answer_selected_reset(&mut self) {
        if let ResetDialogState::Visible { selected } = self.tracker.reset_dialog {
            self.answer_reset(selected);
        }
    }

    pub fn answer_reset(&mut self, choice: ConfirmChoice) {
        match choice {
            ConfirmChoice::Ok => self.confirm_reset(),
            ConfirmChoice::Cancel => self.cancel_reset(),
        }
    }

    /// Zero the count, restart the session, clear the joke, persist both values.
    pub fn confirm_reset(&mut self) {
        if !self.tracker.reset_dialog.is_visible() {
            return;
        }
        let now = self.now();
        dispatch_mvi!(self, tracker, TrackerReducer, TrackerIntent::ConfirmReset { now });
        self.persist.save_count(self.tracker.count);
        self.persist.save_start_time(now);
        tracing::info!(start_time = %now, "Session reset");
    }

    pub fn cancel_reset(&mut self) {
        dispatch_mvi!(self, tracker, TrackerReducer, TrackerIntent::CancelReset);
    }

    /// Fire a joke request. Earlier requests are not cancelled; whichever
    /// settles last is what stays on screen.
    pub fn request_joke(&mut self) {
        let before = self.tracker.pending_jokes;
        dispatch_mvi!(self, tracker, TrackerReducer, TrackerIntent::JokeRequested);
        if self.tracker.pending_jokes == before {
            return;
        }

        let jokes = Arc::clone(&self.jokes);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = jokes.fetch_joke().await;
            let _ = events.send(AppEvent::JokeFinished(result));
        });
    }

    /// Block until every queued write has been attempted.
    pub fn flush_writes(&self) {
        self.runtime.block_on(self.persist.flush());
    }
}
