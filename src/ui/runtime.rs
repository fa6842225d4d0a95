use crate::config::UiConfig;
use crate::joke::JokeGateway;
use crate::storage::KeyValueStore;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the tracker until the user quits.
///
/// Drawing and state changes stay on this thread; gateway calls run on
/// `runtime`. Queued writes are flushed before returning.
pub fn run(
    config: &UiConfig,
    store: Arc<dyn KeyValueStore>,
    jokes: Arc<dyn JokeGateway>,
    runtime: Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(store, jokes, runtime, events.sender());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.handle_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.flush_writes();
    drop(guard);
    Ok(())
}
