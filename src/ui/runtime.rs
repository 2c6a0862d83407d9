use std::sync::mpsc;
use std::time::Duration;

use crate::cli::Cli;
use crate::source;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::table::TableIntent;
use crate::ui::terminal_guard::setup_terminal;

/// Main UI loop. The caller must have entered a tokio runtime so the
/// loader task has somewhere to run.
pub fn run(cli: Cli) -> std::io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new();
    let events = EventHandler::new(tick_rate);

    source::spawn_loader(cli.url, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The terminal re-measures itself on the next draw.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::DatasetLoaded(campaigns)) => {
                app.dispatch(TableIntent::Loaded { campaigns })
            }
            Ok(AppEvent::FetchFailed(reason)) => app.dispatch(TableIntent::Failed { reason }),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
