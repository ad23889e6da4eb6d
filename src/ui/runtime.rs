use crate::config::Config;
use crate::service::{ServiceDispatcher, SwitchService};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::selection::SelectionController;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use tokio::runtime::Handle;

/// Run the control surface until the operator quits or shutdown is signalled.
///
/// `service` must already have passed startup validation.
pub fn run(
    config: &Config,
    service: SwitchService,
    runtime: Handle,
    shutdown: ShutdownHandle,
) -> io::Result<()> {
    let tick_rate = config.ui.tick_rate();
    let initial = service.snapshot();
    let events = EventHandler::new(tick_rate, shutdown.clone());
    let dispatcher = ServiceDispatcher::new(service, runtime, events.sender());
    let controller = SelectionController::new(initial, dispatcher);
    let mut app = App::new(controller, config.ui.layout_width);

    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick | AppEvent::Resize) => {}
            Ok(AppEvent::Completion(completion)) => app.on_completion(completion),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
