//! Main TUI runner - entry point and event loop

use nird_app::config::Settings;
use nird_app::{signals, Engine};
use nird_core::prelude::*;

use super::{event, render, terminal};

/// Run the wizard in the terminal until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    info!(
        "Starting TUI (theme={}, selection_delay={}ms)",
        settings.ui.theme,
        settings.behavior.selection_delay().as_millis()
    );

    let mut term = terminal::init()?;
    let mut engine = Engine::new(settings);

    // SIGINT/SIGTERM become Message::Quit
    signals::spawn_signal_handler(engine.msg_sender());

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();

    if let Err(e) = terminal::restore() {
        error!("Failed to restore terminal: {}", e);
    }

    result
}

/// Main event loop
fn run_loop(term: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Deferred transitions and signals arrive on the channel
        engine.drain_pending_messages();

        term.draw(|frame| render::view(frame, &mut engine.state))
            .map_err(|e| Error::terminal(format!("Failed to draw frame: {}", e)))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Quit requested");
    Ok(())
}
