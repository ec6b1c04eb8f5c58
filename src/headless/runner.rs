//! Headless mode runner - event loop without TUI

use std::io::{self, BufRead, Write};

use nird_app::config::Settings;
use nird_app::{signals, Engine, Message};
use nird_core::prelude::*;
use nird_core::Profile;
use tokio::sync::mpsc;

use super::HeadlessEvent;

/// Capacity of the stdin line channel
const STDIN_CHANNEL_CAPACITY: usize = 64;

/// One stdin line, parsed on the reader thread
///
/// Commands and rejections share this channel so their events reach stdout
/// in the order the lines were written.
#[derive(Debug)]
enum StdinInput {
    Command(Message),
    Rejected(Error),
    Closed,
}

/// Run in headless mode: commands from stdin, JSON events on stdout
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("Starting in headless mode");

    let mut engine = Engine::new(settings);
    signals::spawn_signal_handler(engine.msg_sender());

    let (stdin_tx, mut stdin_rx) = mpsc::channel(STDIN_CHANNEL_CAPACITY);
    std::thread::spawn(move || read_commands(io::stdin().lock(), stdin_tx));

    let mut out = io::stdout();
    report(&mut out, HeadlessEvent::started());
    report(&mut out, HeadlessEvent::state(&engine.state));

    let result = headless_event_loop(&mut engine, &mut stdin_rx, &mut out).await;

    engine.shutdown();
    report(&mut out, HeadlessEvent::stopped(&engine.state));

    info!("Headless mode exiting");
    result
}

/// Main headless event loop
///
/// Engine messages (deferred advances, signals) and stdin lines are handled
/// one at a time; a `state` event follows every processed message.
async fn headless_event_loop<W: Write>(
    engine: &mut Engine,
    stdin_rx: &mut mpsc::Receiver<StdinInput>,
    out: &mut W,
) -> Result<()> {
    let mut stdin_open = true;

    while !engine.should_quit() {
        tokio::select! {
            msg = engine.msg_rx.recv() => match msg {
                Some(msg) => process(engine, msg, out),
                None => {
                    info!("Message channel closed");
                    break;
                }
            },
            input = stdin_rx.recv(), if stdin_open => match input {
                Some(StdinInput::Command(msg)) => process(engine, msg, out),
                Some(StdinInput::Rejected(e)) => report(out, HeadlessEvent::error(&e)),
                Some(StdinInput::Closed) | None => {
                    // EOF: let a pending transition land before quitting
                    stdin_open = false;
                    process(engine, Message::QuitWhenIdle, out);
                }
            },
        }
    }
    Ok(())
}

fn process<W: Write>(engine: &mut Engine, msg: Message, out: &mut W) {
    engine.process_message(msg);
    report(out, HeadlessEvent::state(&engine.state));
}

fn report<W: Write>(out: &mut W, event: HeadlessEvent) {
    if let Err(e) = event.write_to(out) {
        error!("Failed to write headless event: {}", e);
    }
}

/// Parse one stdin line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Message>> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();
    if words.next().is_some() {
        return Err(Error::invalid_command(format!(
            "too many arguments: {}",
            line.trim()
        )));
    }

    let message = match (command, argument) {
        ("advance" | "next" | "n", None) => Message::Advance,
        ("retreat" | "back" | "b", None) => Message::Retreat,
        ("jump", Some(index)) => {
            let index = index.parse::<usize>().map_err(|_| {
                Error::invalid_command(format!("jump expects a step index, got '{}'", index))
            })?;
            Message::JumpTo(index)
        }
        ("restart", None) => Message::Restart,
        ("theme", None) => Message::ToggleTheme,
        ("profile", Some(id)) => Message::SelectProfile(id.parse::<Profile>()?),
        ("overlay", Some("on")) => Message::SetOverlay(true),
        ("overlay", Some("off")) => Message::SetOverlay(false),
        ("quit" | "q", None) => Message::Quit,
        _ => {
            return Err(Error::invalid_command(format!(
                "unknown command: {}",
                line.trim()
            )))
        }
    };
    Ok(Some(message))
}

/// Blocking line reader, run on its own thread
fn read_commands<R: BufRead>(reader: R, tx: mpsc::Sender<StdinInput>) {
    for line in reader.lines() {
        let input = match line {
            Ok(line) => match parse_command(&line) {
                Ok(Some(message)) => {
                    debug!("Stdin command: {:?}", message);
                    StdinInput::Command(message)
                }
                Ok(None) => continue,
                Err(e) => {
                    warn!("Rejected stdin command: {}", e);
                    StdinInput::Rejected(e)
                }
            },
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                let _ = tx.blocking_send(StdinInput::Rejected(e.into()));
                break;
            }
        };

        let quitting = matches!(input, StdinInput::Command(Message::Quit));
        if tx.blocking_send(input).is_err() || quitting {
            return;
        }
    }

    info!("Stdin closed");
    let _ = tx.blocking_send(StdinInput::Closed);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<Message> {
        parse_command(line).unwrap()
    }

    #[test]
    fn test_navigation_commands() {
        for line in ["advance", "next", "n"] {
            assert_eq!(parse(line), Some(Message::Advance));
        }
        for line in ["retreat", "back", "b"] {
            assert_eq!(parse(line), Some(Message::Retreat));
        }
        assert_eq!(parse("jump 3"), Some(Message::JumpTo(3)));
        assert_eq!(parse("jump 42"), Some(Message::JumpTo(42)));
        assert_eq!(parse("restart"), Some(Message::Restart));
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(parse("theme"), Some(Message::ToggleTheme));
        assert_eq!(
            parse("profile school"),
            Some(Message::SelectProfile(Profile::School))
        );
        assert_eq!(parse("overlay on"), Some(Message::SetOverlay(true)));
        assert_eq!(parse("overlay off"), Some(Message::SetOverlay(false)));
        assert_eq!(parse("quit"), Some(Message::Quit));
        assert_eq!(parse("q"), Some(Message::Quit));
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("  profile   teacher  "), Some(Message::SelectProfile(Profile::Teacher)));
    }

    #[test]
    fn test_unknown_profile_is_error() {
        let err = parse_command("profile parent").unwrap_err();
        assert!(matches!(err, Error::UnknownProfile { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_invalid_commands() {
        for line in ["fly", "jump", "jump -1", "jump two", "overlay maybe", "advance now", "theme dark x"] {
            let err = parse_command(line).unwrap_err();
            assert!(
                matches!(err, Error::InvalidCommand { .. }),
                "{line}: {err}"
            );
        }
    }

    /// Feed `input` through the reader thread and the event loop, returning
    /// the NDJSON events written
    async fn run_script(input: &'static str) -> Vec<serde_json::Value> {
        let mut engine = Engine::new(Settings::default());
        let (tx, mut rx) = mpsc::channel(STDIN_CHANNEL_CAPACITY);
        let reader = std::thread::spawn(move || read_commands(io::Cursor::new(input), tx));

        let mut out = Vec::new();
        headless_event_loop(&mut engine, &mut rx, &mut out)
            .await
            .unwrap();
        reader.join().unwrap();

        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_rejections_keep_input_order() {
        let events = run_script("next\nfly\ntheme\njump x\nback\n").await;
        let kinds: Vec<&str> = events
            .iter()
            .map(|e| e["event"].as_str().unwrap())
            .collect();

        // One state per command, the errors where their lines were, and a
        // final state for end of input
        assert_eq!(
            kinds,
            vec!["state", "error", "state", "error", "state", "state"]
        );
        assert_eq!(events[0]["step"], 1);
        assert!(events[1]["message"].as_str().unwrap().contains("fly"));
        assert_eq!(events[1]["fatal"], false);
        assert_eq!(events[2]["theme"], "light");
        assert!(events[3]["message"].as_str().unwrap().contains("jump"));
        assert_eq!(events[4]["step"], 0);
    }

    #[tokio::test]
    async fn test_quit_command_stops_reading() {
        let events = run_script("quit\nnext\n").await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["step"], 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_of_input_waits_for_pending_advance() {
        let events = run_script("next\nprofile teacher\n").await;
        let last = events.last().unwrap();
        assert_eq!(last["step"], 2);
        assert_eq!(last["pending_advance"], false);
        assert_eq!(last["bundle"], "Ressources pédagogiques NIRD");
    }
}
