//! Interactive chat event loop.
//!
//! Drives rendering, keyboard input and stream ticks from one
//! `tokio::select!` loop, so every message mutation happens here.

use std::time::Duration;

use anyhow::Result;
use aura_catalog::{Assistant, Model};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::info;

use crate::app::ChatApp;
use crate::terminal::AuraTerminal;
use crate::view;

/// Render cadence (~30 fps) for the pulse and cursor animations.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Runs the chat session until the user quits.
pub async fn run_chat(assistant: Assistant, model: Model, thinking: bool) -> Result<()> {
    let mut terminal = AuraTerminal::new()?;
    let mut app = ChatApp::new(assistant, model);
    if thinking {
        app.thinking.toggle();
    }
    info!(
        assistant = %app.assistant().name,
        model = %app.model().name,
        "chat session started"
    );

    let mut events = EventStream::new();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    let mut tick_rx: Option<mpsc::Receiver<()>> = None;

    loop {
        terminal.draw(|frame| view::draw(frame, &mut app))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => handle_key(&mut app, &mut tick_rx, key),
                    Some(Ok(Event::Paste(text))) => app.input.push_str(&text),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::error!(%err, "terminal event error");
                        app.should_quit = true;
                    }
                    None => app.should_quit = true,
                }
            }
            _ = frames.tick() => {
                app.frame = app.frame.wrapping_add(1);
            }
            tick = recv_tick(&mut tick_rx) => {
                match tick {
                    Some(()) => {
                        app.apply_tick();
                        if !app.is_streaming() {
                            tick_rx = None;
                        }
                    }
                    None => tick_rx = None,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!("chat session ended");
    Ok(())
}

/// Awaits the next stream tick, pending forever when no stream is
/// active so the select arm stays quiet.
async fn recv_tick(rx: &mut Option<mpsc::Receiver<()>>) -> Option<()> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

fn handle_key(app: &mut ChatApp, tick_rx: &mut Option<mpsc::Receiver<()>>, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::Char('t') if ctrl => app.toggle_thinking(),
        KeyCode::Char('e') if ctrl => app.toggle_last_thinking(),
        KeyCode::Enter => {
            if let Some(rx) = app.submit() {
                *tick_rx = Some(rx);
            }
        }
        KeyCode::Esc => {
            if app.is_streaming() {
                app.interrupt();
                *tick_rx = None;
            } else {
                app.should_quit = true;
            }
        }
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}
