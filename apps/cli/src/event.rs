use std::time::Duration;

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::runtime::SessionEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Session(SessionEvent),
    Tick,
    Resize,
}

/// Merges terminal input, the detector tick and session output into one
/// stream consumed by the task that owns the session.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(mut session_rx: mpsc::UnboundedReceiver<SessionEvent>, tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let input_tx = tx.clone();
        std::thread::spawn(move || {
            loop {
                let event = match crossterm::event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                    Ok(Event::Resize(..)) => AppEvent::Resize,
                    Ok(_) => continue,
                    Err(error) => {
                        tracing::error!(?error, "terminal_read_failed");
                        break;
                    }
                };
                if input_tx.send(event).is_err() {
                    break;
                }
            }
        });

        let tick_tx = tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tick_tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        tokio::spawn(async move {
            while let Some(event) = session_rx.recv().await {
                if tx.send(AppEvent::Session(event)).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}
