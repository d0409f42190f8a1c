//! Event handling for the terminal client
//!
//! Terminal input is read on a dedicated thread because crossterm's read
//! is blocking; ticks come from a tokio interval. Both feed one channel
//! consumed by the application loop.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Events that can occur in the terminal client
#[derive(Debug, Clone)]
pub enum Event {
    /// Terminal input event (keyboard, mouse, etc.)
    Input(CrosstermEvent),
    /// Tick event for periodic updates
    Tick,
    /// Application should quit
    Quit,
    /// Error occurred
    Error(String),
}

/// Event handler for managing the event loop
pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
    cancellation_token: CancellationToken,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let cancellation_token = CancellationToken::new();

        Self {
            sender,
            receiver,
            cancellation_token,
        }
    }

    /// Start the input thread and the tick task
    pub fn run(&self) {
        let sender = self.sender.clone();
        let cancellation_token = self.cancellation_token.clone();

        std::thread::spawn(move || {
            Self::input_loop(sender, cancellation_token);
        });

        let sender = self.sender.clone();
        let cancellation_token = self.cancellation_token.clone();

        tokio::spawn(async move {
            let mut tick_interval = tokio::time::interval(Duration::from_millis(250));
            loop {
                tokio::select! {
                    _ = cancellation_token.cancelled() => break,
                    _ = tick_interval.tick() => {
                        if sender.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }

    /// Get the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }

    /// Cancel the event sources
    pub fn cancel(&self) {
        self.cancellation_token.cancel();
    }

    fn input_loop(sender: mpsc::UnboundedSender<Event>, cancellation_token: CancellationToken) {
        loop {
            if cancellation_token.is_cancelled() {
                break;
            }

            match event::poll(Duration::from_millis(100)) {
                Ok(false) => continue,
                Ok(true) => match event::read() {
                    Ok(evt) => {
                        if Self::should_quit(&evt) {
                            let _ = sender.send(Event::Quit);
                            break;
                        }
                        if sender.send(Event::Input(evt)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(Event::Error(e.to_string()));
                        break;
                    }
                },
                Err(e) => {
                    let _ = sender.send(Event::Error(e.to_string()));
                    break;
                }
            }
        }
    }

    /// Only Ctrl+C quits unconditionally; plain characters must stay
    /// available for text entry
    fn should_quit(event: &CrosstermEvent) -> bool {
        matches!(
            event,
            CrosstermEvent::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
        )
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_quit() {
        // Ctrl+C should quit
        let ctrl_c = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(EventHandler::should_quit(&ctrl_c));

        // Plain characters must reach the input fields
        let c = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!EventHandler::should_quit(&c));

        let esc = CrosstermEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!EventHandler::should_quit(&esc));
    }
}
