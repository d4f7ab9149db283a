use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Edit,
    New,
    Cancel,
    Quit,
    Resize,
}

/// Wait up to `timeout` for an event. `Ok(None)` on timeout or an ignored key.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            decode_key(key_event)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    })
}

/// Return the next already-queued event without blocking.
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

fn decode_key(key: KeyEvent) -> Option<TuiEvent> {
    // Releases and repeats arrive on terminals with keyboard enhancement
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::Up),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::Down),
        (_, KeyCode::Left | KeyCode::Char('h')) => Some(TuiEvent::Left),
        (_, KeyCode::Right | KeyCode::Char('l')) => Some(TuiEvent::Right),
        (_, KeyCode::Enter | KeyCode::Char(' ')) => Some(TuiEvent::Confirm),
        (_, KeyCode::Char('e')) => Some(TuiEvent::Edit),
        (_, KeyCode::Char('n')) => Some(TuiEvent::New),
        (_, KeyCode::Esc) => Some(TuiEvent::Cancel),
        _ => None,
    }
}
