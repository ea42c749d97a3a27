use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Submit,
    Back,

    // TUI-local events (handled by the focused component)
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Digit(u8), // 1-based quick select
    ScrollPageUp,
    ScrollPageDown,
    Resize,
}

/// Poll for an event with timeout (blocks up to 250ms)
pub fn poll_event() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::from_millis(250))
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                if key_event.kind == KeyEventKind::Release {
                    return None;
                }
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    // Ctrl+C always quits
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Back),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Back),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    // Vim-style movement alongside the arrows
                    (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::Left | KeyCode::Char('h')) => Some(TuiEvent::CursorLeft),
                    (_, KeyCode::Right | KeyCode::Char('l')) => Some(TuiEvent::CursorRight),
                    (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                    (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                    (_, KeyCode::Char(c @ '1'..='9')) => {
                        Some(TuiEvent::Digit(c as u8 - b'0'))
                    }
                    _ => None,
                }
            }
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
