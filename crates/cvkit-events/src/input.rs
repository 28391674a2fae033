use crate::{
    event::{KeyboardEvent, MouseEvent, MouseEventKind},
    handler::{EventHandler, EventResponse},
};

/// Descriptions of the mouse events seen by a [`ClickLogger`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickLog {
    entries: Vec<String>,
}

impl ClickLog {
    /// The recorded descriptions, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Forget all recorded events.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl AsMut<ClickLog> for ClickLog {
    fn as_mut(&mut self) -> &mut ClickLog {
        self
    }
}

/// Logs mouse clicks, and optionally cursor moves, into a [`ClickLog`].
#[derive(Debug, Clone)]
pub struct ClickLogger {
    log_moves: bool,
}

impl ClickLogger {
    /// A logger that records clicks and cursor moves.
    pub fn new() -> Self {
        Self { log_moves: true }
    }

    /// A logger that ignores cursor moves.
    pub fn clicks_only() -> Self {
        Self { log_moves: false }
    }
}

impl Default for ClickLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: AsMut<ClickLog>> EventHandler<C> for ClickLogger {
    fn on_mouse(&mut self, ctx: &mut C, event: &MouseEvent) -> EventResponse {
        if event.kind == MouseEventKind::Move && !self.log_moves {
            return EventResponse::Ignored;
        }
        let entry = event.describe();
        log::info!("{entry}");
        ctx.as_mut().entries.push(entry);
        EventResponse::Handled
    }
}

/// Keys pressed while a [`KeyPressLogger`] was watching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyLog {
    pressed: Vec<char>,
}

impl KeyLog {
    /// The pressed keys, oldest first.
    pub fn pressed(&self) -> &[char] {
        &self.pressed
    }
}

impl AsMut<KeyLog> for KeyLog {
    fn as_mut(&mut self) -> &mut KeyLog {
        self
    }
}

/// Records key-down events for a fixed set of keys.
#[derive(Debug, Clone)]
pub struct KeyPressLogger {
    keys: Vec<char>,
}

impl KeyPressLogger {
    /// Watch the given keys.
    pub fn new(keys: impl IntoIterator<Item = char>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

impl<C: AsMut<KeyLog>> EventHandler<C> for KeyPressLogger {
    fn on_keyboard(&mut self, ctx: &mut C, event: &KeyboardEvent) -> EventResponse {
        if !event.key_down || !self.keys.contains(&event.key) {
            return EventResponse::Ignored;
        }
        log::info!("KEYPRESS DETECTED: '{}'", event.key);
        ctx.as_mut().pressed.push(event.key);
        EventResponse::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, MouseButton};
    use crate::handler::EventDispatcher;

    #[test]
    fn test_click_logger() {
        let mut dispatcher: EventDispatcher<ClickLog> = EventDispatcher::new();
        dispatcher.register(ClickLogger::new());
        let mut log = ClickLog::default();

        let events = [
            MouseEvent::new(MouseEventKind::ButtonDown(MouseButton::Left), 1, 2),
            MouseEvent::new(MouseEventKind::Move, 3, 4),
            MouseEvent::new(MouseEventKind::ButtonDown(MouseButton::Middle), 5, 6),
        ];
        for event in events {
            assert_eq!(dispatcher.dispatch(&mut log, &Event::from(event)), 1);
        }
        assert_eq!(
            log.entries(),
            ["LEFT CLICK (1, 2)", "MOUSE OVER (3, 4)", "MIDDLE CLICK (5, 6)"]
        );

        log.clear();
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_click_logger_ignores_moves() {
        let mut logger = ClickLogger::clicks_only();
        let mut log = ClickLog::default();
        let response = logger.on_mouse(&mut log, &MouseEvent::new(MouseEventKind::Move, 0, 0));
        assert_eq!(response, EventResponse::Ignored);
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_key_press_logger() {
        let mut logger = KeyPressLogger::new(['a', 's']);
        let mut keys = KeyLog::default();
        let events = [
            KeyboardEvent::down('a'),
            KeyboardEvent::up('a'),
            KeyboardEvent::down('x'),
            KeyboardEvent::down('s'),
        ];
        let handled = events
            .iter()
            .filter(|e| logger.on_keyboard(&mut keys, e) == EventResponse::Handled)
            .count();
        assert_eq!(handled, 2);
        assert_eq!(keys.pressed(), ['a', 's']);
    }
}
