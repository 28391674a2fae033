use crate::event::{Event, KeyboardEvent, MouseEvent, PointPickingEvent};

/// Whether a handler acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// The handler did nothing.
    Ignored,
    /// The handler consumed the event.
    Handled,
}

/// A handler invoked synchronously for each event, with mutable access to a context `C`.
///
/// All methods default to ignoring the event.
pub trait EventHandler<C> {
    /// Called for mouse events.
    fn on_mouse(&mut self, _ctx: &mut C, _event: &MouseEvent) -> EventResponse {
        EventResponse::Ignored
    }

    /// Called for keyboard events.
    fn on_keyboard(&mut self, _ctx: &mut C, _event: &KeyboardEvent) -> EventResponse {
        EventResponse::Ignored
    }

    /// Called when a point is picked in a 3d view.
    fn on_point_picked(&mut self, _ctx: &mut C, _event: &PointPickingEvent) -> EventResponse {
        EventResponse::Ignored
    }
}

/// Routes events to registered handlers in registration order.
pub struct EventDispatcher<C> {
    handlers: Vec<Box<dyn EventHandler<C>>>,
}

impl<C> Default for EventDispatcher<C> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<C> EventDispatcher<C> {
    /// Create a dispatcher without handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Handlers run in the order they were registered.
    pub fn register(&mut self, handler: impl EventHandler<C> + 'static) -> &mut Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Deliver `event` to every handler and return how many handled it.
    pub fn dispatch(&mut self, ctx: &mut C, event: &Event) -> usize {
        self.handlers
            .iter_mut()
            .map(|handler| match event {
                Event::Mouse(e) => handler.on_mouse(ctx, e),
                Event::Keyboard(e) => handler.on_keyboard(ctx, e),
                Event::PointPicked(e) => handler.on_point_picked(ctx, e),
            })
            .filter(|response| *response == EventResponse::Handled)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{MouseButton, MouseEventKind};

    #[derive(Default)]
    struct Trace {
        calls: Vec<String>,
    }

    struct Named(&'static str);

    impl EventHandler<Trace> for Named {
        fn on_mouse(&mut self, ctx: &mut Trace, event: &MouseEvent) -> EventResponse {
            ctx.calls.push(format!("{}:{}", self.0, event.describe()));
            EventResponse::Handled
        }
    }

    struct KeysOnly;

    impl EventHandler<Trace> for KeysOnly {
        fn on_keyboard(&mut self, ctx: &mut Trace, event: &KeyboardEvent) -> EventResponse {
            ctx.calls.push(format!("key:{}", event.key));
            EventResponse::Handled
        }
    }

    #[test]
    fn test_dispatch_order_and_count() {
        let mut dispatcher: EventDispatcher<Trace> = EventDispatcher::new();
        assert!(dispatcher.is_empty());
        dispatcher
            .register(Named("first"))
            .register(KeysOnly)
            .register(Named("second"));
        assert_eq!(dispatcher.len(), 3);

        let mut trace = Trace::default();
        let click = MouseEvent::new(MouseEventKind::ButtonDown(MouseButton::Right), 4, 5);
        assert_eq!(dispatcher.dispatch(&mut trace, &click.into()), 2);
        assert_eq!(
            trace.calls,
            ["first:RIGHT CLICK (4, 5)", "second:RIGHT CLICK (4, 5)"]
        );

        assert_eq!(
            dispatcher.dispatch(&mut trace, &KeyboardEvent::down('q').into()),
            1
        );
        assert_eq!(trace.calls.last().map(String::as_str), Some("key:q"));

        let pick = PointPickingEvent::new([0.0; 3]);
        assert_eq!(dispatcher.dispatch(&mut trace, &pick.into()), 0);
        assert_eq!(trace.calls.len(), 3);
    }
}
