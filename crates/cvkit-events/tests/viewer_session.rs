//! A point cloud viewer session driven through one dispatcher and one context.

use approx::assert_relative_eq;
use cvkit_events::{
    ClickLog, ClickLogger, Event, EventDispatcher, EventHandler, EventResponse, KeyLog,
    KeyPressLogger, KeyboardEvent, MouseButton, MouseEvent, MouseEventKind, PickContext,
    PointDistanceHandler, PointPickingEvent,
};

#[derive(Default)]
struct ViewerContext {
    clicks: ClickLog,
    keys: KeyLog,
    picks: PickContext,
    highlighted: Vec<usize>,
}

impl AsMut<ClickLog> for ViewerContext {
    fn as_mut(&mut self) -> &mut ClickLog {
        &mut self.clicks
    }
}

impl AsMut<KeyLog> for ViewerContext {
    fn as_mut(&mut self) -> &mut KeyLog {
        &mut self.keys
    }
}

impl AsMut<PickContext> for ViewerContext {
    fn as_mut(&mut self) -> &mut PickContext {
        &mut self.picks
    }
}

/// Highlights picked cloud indices; uses the full context rather than a projection.
struct Highlighter;

impl EventHandler<ViewerContext> for Highlighter {
    fn on_point_picked(
        &mut self,
        ctx: &mut ViewerContext,
        event: &PointPickingEvent,
    ) -> EventResponse {
        match event.index {
            Some(index) => {
                ctx.highlighted.push(index);
                EventResponse::Handled
            }
            None => EventResponse::Ignored,
        }
    }
}

fn dispatcher() -> EventDispatcher<ViewerContext> {
    let mut dispatcher = EventDispatcher::new();
    dispatcher
        .register(ClickLogger::clicks_only())
        .register(KeyPressLogger::new(['a']))
        .register(PointDistanceHandler)
        .register(Highlighter);
    dispatcher
}

#[test]
fn session_routes_events_to_their_state() {
    let mut dispatcher = dispatcher();
    let mut ctx = ViewerContext::default();

    let events: Vec<Event> = vec![
        MouseEvent::new(MouseEventKind::Move, 1, 1).into(),
        MouseEvent::new(MouseEventKind::ButtonDown(MouseButton::Left), 7, 9).into(),
        KeyboardEvent::down('a').into(),
        KeyboardEvent::down('b').into(),
        PointPickingEvent::new([0.0, 0.0, 0.0]).with_index(3).into(),
        PointPickingEvent::new([0.0, 0.3, 0.4]).with_index(8).into(),
        PointPickingEvent::new([1.0, 1.0, 1.0]).into(),
    ];
    let handled = events
        .iter()
        .map(|event| dispatcher.dispatch(&mut ctx, event))
        .collect::<Vec<_>>();

    assert_eq!(handled, [0, 1, 1, 0, 2, 2, 1]);
    assert_eq!(ctx.clicks.entries(), ["LEFT CLICK (7, 9)"]);
    assert_eq!(ctx.keys.pressed(), ['a']);
    assert_eq!(ctx.highlighted, [3, 8]);
    assert_eq!(ctx.picks.pick_count(), 3);
    assert_eq!(ctx.picks.distances().len(), 1);
    assert_relative_eq!(ctx.picks.distances()[0], 0.5, epsilon = 1e-6);
}

#[test]
fn sessions_do_not_share_state() {
    let mut dispatcher = dispatcher();
    let mut first = ViewerContext::default();
    let mut second = ViewerContext::default();

    dispatcher.dispatch(&mut first, &PointPickingEvent::new([0.0, 0.0, 0.0]).into());
    dispatcher.dispatch(&mut second, &PointPickingEvent::new([5.0, 0.0, 0.0]).into());
    dispatcher.dispatch(&mut first, &PointPickingEvent::new([0.0, 2.0, 0.0]).into());

    assert_eq!(first.picks.distances(), [2.0]);
    assert!(second.picks.distances().is_empty());
}
