#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Handlers receive the state they mutate as an explicit context argument instead of
//! reaching for globals. A context type that bundles several pieces of state exposes
//! each one through [`AsMut`], so the stock handlers can share a single dispatcher:
//!
//! ```rust
//! use cvkit_events::{
//!     ClickLog, ClickLogger, Event, EventDispatcher, MouseButton, MouseEvent, MouseEventKind,
//!     PickContext, PointDistanceHandler, PointPickingEvent,
//! };
//!
//! #[derive(Default)]
//! struct Viewer {
//!     clicks: ClickLog,
//!     picks: PickContext,
//! }
//!
//! impl AsMut<ClickLog> for Viewer {
//!     fn as_mut(&mut self) -> &mut ClickLog {
//!         &mut self.clicks
//!     }
//! }
//!
//! impl AsMut<PickContext> for Viewer {
//!     fn as_mut(&mut self) -> &mut PickContext {
//!         &mut self.picks
//!     }
//! }
//!
//! let mut dispatcher: EventDispatcher<Viewer> = EventDispatcher::new();
//! dispatcher.register(ClickLogger::new()).register(PointDistanceHandler);
//!
//! let mut viewer = Viewer::default();
//! let click = MouseEvent::new(MouseEventKind::ButtonDown(MouseButton::Left), 10, 20);
//! dispatcher.dispatch(&mut viewer, &Event::from(click));
//! dispatcher.dispatch(&mut viewer, &PointPickingEvent::new([0.0, 0.0, 0.0]).into());
//! dispatcher.dispatch(&mut viewer, &PointPickingEvent::new([3.0, 4.0, 0.0]).into());
//!
//! assert_eq!(viewer.clicks.entries(), ["LEFT CLICK (10, 20)"]);
//! assert_eq!(viewer.picks.distances(), [5.0]);
//! ```

/// Error types for this crate.
pub mod error;

/// Input event types.
pub mod event;

/// The handler trait and the dispatcher.
pub mod handler;

/// Mouse click and key press logging.
pub mod input;

/// Class name and color tables.
pub mod labels;

/// Point picking state.
pub mod picking;

pub use error::LabelError;
pub use event::{
    Event, KeyboardEvent, MouseButton, MouseEvent, MouseEventKind, PointPickingEvent,
};
pub use handler::{EventDispatcher, EventHandler, EventResponse};
pub use input::{ClickLog, ClickLogger, KeyLog, KeyPressLogger};
pub use labels::{LabelTable, Rgb};
pub use picking::{PickContext, PointDistanceHandler};
