#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use cvkit_geometry as geometry;

#[doc(inline)]
pub use cvkit_ransac as ransac;

#[doc(inline)]
pub use cvkit_events as events;
