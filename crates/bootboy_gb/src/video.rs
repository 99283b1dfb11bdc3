//! Background rendering.
//!
//! The pipeline is three pure stages over [`Memory`](crate::Memory):
//! decode tiles, compose the 256x256 background plane from the tile map,
//! then cut the 160x144 visible window out of it using the scroll
//! registers. [`Graphics`] decides when a new frame is due and hands it to
//! a [`FrameSink`].

mod background;
mod pipeline;
mod tile;
mod viewport;

pub use background::Background;
pub use pipeline::{FrameSink, Graphics};
pub use tile::Tile;
pub use viewport::Frame;
