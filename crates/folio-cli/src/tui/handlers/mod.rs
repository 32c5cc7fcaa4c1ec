//! Input handlers
//!
//! Each handler moves the scroll state and then publishes the new offset so
//! the scroll spy picks it up on the next tick.

mod keyboard;
mod mouse;
