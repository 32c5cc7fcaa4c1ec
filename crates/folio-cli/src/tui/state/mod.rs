//! App State Components
//!
//! Centralized state management for the TUI.

mod layout;
mod scroll;

pub use layout::LayoutState;
pub use scroll::ScrollState;
