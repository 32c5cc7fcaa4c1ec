//! Terminal user interface for folio

pub mod app;
pub mod components;
pub mod document;
pub mod handlers;
pub mod reveal;
pub mod state;
pub mod themes;

pub use app::App;
