//! UI components for the folio TUI
//!
//! Stateless renderers: navigation header, section body, scrollbar, status bar.

pub mod nav_bar;
pub mod scrollbars;
pub mod section_view;
pub mod status_bar;

pub use nav_bar::render_nav_bar;
pub use scrollbars::render_document_scrollbar;
pub use section_view::render_sections;
pub use status_bar::{render_status_bar, StatusInfo};
