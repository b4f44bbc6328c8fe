//! Dashboard UI components
//!
//! Each visual section of the dashboard is its own module

pub mod footer;
pub mod header;
pub mod info_panel;
pub mod logs;
pub mod table;
