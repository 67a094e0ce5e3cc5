//! Utility helpers shared across the loader.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentation concerns that are not tied to a route live here so the
//! router and renderers stay focused on content.

pub mod dark_mode;
