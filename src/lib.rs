//! # folio
//!
//! Hash-routed single-page loader for a static article site, compiled to
//! WASM. It injects static HTML fragments into fixed containers, renders the
//! article collection from `data/articles.json`, keeps the URL fragment and
//! browser history in step with the rendered route, and persists a dark-mode
//! flag in local storage.
//!
//! Everything except the `web` module is environment-agnostic: components talk to the
//! page through the [`host::Host`] trait, which the browser implements with
//! `web-sys` and the tests implement in memory.

pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod host;
pub mod net;
pub mod render;
pub mod routing;
pub mod state;
pub mod util;
#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
pub(crate) mod test_helpers;
