//! Data models loaded from the static site.

pub mod article;
