//! Network access for static site assets.

pub mod fetch;
