//! Application context shared by every component.
//!
//! DESIGN
//! ======
//! The context owns the [`Host`], the [`SiteConfig`] (route table included),
//! and a navigation generation counter. Components receive it by reference
//! instead of reaching for globals. Event handlers hold it through `Rc`/`Weak`
//! since everything runs on the browser's single thread.
//!
//! Each navigation takes a [`NavToken`] when it starts. After every await it
//! checks the token against the counter; if a newer navigation has started in
//! the meantime it stops without writing, so the latest navigation always
//! wins regardless of fetch completion order.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::cell::Cell;

use crate::config::SiteConfig;
use crate::host::Host;

/// Generation captured by a navigation when it started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavToken(u64);

pub struct AppContext<H> {
    host: H,
    config: SiteConfig,
    generation: Cell<u64>,
}

impl<H: Host> AppContext<H> {
    pub fn new(host: H, config: SiteConfig) -> Self {
        Self { host, config, generation: Cell::new(0) }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Start a navigation, invalidating every earlier token.
    pub fn begin_navigation(&self) -> NavToken {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        NavToken(next)
    }

    /// Whether `token` belongs to the most recently started navigation.
    pub fn is_current(&self, token: NavToken) -> bool {
        self.generation.get() == token.0
    }
}
