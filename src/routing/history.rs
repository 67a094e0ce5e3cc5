//! Keeps the URL fragment and the rendered route in step.
//!
//! The fragment is the only record of the current route. Programmatic
//! navigations push an entry encoding the same `(route, id)` they render,
//! and back/forward re-derives the pair from the fragment and renders it
//! again without pushing.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::rc::Rc;

use crate::context::AppContext;
use crate::error::AppError;
use crate::host::Host;
use crate::routing::route::Location;

/// Location encoded in the host's current fragment.
pub fn current<H: Host>(ctx: &AppContext<H>) -> Location {
    parse(ctx, &ctx.host().location_fragment())
}

/// Parse `fragment` with the configured default route.
pub fn parse<H: Host>(ctx: &AppContext<H>, fragment: &str) -> Location {
    Location::from_fragment(fragment, ctx.config().routes.fallback())
}

/// Record `location` as a new history entry.
///
/// # Errors
///
/// Propagates the host's history error.
pub fn push<H: Host>(ctx: &AppContext<H>, location: &Location) -> Result<(), AppError> {
    log::debug!("push {}", location.to_fragment());
    ctx.host().push_history(location)
}

/// Re-render on every back/forward navigation.
///
/// The subscription owns a strong reference; the app lives until unload.
pub fn bind<H: Host + 'static>(ctx: &Rc<AppContext<H>>) {
    let app = Rc::clone(ctx);
    ctx.host().on_history_change(Box::new(move |fragment| {
        let location = parse(&app, &fragment);
        log::debug!("history changed to {}", location.to_fragment());
        crate::app::show(&app, location);
    }));
}
