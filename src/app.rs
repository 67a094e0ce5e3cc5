//! Page bootstrap and user-driven navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `boot` fills the page chrome, applies the stored theme, subscribes the
//! click and history handlers once, and renders the route in the current
//! fragment. After that every navigation enters through [`go`] (clicks,
//! which push history) or [`show`] (back/forward, which does not).
//!
//! ERROR HANDLING
//! ==============
//! This is the only layer that swallows errors. A failed navigation is
//! logged and replaced by an error panel in the content container, unless a
//! newer navigation has already started. Header/footer failures are logged
//! and skipped so the content route still renders.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use crate::context::AppContext;
use crate::error::AppError;
use crate::host::{ClickTarget, Host};
use crate::net::fetch::fetch_text;
use crate::render::markup;
use crate::routing::history;
use crate::routing::route::{Location, Route};
use crate::routing::router::{self, NavOutcome};
use crate::util::dark_mode;

/// Bring the page up and render the initial route.
///
/// Returns the outcome of the initial navigation, or `None` if it failed and
/// the error panel was shown instead.
pub async fn boot<H: Host + 'static>(ctx: &Rc<AppContext<H>>) -> Option<NavOutcome> {
    load_chrome(ctx).await;

    match dark_mode::init_from_storage(ctx) {
        Ok(dark) => log::debug!("theme applied, dark = {dark}"),
        Err(err) => log::warn!("theme not applied: {err}"),
    }

    bind_clicks(ctx);
    history::bind(ctx);

    let location = history::current(ctx);
    log::info!("initial route {}", location.to_fragment());
    display(ctx, &location).await
}

/// Navigate to `location` and push a matching history entry.
pub fn go<H: Host + 'static>(ctx: &Rc<AppContext<H>>, location: Location) {
    if let Err(err) = history::push(ctx, &location) {
        log::warn!("history entry not pushed: {err}");
    }
    show(ctx, location);
}

/// Navigate to `location` on the event loop without touching history.
pub fn show<H: Host + 'static>(ctx: &Rc<AppContext<H>>, location: Location) {
    let app = Rc::clone(ctx);
    ctx.host().spawn(Box::pin(async move {
        display(&app, &location).await;
    }));
}

/// Navigate to `location`, turning a failure into the error panel.
pub async fn display<H: Host>(ctx: &AppContext<H>, location: &Location) -> Option<NavOutcome> {
    let token = ctx.begin_navigation();
    match router::navigate_as(ctx, token, &location.route, location.detail_id()).await {
        Ok(outcome) => Some(outcome),
        Err(err) if ctx.is_current(token) => {
            report(ctx, &err);
            None
        }
        Err(err) => {
            log::debug!("superseded navigation failed: {err}");
            None
        }
    }
}

/// React to a click on an actionable element.
pub fn handle_click<H: Host + 'static>(ctx: &Rc<AppContext<H>>, target: ClickTarget) {
    match target {
        ClickTarget::NavLink(link) => go(ctx, history::parse(ctx, &link)),
        ClickTarget::Article(id) => go(ctx, Location::detail(Route::Articles.name(), id)),
        ClickTarget::BackToList => go(ctx, Location::route(Route::Articles.name())),
        ClickTarget::ThemeToggle => match dark_mode::toggle(ctx) {
            Ok(dark) => log::debug!("theme toggled, dark = {dark}"),
            Err(err) => log::warn!("theme toggle failed: {err}"),
        },
    }
}

fn bind_clicks<H: Host + 'static>(ctx: &Rc<AppContext<H>>) {
    let app = Rc::clone(ctx);
    ctx.host().on_click(Box::new(move |target| handle_click(&app, target)));
}

/// Header, footer, and the footer's year stamp.
async fn load_chrome<H: Host>(ctx: &AppContext<H>) {
    let config = ctx.config();
    let host = ctx.host();
    for (path, id) in [(&config.header_path, &config.header_id), (&config.footer_path, &config.footer_id)] {
        let loaded = fetch_text(host, path).await;
        if let Err(err) = loaded.and_then(|html| host.set_inner_html(id, &html)) {
            log::warn!("{path} not loaded: {err}");
        }
    }

    match host.set_text(&config.year_id, &host.current_year().to_string()) {
        Ok(()) => {}
        Err(AppError::MissingElement(id)) => log::debug!("no #{id} for the year stamp"),
        Err(err) => log::warn!("year stamp not set: {err}"),
    }
}

fn report<H: Host>(ctx: &AppContext<H>, err: &AppError) {
    log::error!("navigation failed: {err}");
    if let Err(panel_err) = ctx.host().set_inner_html(&ctx.config().content_id, &markup::error_panel(err)) {
        log::error!("error panel not shown: {panel_err}");
    }
}
