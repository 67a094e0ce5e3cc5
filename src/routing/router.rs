//! Route dispatch: swap the content fragment, render articles, update nav.
//!
//! A navigation is strictly sequential: fragment fetch, fragment injection
//! and nav highlight, then (for article-bearing routes) the collection fetch
//! and render. The highlight follows the fragment, so it is current even
//! when the collection fails to load. It
//! does not push history; callers that change location do that through
//! [`crate::routing::history::push`].

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::context::{AppContext, NavToken};
use crate::error::AppError;
use crate::host::Host;
use crate::net::fetch::fetch_text;
use crate::render::articles::{self, ArticleView, RenderOutcome};
use crate::routing::route::Route;

/// Result of a navigation that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Rendered {
        route: Route,
        articles: Option<RenderOutcome>,
    },
    /// A newer navigation took over before this one finished writing.
    Superseded,
}

/// Show the route named `name`, optionally focused on `detail`.
///
/// Unknown names render the default route. Nav elements are highlighted by
/// exact match against `name` as given, so an unknown name clears every
/// highlight.
///
/// # Errors
///
/// Fails when the fragment or the article collection cannot be loaded, or a
/// required container is missing. Nothing after the failing step runs.
pub async fn navigate<H: Host>(ctx: &AppContext<H>, name: &str, detail: Option<&str>) -> Result<NavOutcome, AppError> {
    navigate_as(ctx, ctx.begin_navigation(), name, detail).await
}

/// [`navigate`] under a token the caller already took, so the caller can
/// tell afterwards whether a failure is still the latest navigation.
///
/// # Errors
///
/// Same as [`navigate`].
pub async fn navigate_as<H: Host>(
    ctx: &AppContext<H>,
    token: NavToken,
    name: &str,
    detail: Option<&str>,
) -> Result<NavOutcome, AppError> {
    let config = ctx.config();
    let host = ctx.host();

    let (route, path) = config.routes.resolve(name);
    if route.name() != name {
        log::debug!("route {name:?} unknown, showing {}", route.name());
    }

    let fragment = fetch_text(host, path).await?;
    if !ctx.is_current(token) {
        log::debug!("navigation to {name:?} superseded");
        return Ok(NavOutcome::Superseded);
    }
    host.set_inner_html(&config.content_id, &fragment)?;
    host.mark_active(&config.nav_selector, &config.nav_attribute, name, &config.active_class)?;

    let articles = match ArticleView::select(route, detail) {
        Some(view) => match articles::render(ctx, token, &view).await? {
            RenderOutcome::Superseded => return Ok(NavOutcome::Superseded),
            outcome => Some(outcome),
        },
        None => None,
    };

    if route == Route::Home && detail == Some(config.scroll_sentinel.as_str()) {
        if !host.scroll_into_view(&config.scroll_selector)? {
            log::debug!("scroll target {} not present", config.scroll_selector);
        }
    }

    Ok(NavOutcome::Rendered { route, articles })
}
