//! Article rendering for the home preview, the listing, and the detail view.
//!
//! Every call fetches `data/articles.json` again and replaces the target
//! container wholesale. Nothing is diffed and no listeners are attached here;
//! card clicks reach the app through the single delegated click handler.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use crate::context::{AppContext, NavToken};
use crate::error::AppError;
use crate::host::Host;
use crate::net::fetch::fetch_json;
use crate::render::markup;
use crate::routing::route::Route;
use crate::state::article::{self, Article};

/// Which article view a route asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArticleView {
    /// First few articles on the home page.
    Preview,
    /// Every article on the articles page.
    Listing,
    /// One article on the articles page.
    Detail(String),
}

impl ArticleView {
    /// View for a resolved route, or `None` when the route shows no articles.
    /// An empty detail id counts as absent.
    pub fn select(route: Route, detail: Option<&str>) -> Option<Self> {
        match (route, detail.filter(|id| !id.is_empty())) {
            (Route::Home, _) => Some(Self::Preview),
            (Route::Articles, None) => Some(Self::Listing),
            (Route::Articles, Some(id)) => Some(Self::Detail(id.to_owned())),
            (Route::About, _) => None,
        }
    }
}

/// What a render put on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    Preview(usize),
    Listing(usize),
    Detail(String),
    NotFound(String),
    /// A newer navigation started while the collection was loading.
    Superseded,
}

/// Fetch the collection and render `view` into its container.
///
/// # Errors
///
/// Fails when the collection cannot be fetched or decoded, or when the
/// target container is missing from the current fragment.
pub async fn render<H: Host>(ctx: &AppContext<H>, token: NavToken, view: &ArticleView) -> Result<RenderOutcome, AppError> {
    let config = ctx.config();
    let articles: Vec<Article> = fetch_json(ctx.host(), &config.articles_path).await?;
    if !ctx.is_current(token) {
        log::debug!("article render superseded");
        return Ok(RenderOutcome::Superseded);
    }

    let host = ctx.host();
    match view {
        ArticleView::Preview => {
            let shown = article::preview(&articles, config.preview_len);
            host.set_inner_html(&config.preview_list_id, &markup::preview_cards(shown))?;
            Ok(RenderOutcome::Preview(shown.len()))
        }
        ArticleView::Listing => {
            host.set_inner_html(&config.article_detail_id, &markup::listing(&articles))?;
            Ok(RenderOutcome::Listing(articles.len()))
        }
        ArticleView::Detail(id) => match article::find(&articles, id) {
            Some(found) => {
                host.set_inner_html(&config.article_detail_id, &markup::detail(found))?;
                Ok(RenderOutcome::Detail(found.id.clone()))
            }
            None => {
                log::info!("article {id:?} not found");
                host.set_inner_html(&config.article_detail_id, &markup::not_found())?;
                Ok(RenderOutcome::NotFound(id.clone()))
            }
        },
    }
}
