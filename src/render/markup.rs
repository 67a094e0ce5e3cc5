//! HTML templates for article cards, the detail view, and status panels.
//!
//! Text fields and attribute values are escaped; `Article::content` is
//! trusted markup from the site's own JSON and is inserted as-is. Cards and
//! the back link carry `data-*` attributes that the delegated click handler
//! reads, so the markup never needs per-element listeners.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::error::AppError;
use crate::state::article::Article;

pub const NOT_FOUND_MESSAGE: &str = "Article not found.";

/// Compact cards for the home-page preview grid.
pub fn preview_cards(articles: &[Article]) -> String {
    let mut out = String::new();
    for a in articles {
        out.push_str(&format!(
            r#"<div class="col-md-4">
  <div class="card article-card shadow-sm border-0">
    <img src="{image}" alt="{alt}">
    <div class="card-body">
      <h5 class="fw-bold">{title}</h5>
      <p class="text-muted small mb-2">{date}</p>
      <p class="mb-3">{excerpt}</p>
      <a href="{href}" class="btn btn-outline-primary" data-article="{id}">Read more</a>
    </div>
  </div>
</div>
"#,
            image = attr(&a.image),
            alt = attr(&a.title),
            title = text(&a.title),
            date = text(&a.date),
            excerpt = text(&a.excerpt),
            href = attr(&detail_href(a)),
            id = attr(&a.id),
        ));
    }
    out
}

/// Horizontal cards for the full article listing.
pub fn listing(articles: &[Article]) -> String {
    let mut out = String::from(r#"<div class="row g-4">"#);
    out.push('\n');
    for a in articles {
        out.push_str(&format!(
            r#"<div class="col-md-6">
  <div class="card article-card h-100">
    <div class="row g-0">
      <div class="col-4">
        <img src="{image}" class="img-fluid h-100" style="object-fit:cover;" alt="{alt}">
      </div>
      <div class="col-8">
        <div class="card-body">
          <h5 class="fw-bold mb-1">{title}</h5>
          <p class="text-muted small mb-2">{date}</p>
          <p class="mb-2">{excerpt}</p>
          <a href="{href}" class="stretched-link" data-article="{id}">Read more</a>
        </div>
      </div>
    </div>
  </div>
</div>
"#,
            image = attr(&a.image),
            alt = attr(&a.title),
            title = text(&a.title),
            date = text(&a.date),
            excerpt = text(&a.excerpt),
            href = attr(&detail_href(a)),
            id = attr(&a.id),
        ));
    }
    out.push_str("</div>");
    out
}

/// Full article with a link back to the listing.
pub fn detail(a: &Article) -> String {
    format!(
        r##"<article class="card p-3">
  <img src="{image}" class="img-fluid rounded mb-3" alt="{alt}">
  <h1 class="mb-1">{title}</h1>
  <p class="text-muted small mb-3">{date}</p>
  <div class="article-content">{content}</div>
  <a href="#articles" class="btn btn-link mt-3" id="backToList" data-back>&larr; Back to list</a>
</article>"##,
        image = attr(&a.image),
        alt = attr(&a.title),
        title = text(&a.title),
        date = text(&a.date),
        content = a.content,
    )
}

pub fn not_found() -> String {
    format!("<p>{NOT_FOUND_MESSAGE}</p>")
}

/// Panel shown in place of the content when a navigation fails.
pub fn error_panel(err: &AppError) -> String {
    let resource = err
        .path()
        .map(|p| format!(" (<code>{}</code>)", text(p)))
        .unwrap_or_default();
    format!(
        r#"<div class="alert alert-danger" role="alert">
  <strong>This page could not be loaded{resource}.</strong>
  <p class="small mb-0">{message}</p>
</div>"#,
        message = text(&err.to_string()),
    )
}

fn detail_href(a: &Article) -> String {
    format!("#articles/{}", a.id)
}
