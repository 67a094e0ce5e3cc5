//! Article records as published in `data/articles.json`.
//!
//! The collection is read-only and ordered: document order is the display
//! order of the full listing, and its head is the home-page preview.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use serde::{Deserialize, Deserializer, Serialize};

/// One published article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Detail key in `#articles/<id>`. An empty id could never be linked,
    /// so it is rejected when the collection is decoded.
    #[serde(deserialize_with = "non_empty_id")]
    pub id: String,
    pub title: String,
    /// Display string; no format is enforced.
    pub date: String,
    pub excerpt: String,
    /// Raw markup, injected unescaped.
    pub content: String,
    /// Image URL.
    pub image: String,
}

/// First `len` articles in collection order.
pub fn preview(articles: &[Article], len: usize) -> &[Article] {
    &articles[..articles.len().min(len)]
}

/// Exact-match lookup by id. First match wins when ids repeat.
pub fn find<'a>(articles: &'a [Article], id: &str) -> Option<&'a Article> {
    articles.iter().find(|a| a.id == id)
}

fn non_empty_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let id = String::deserialize(deserializer)?;
    if id.is_empty() {
        return Err(serde::de::Error::custom("article id must not be empty"));
    }
    Ok(id)
}
