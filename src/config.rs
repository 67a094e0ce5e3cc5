//! Site configuration: asset paths, element ids, selectors, and keys.
//!
//! DESIGN
//! ======
//! Everything the loader looks up by name lives here instead of being
//! scattered as string literals through the router and renderers. The
//! defaults match the markup shipped under `site/`.

use crate::routing::route::RouteTable;

/// Fixed names the loader uses to find assets and elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub header_path: String,
    pub footer_path: String,
    pub articles_path: String,

    pub header_id: String,
    pub footer_id: String,
    pub content_id: String,
    pub year_id: String,
    /// Container inside the home fragment that receives preview cards.
    pub preview_list_id: String,
    /// Container inside the articles fragment that receives the listing or detail.
    pub article_detail_id: String,
    pub theme_icon_id: String,

    pub nav_selector: String,
    pub nav_attribute: String,
    pub active_class: String,

    pub dark_class: String,
    pub theme_storage_key: String,

    pub preview_len: usize,
    /// Detail id that, on the home route, means "scroll to the article section".
    pub scroll_sentinel: String,
    pub scroll_selector: String,

    pub routes: RouteTable,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_path: "header.html".to_owned(),
            footer_path: "footer.html".to_owned(),
            articles_path: "data/articles.json".to_owned(),
            header_id: "header".to_owned(),
            footer_id: "footer".to_owned(),
            content_id: "content".to_owned(),
            year_id: "year".to_owned(),
            preview_list_id: "articleList".to_owned(),
            article_detail_id: "articleDetail".to_owned(),
            theme_icon_id: "toggleIcon".to_owned(),
            nav_selector: ".nav-link".to_owned(),
            nav_attribute: "data-link".to_owned(),
            active_class: "active".to_owned(),
            dark_class: "dark".to_owned(),
            theme_storage_key: "darkMode".to_owned(),
            preview_len: 3,
            scroll_sentinel: "articles".to_owned(),
            scroll_selector: "[data-scroll=\"articles\"]".to_owned(),
            routes: RouteTable::default(),
        }
    }
}
