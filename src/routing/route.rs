//! Route table and URL-fragment locations.
//!
//! DESIGN
//! ======
//! A [`Location`] keeps the route name exactly as it appeared in the URL or
//! click target. Resolution against the [`RouteTable`] happens only when a
//! fragment has to be chosen, so unknown names still round-trip through
//! history unchanged while rendering the default route.
//!
//! Both fragment parts are percent-encoded on the way out and decoded on the
//! way in. Browsers encode whatever `pushState` writes, so `location.hash`
//! never hands back raw spaces or non-ASCII text.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Separator between route name and detail id in the fragment.
pub const FRAGMENT_SEPARATOR: char = '/';

/// Named application views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    Articles,
    About,
}

impl Route {
    pub const ALL: [Self; 3] = [Self::Home, Self::Articles, Self::About];

    /// Name used in fragments, nav links, and the history state.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Articles => "articles",
            Self::About => "about",
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    /// Whether rendering this route pulls in the article collection.
    pub fn needs_articles(self) -> bool {
        matches!(self, Self::Home | Self::Articles)
    }
}

/// Static mapping from route to content fragment path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<(Route, String)>,
    fallback: Route,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            entries: vec![
                (Route::Home, "content/home.html".to_owned()),
                (Route::Articles, "content/articles.html".to_owned()),
                (Route::About, "content/about.html".to_owned()),
            ],
            fallback: Route::Home,
        }
    }
}

impl RouteTable {
    /// Replace the fragment path for `route`.
    #[must_use]
    pub fn with_path(mut self, route: Route, path: impl Into<String>) -> Self {
        let path = path.into();
        match self.entries.iter_mut().find(|(r, _)| *r == route) {
            Some(entry) => entry.1 = path,
            None => self.entries.push((route, path)),
        }
        self
    }

    pub fn fallback(&self) -> Route {
        self.fallback
    }

    /// Fragment path for a known route.
    pub fn path(&self, route: Route) -> Option<&str> {
        self.entries
            .iter()
            .find(|(r, _)| *r == route)
            .map(|(_, p)| p.as_str())
    }

    /// Resolve a raw route name, falling back to the default route when the
    /// name is unknown or has no fragment configured.
    pub fn resolve(&self, name: &str) -> (Route, &str) {
        if let Some(route) = Route::from_name(name) {
            if let Some(path) = self.path(route) {
                return (route, path);
            }
        }
        let fallback = self.fallback;
        (fallback, self.path(fallback).unwrap_or_default())
    }
}

/// A `(route name, detail id)` pair as encoded in the URL fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub route: String,
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Location {
    pub fn new(route: impl Into<String>, detail: Option<String>) -> Self {
        Self { route: route.into(), detail }
    }

    pub fn route(route: impl Into<String>) -> Self {
        Self::new(route, None)
    }

    pub fn detail(route: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(route, Some(id.into()))
    }

    /// Parse a fragment (with or without the leading `#`).
    ///
    /// Empty fragment → default route. Otherwise the text splits on the first
    /// `/`: an empty route part becomes the default route and an empty or
    /// missing id part becomes `None`. Each part is percent-decoded after the
    /// split, so an encoded `%2F` stays inside the id.
    pub fn from_fragment(fragment: &str, default_route: Route) -> Self {
        let raw = fragment.strip_prefix('#').unwrap_or(fragment);
        let mut parts = raw.splitn(2, FRAGMENT_SEPARATOR);
        let route = match parts.next() {
            Some(name) if !name.is_empty() => decode_part(name),
            _ => default_route.name().to_owned(),
        };
        let detail = parts.next().filter(|id| !id.is_empty()).map(decode_part);
        Self { route, detail }
    }

    /// Encode as `#<route>` or `#<route>/<id>`, percent-encoding each part.
    pub fn to_fragment(&self) -> String {
        let route = urlencoding::encode(&self.route);
        match &self.detail {
            Some(id) => format!("#{route}{FRAGMENT_SEPARATOR}{}", urlencoding::encode(id)),
            None => format!("#{route}"),
        }
    }

    pub fn detail_id(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

/// Percent-decode one fragment part. Sequences that do not decode to UTF-8
/// are kept as typed.
fn decode_part(part: &str) -> String {
    urlencoding::decode(part).map_or_else(|_| part.to_owned(), Cow::into_owned)
}
