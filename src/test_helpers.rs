//! In-memory [`Host`] used by unit tests.
//!
//! Models just enough of a document to exercise the loader: elements keyed by
//! id whose markup can be replaced, nav links with an active flag, a root
//! class set, local storage, a history stack, and a `LocalPool` for spawned
//! tasks. Fetches can be gated on a oneshot so tests can interleave slow and
//! fast navigations.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;

use crate::error::AppError;
use crate::host::{ClickHandler, ClickTarget, Host, HistoryHandler};
use crate::routing::route::Location;
use crate::state::article::Article;

enum Asset {
    Body(String),
    Status(u16),
    Unreachable,
}

pub struct FakeHost {
    assets: RefCell<HashMap<String, Asset>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    fetches: RefCell<Vec<String>>,
    elements: RefCell<HashMap<String, String>>,
    nav_links: RefCell<Vec<(String, bool)>>,
    root_classes: RefCell<BTreeSet<String>>,
    storage: RefCell<HashMap<String, String>>,
    fragment: RefCell<String>,
    history: RefCell<Vec<Location>>,
    scrolled: RefCell<Vec<String>>,
    history_handler: RefCell<Option<HistoryHandler>>,
    click_handler: RefCell<Option<ClickHandler>>,
    pool: RefCell<LocalPool>,
    spawner: LocalSpawner,
    year: i32,
}

impl FakeHost {
    /// Empty document with `header`, `footer`, and `content` containers.
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        let host = Self {
            assets: RefCell::new(HashMap::new()),
            gates: RefCell::new(HashMap::new()),
            fetches: RefCell::new(Vec::new()),
            elements: RefCell::new(HashMap::new()),
            nav_links: RefCell::new(Vec::new()),
            root_classes: RefCell::new(BTreeSet::new()),
            storage: RefCell::new(HashMap::new()),
            fragment: RefCell::new(String::new()),
            history: RefCell::new(Vec::new()),
            scrolled: RefCell::new(Vec::new()),
            history_handler: RefCell::new(None),
            click_handler: RefCell::new(None),
            pool: RefCell::new(pool),
            spawner,
            year: 2025,
        };
        for id in ["header", "footer", "content"] {
            host.elements.borrow_mut().insert(id.to_owned(), String::new());
        }
        host
    }

    /// The shipped site: route fragments with their containers, chrome, and
    /// the given article collection.
    pub fn with_site(articles: &[Article]) -> Self {
        let host = Self::new()
            .with_asset(
                "header.html",
                r#"<nav><a class="nav-link" data-link="home">Home</a><button id="darkToggle"><span id="toggleIcon"></span></button></nav>"#,
            )
            .with_asset("footer.html", r#"<footer>&copy; <span id="year"></span></footer>"#)
            .with_asset(
                "content/home.html",
                r#"<section class="hero">Home</section><section data-scroll="articles"><div id="articleList"></div></section>"#,
            )
            .with_asset("content/articles.html", r#"<h2>Articles</h2><div id="articleDetail"></div>"#)
            .with_asset("content/about.html", r"<h2>About</h2>")
            .with_nav_links(&["home", "articles", "about"]);
        let json = serde_json::to_string(articles).unwrap_or_default();
        host.with_asset("data/articles.json", &json)
    }

    pub fn with_asset(self, path: &str, body: &str) -> Self {
        self.assets.borrow_mut().insert(path.to_owned(), Asset::Body(body.to_owned()));
        self
    }

    pub fn with_status(self, path: &str, status: u16) -> Self {
        self.assets.borrow_mut().insert(path.to_owned(), Asset::Status(status));
        self
    }

    pub fn with_unreachable(self, path: &str) -> Self {
        self.assets.borrow_mut().insert(path.to_owned(), Asset::Unreachable);
        self
    }

    pub fn with_nav_links(self, routes: &[&str]) -> Self {
        *self.nav_links.borrow_mut() = routes.iter().map(|r| ((*r).to_owned(), false)).collect();
        self
    }

    /// Address bar text; stored the way the browser reports it back.
    pub fn with_fragment(self, fragment: &str) -> Self {
        *self.fragment.borrow_mut() = as_browser_hash(fragment);
        self
    }

    pub fn with_storage(self, key: &str, value: &str) -> Self {
        self.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Hold the next fetch of `path` until the returned sender fires.
    pub fn gate(&self, path: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(path.to_owned(), rx);
        tx
    }

    // ---- inspection ----

    pub fn html(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).cloned()
    }

    pub fn fetches(&self) -> Vec<String> {
        self.fetches.borrow().clone()
    }

    pub fn fetch_count(&self, path: &str) -> usize {
        self.fetches.borrow().iter().filter(|p| *p == path).count()
    }

    pub fn active_nav(&self) -> Vec<String> {
        self.nav_links
            .borrow()
            .iter()
            .filter(|(_, active)| *active)
            .map(|(route, _)| route.clone())
            .collect()
    }

    pub fn root_classes(&self) -> Vec<String> {
        self.root_classes.borrow().iter().cloned().collect()
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    pub fn fragment(&self) -> String {
        self.fragment.borrow().clone()
    }

    pub fn history(&self) -> Vec<Location> {
        self.history.borrow().clone()
    }

    pub fn scrolled(&self) -> Vec<String> {
        self.scrolled.borrow().clone()
    }

    // ---- driving ----

    /// Run spawned tasks until every one is finished or waiting on a gate.
    pub fn run_pending(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }

    /// Deliver a click to the delegated handler.
    pub fn click(&self, target: ClickTarget) {
        if let Some(handler) = self.click_handler.borrow().as_ref() {
            handler(target);
        }
    }

    /// Click the card for `id`, which must currently be rendered somewhere.
    pub fn click_article(&self, id: &str) {
        let attr = format!("data-article=\"{id}\"");
        assert!(
            self.elements.borrow().values().any(|html| html.contains(&attr)),
            "no rendered card for {id}"
        );
        self.click(ClickTarget::Article(id.to_owned()));
    }

    /// Pop the last history entry and fire the history-change handler with
    /// the fragment that is now current, like the browser's back button.
    pub fn back(&self) {
        let fragment = {
            let mut history = self.history.borrow_mut();
            history.pop();
            history.last().map(|loc| as_browser_hash(&loc.to_fragment())).unwrap_or_default()
        };
        *self.fragment.borrow_mut() = fragment.clone();
        if let Some(handler) = self.history_handler.borrow().as_ref() {
            handler(fragment);
        }
    }

    pub fn has_history_handler(&self) -> bool {
        self.history_handler.borrow().is_some()
    }

    pub fn has_click_handler(&self) -> bool {
        self.click_handler.borrow().is_some()
    }

    fn register_children(&self, html: &str) {
        let mut elements = self.elements.borrow_mut();
        for id in element_ids(html) {
            elements.entry(id).or_default();
        }
    }

    fn remove_children(&self, html: &str) {
        for id in element_ids(html) {
            let nested = self.elements.borrow_mut().remove(&id);
            if let Some(nested) = nested {
                self.remove_children(&nested);
            }
        }
    }
}

/// Every `id="..."` value in `html`, in order.
fn element_ids(html: &str) -> Vec<String> {
    html.split(" id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_owned)
        .collect()
}

#[async_trait(?Send)]
impl Host for FakeHost {
    async fn fetch_text(&self, path: &str) -> Result<String, AppError> {
        self.fetches.borrow_mut().push(path.to_owned());
        let gate = self.gates.borrow_mut().remove(path);
        if let Some(gate) = gate {
            if gate.await.is_err() {
                return Err(AppError::Fetch { path: path.to_owned(), message: "aborted".to_owned() });
            }
        }
        match self.assets.borrow().get(path) {
            Some(Asset::Body(body)) => Ok(body.clone()),
            Some(Asset::Status(status)) => Err(AppError::Status { path: path.to_owned(), status: *status }),
            Some(Asset::Unreachable) => Err(AppError::Fetch {
                path: path.to_owned(),
                message: "connection refused".to_owned(),
            }),
            None => Err(AppError::Status { path: path.to_owned(), status: 404 }),
        }
    }

    fn set_inner_html(&self, element_id: &str, html: &str) -> Result<(), AppError> {
        let previous = self
            .elements
            .borrow()
            .get(element_id)
            .cloned()
            .ok_or_else(|| AppError::MissingElement(element_id.to_owned()))?;
        self.remove_children(&previous);
        self.elements.borrow_mut().insert(element_id.to_owned(), html.to_owned());
        self.register_children(html);
        Ok(())
    }

    fn set_text(&self, element_id: &str, text: &str) -> Result<(), AppError> {
        let mut elements = self.elements.borrow_mut();
        let slot = elements
            .get_mut(element_id)
            .ok_or_else(|| AppError::MissingElement(element_id.to_owned()))?;
        *slot = text.to_owned();
        Ok(())
    }

    fn mark_active(&self, _selector: &str, _attribute: &str, value: &str, _class: &str) -> Result<usize, AppError> {
        let mut links = self.nav_links.borrow_mut();
        for (route, active) in links.iter_mut() {
            *active = route == value;
        }
        Ok(links.iter().filter(|(_, active)| *active).count())
    }

    fn scroll_into_view(&self, selector: &str) -> Result<bool, AppError> {
        let needle = selector.trim_start_matches('[').trim_end_matches(']');
        let found = self.elements.borrow().values().any(|html| html.contains(needle));
        if found {
            self.scrolled.borrow_mut().push(selector.to_owned());
        }
        Ok(found)
    }

    fn set_root_class(&self, class: &str, enabled: bool) -> Result<(), AppError> {
        let mut classes = self.root_classes.borrow_mut();
        if enabled {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
        Ok(())
    }

    fn storage_get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.storage.borrow().get(key).cloned())
    }

    fn storage_set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn location_fragment(&self) -> String {
        self.fragment.borrow().clone()
    }

    fn push_history(&self, location: &Location) -> Result<(), AppError> {
        *self.fragment.borrow_mut() = as_browser_hash(&location.to_fragment());
        self.history.borrow_mut().push(location.clone());
        Ok(())
    }

    fn on_history_change(&self, handler: HistoryHandler) {
        *self.history_handler.borrow_mut() = Some(handler);
    }

    fn on_click(&self, handler: ClickHandler) {
        *self.click_handler.borrow_mut() = Some(handler);
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        if let Err(err) = self.spawner.spawn_local(task) {
            panic!("spawn failed: {err}");
        }
    }

    fn current_year(&self) -> i32 {
        self.year
    }
}

/// `location.hash` as a browser returns it: spaces, controls, and non-ASCII
/// characters percent-encoded as UTF-8, everything else untouched.
pub fn as_browser_hash(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if c.is_ascii_graphic() {
            out.push(c);
        } else {
            let mut buf = [0; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    out
}

/// Article fixture with predictable fields derived from `id`.
pub fn article(id: &str, title: &str) -> Article {
    Article {
        id: id.to_owned(),
        title: title.to_owned(),
        date: format!("date of {id}"),
        excerpt: format!("excerpt of {id}"),
        content: format!("<p>content of {id}</p>"),
        image: format!("img/{id}.jpg"),
    }
}

/// The four-article collection `a1`..`a4` titled `T1`..`T4`.
pub fn four_articles() -> Vec<Article> {
    (1..=4).map(|n| article(&format!("a{n}"), &format!("T{n}"))).collect()
}
