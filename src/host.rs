//! Capability interface between the loader and its environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router, renderers, and theme controller never touch `web_sys` or the
//! network directly. They go through [`Host`], which the browser implements
//! in [`crate::web`] and tests implement with an in-memory fake. Everything
//! runs on one thread, so the trait is `?Send` and handlers are plain `Fn`.

use async_trait::async_trait;
use futures::future::LocalBoxFuture;

use crate::error::AppError;
use crate::routing::route::Location;

/// What a delegated click landed on, read from the element's attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// `[data-link="<route>"]` in the header navigation or a call to action.
    NavLink(String),
    /// `[data-article="<id>"]` on a preview or listing card.
    Article(String),
    /// `[data-back]` on the detail view.
    BackToList,
    /// The `#darkToggle` button.
    ThemeToggle,
}

pub type HistoryHandler = Box<dyn Fn(String)>;
pub type ClickHandler = Box<dyn Fn(ClickTarget)>;

/// Browser capabilities the loader depends on.
#[async_trait(?Send)]
pub trait Host {
    /// GET a static asset relative to the page and return its body.
    ///
    /// # Errors
    ///
    /// [`AppError::Fetch`] when the request fails, [`AppError::Status`] on a
    /// non-success response.
    async fn fetch_text(&self, path: &str) -> Result<String, AppError>;

    /// Replace the markup of the element with id `element_id`.
    ///
    /// # Errors
    ///
    /// [`AppError::MissingElement`] when no such element exists.
    fn set_inner_html(&self, element_id: &str, html: &str) -> Result<(), AppError>;

    /// Replace the text content of the element with id `element_id`.
    ///
    /// # Errors
    ///
    /// [`AppError::MissingElement`] when no such element exists.
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), AppError>;

    /// For every element matching `selector`, add `class` when its
    /// `attribute` equals `value` and remove it otherwise. Returns how many
    /// elements ended up with the class.
    ///
    /// # Errors
    ///
    /// [`AppError::Dom`] when the selector is rejected.
    fn mark_active(&self, selector: &str, attribute: &str, value: &str, class: &str) -> Result<usize, AppError>;

    /// Smooth-scroll the first element matching `selector` into view.
    /// Returns `false` when nothing matched.
    ///
    /// # Errors
    ///
    /// [`AppError::Dom`] when the selector is rejected.
    fn scroll_into_view(&self, selector: &str) -> Result<bool, AppError>;

    /// Add or remove a class on the document root element.
    ///
    /// # Errors
    ///
    /// [`AppError::Dom`] when the root element is unavailable.
    fn set_root_class(&self, class: &str, enabled: bool) -> Result<(), AppError>;

    /// # Errors
    ///
    /// [`AppError::Storage`] when local storage is unavailable.
    fn storage_get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// # Errors
    ///
    /// [`AppError::Storage`] when local storage is unavailable or full.
    fn storage_set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Current URL fragment including the leading `#`, or empty.
    fn location_fragment(&self) -> String;

    /// Push a history entry whose URL fragment and state encode `location`.
    ///
    /// # Errors
    ///
    /// [`AppError::Dom`] when the history API rejects the entry.
    fn push_history(&self, location: &Location) -> Result<(), AppError>;

    /// Subscribe to back/forward navigation. The handler receives the new
    /// fragment.
    fn on_history_change(&self, handler: HistoryHandler);

    /// Subscribe to clicks on actionable elements anywhere in the document.
    fn on_click(&self, handler: ClickHandler);

    /// Run a task on the local event loop.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    fn current_year(&self) -> i32;
}
