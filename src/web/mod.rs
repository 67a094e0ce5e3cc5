//! Browser implementation of [`Host`] and the WASM entry point.
//!
//! Only compiled with the `hydrate` feature. Fetches go through `gloo-net`,
//! everything else through `web_sys`. Event closures are leaked with
//! `Closure::forget`: they live as long as the page, like the app itself.

use std::rc::Rc;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Storage, Window};

use crate::app;
use crate::config::SiteConfig;
use crate::context::AppContext;
use crate::error::AppError;
use crate::host::{ClickHandler, ClickTarget, Host, HistoryHandler};
use crate::routing::route::Location;

/// Elements the delegated click handler reacts to.
const CLICK_SELECTOR: &str = "[data-article],[data-back],[data-link],#darkToggle";
const THEME_TOGGLE_ID: &str = "darkToggle";

pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    /// # Errors
    ///
    /// [`AppError::Dom`] outside a browser window.
    pub fn new() -> Result<Self, AppError> {
        let window = web_sys::window().ok_or_else(|| AppError::Dom("no window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| AppError::Dom("no document".to_owned()))?;
        Ok(Self { window, document })
    }

    fn element(&self, id: &str) -> Result<Element, AppError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| AppError::MissingElement(id.to_owned()))
    }

    fn storage(&self) -> Result<Storage, AppError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(AppError::Storage("localStorage disabled".to_owned())),
            Err(err) => Err(AppError::Storage(js_message(&err))),
        }
    }

    fn fragment(window: &Window) -> String {
        window.location().hash().unwrap_or_default()
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn dom_error(value: JsValue) -> AppError {
    AppError::Dom(js_message(&value))
}

fn storage_error(value: JsValue) -> AppError {
    AppError::Storage(js_message(&value))
}

/// Map the element a click landed on to the action it stands for.
fn click_target(element: &Element) -> Option<ClickTarget> {
    if let Some(id) = element.get_attribute("data-article") {
        return Some(ClickTarget::Article(id));
    }
    if element.has_attribute("data-back") {
        return Some(ClickTarget::BackToList);
    }
    if let Some(link) = element.get_attribute("data-link") {
        return Some(ClickTarget::NavLink(link));
    }
    if element.id() == THEME_TOGGLE_ID {
        return Some(ClickTarget::ThemeToggle);
    }
    None
}

#[async_trait(?Send)]
impl Host for BrowserHost {
    async fn fetch_text(&self, path: &str) -> Result<String, AppError> {
        let fetch_error = |err: gloo_net::Error| AppError::Fetch { path: path.to_owned(), message: err.to_string() };
        let resp = gloo_net::http::Request::get(path).send().await.map_err(fetch_error)?;
        if !(200..300).contains(&resp.status()) {
            return Err(AppError::Status { path: path.to_owned(), status: resp.status() });
        }
        resp.text().await.map_err(fetch_error)
    }

    fn set_inner_html(&self, element_id: &str, html: &str) -> Result<(), AppError> {
        self.element(element_id)?.set_inner_html(html);
        Ok(())
    }

    fn set_text(&self, element_id: &str, text: &str) -> Result<(), AppError> {
        self.element(element_id)?.set_text_content(Some(text));
        Ok(())
    }

    fn mark_active(&self, selector: &str, attribute: &str, value: &str, class: &str) -> Result<usize, AppError> {
        let nodes = self.document.query_selector_all(selector).map_err(dom_error)?;
        let mut active = 0;
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<Element>() else {
                continue;
            };
            let matches = element.get_attribute(attribute).as_deref() == Some(value);
            element
                .class_list()
                .toggle_with_force(class, matches)
                .map_err(dom_error)?;
            if matches {
                active += 1;
            }
        }
        Ok(active)
    }

    fn scroll_into_view(&self, selector: &str) -> Result<bool, AppError> {
        let Some(element) = self.document.query_selector(selector).map_err(dom_error)? else {
            return Ok(false);
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(true)
    }

    fn set_root_class(&self, class: &str, enabled: bool) -> Result<(), AppError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| AppError::Dom("no document element".to_owned()))?;
        root.class_list().toggle_with_force(class, enabled).map_err(dom_error)?;
        Ok(())
    }

    fn storage_get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.storage()?.get_item(key).map_err(storage_error)
    }

    fn storage_set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.storage()?.set_item(key, value).map_err(storage_error)
    }

    fn location_fragment(&self) -> String {
        Self::fragment(&self.window)
    }

    fn push_history(&self, location: &Location) -> Result<(), AppError> {
        let state = serde_json::to_string(location).map_err(|err| AppError::Dom(err.to_string()))?;
        let state = js_sys::JSON::parse(&state).map_err(dom_error)?;
        self.window
            .history()
            .map_err(dom_error)?
            .push_state_with_url(&state, "", Some(&location.to_fragment()))
            .map_err(dom_error)
    }

    fn on_history_change(&self, handler: HistoryHandler) {
        let window = self.window.clone();
        let closure = Closure::<dyn Fn()>::new(move || handler(Self::fragment(&window)));
        if let Err(err) = self
            .window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
        {
            log::error!("popstate listener not installed: {}", js_message(&err));
        }
        closure.forget();
    }

    fn on_click(&self, handler: ClickHandler) {
        let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
            let Some(target) = event.target() else {
                return;
            };
            let Ok(element) = target.dyn_into::<Element>() else {
                return;
            };
            let Ok(Some(hit)) = element.closest(CLICK_SELECTOR) else {
                return;
            };
            if let Some(click) = click_target(&hit) {
                event.prevent_default();
                handler(click);
            }
        });
        if let Err(err) = self
            .document
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::error!("click listener not installed: {}", js_message(&err));
        }
        closure.forget();
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn current_year(&self) -> i32 {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
}

/// WASM entry point: install the panic hook and logger, then boot.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger not installed: {err}").into());
    }

    let host = match BrowserHost::new() {
        Ok(host) => host,
        Err(err) => {
            web_sys::console::error_1(&format!("folio cannot start: {err}").into());
            return;
        }
    };
    let ctx = Rc::new(AppContext::new(host, SiteConfig::default()));
    wasm_bindgen_futures::spawn_local(async move {
        if app::boot(&ctx).await.is_none() {
            log::warn!("initial route did not render");
        }
    });
}
