use anyhow::{Context, Result};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use angelic_common::{Element, Page};

// dom writes only fail on malformed names, which would be a bug in the contract
// constants rather than something the page can recover from, so we just make noise
fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        warn!("failed to {what}: {err:?}");
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DomElement(pub HtmlElement);

impl DomElement {
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    pub fn is(&self, other: &JsValue) -> bool {
        AsRef::<JsValue>::as_ref(&self.0) == other
    }

    pub fn query(&self, selector: &str) -> Option<DomElement> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
    }

    pub fn query_all(&self, selector: &str) -> Vec<DomElement> {
        match self.0.query_selector_all(selector) {
            Ok(list) => collect(list),
            Err(err) => {
                warn!("bad selector {selector}: {err:?}");
                Vec::new()
            }
        }
    }
}

fn collect(list: web_sys::NodeList) -> Vec<DomElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(DomElement)
        .collect()
}

impl Element for DomElement {
    fn set_class(&self, class: &str, on: bool) {
        report(
            self.0.class_list().toggle_with_force(class, on).map(|_| ()),
            "toggle class",
        );
    }

    fn set_attribute(&self, name: &str, value: &str) {
        report(self.0.set_attribute(name, value), "set attribute");
    }

    fn remove_attribute(&self, name: &str) {
        report(self.0.remove_attribute(name), "remove attribute");
    }

    // the empty string removes the declaration, see CSSStyleDeclaration.setProperty
    fn set_style(&self, property: &str, value: &str) {
        report(self.0.style().set_property(property, value), "set style");
    }

    fn offset_height(&self) -> f64 {
        f64::from(self.0.offset_height())
    }

    fn reflow(&self) {
        // reading a layout property is enough to flush pending style changes
        let _ = self.0.offset_width();
    }
}

#[derive(Clone, Debug)]
pub struct WebPage {
    pub window: Window,
    pub document: Document,
}

impl WebPage {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().context("no global window exists")?;
        let document = window.document().context("window has no document")?;

        Ok(WebPage { window, document })
    }

    pub fn body(&self) -> Result<DomElement> {
        self.document
            .body()
            .map(DomElement)
            .context("document has no body")
    }

    pub fn by_id(&self, id: &str) -> Option<DomElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
    }

    pub fn query(&self, selector: &str) -> Option<DomElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
    }

    pub fn query_all(&self, selector: &str) -> Vec<DomElement> {
        match self.document.query_selector_all(selector) {
            Ok(list) => collect(list),
            Err(err) => {
                warn!("bad selector {selector}: {err:?}");
                Vec::new()
            }
        }
    }

    pub fn create(&self, tag: &str) -> Result<DomElement> {
        self.document
            .create_element(tag)
            .map_err(|err| anyhow::Error::msg(format!("failed to create <{tag}>: {err:?}")))?
            .dyn_into::<HtmlElement>()
            .map(DomElement)
            .map_err(|_| anyhow::Error::msg(format!("<{tag}> is not an html element")))
    }
}

impl Page for WebPage {
    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(offset) => offset,
            Err(_) => self
                .document
                .document_element()
                .map_or(0.0, |root| f64::from(root.scroll_top())),
        }
    }

    fn fragment_top(&self, id: &str) -> Option<f64> {
        let target = self.document.get_element_by_id(id)?;

        Some(target.get_bounding_client_rect().top() + self.scroll_y())
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);

        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
