//! Browser bindings for `sitetree`: a [`Renderer`] over the DOM, a [`Transport`](sitetree::transport::Transport)
//! over `fetch`, and [`CrawlApp`], which wires a crawl form, a stop button and a tree container together.

use gloo_events::EventListener;
use sitetree::renderer::{ClickListener, NativeHandle, Renderer, Tag};
use sitetree::Error;
use tracing::warn;
use wasm_bindgen::{intern, JsCast, JsValue};

mod app;
pub mod events;
mod fetch;
mod form;

pub use app::{AlertNotifier, CrawlApp};
pub use fetch::FetchTransport;
pub use form::form_fields;

use crate::events::WebEventContext;

/// The native handle type of [`WebRenderer`].
pub struct WebNativeHandle {
    element: web_sys::Element,
}

/// Gets the element behind a handle created by a [`WebRenderer`].
///
/// # Panics
/// Panics if the handle was created by a different renderer.
pub(crate) fn element(handle: &NativeHandle) -> &web_sys::Element {
    &handle
        .downcast_ref::<WebNativeHandle>()
        .expect("WebNativeHandle")
        .element
}

/// Builds the tree view out of DOM elements of one document.
pub struct WebRenderer {
    document: web_sys::Document,
    /// Click listeners with the elements they are attached to. Dropping a listener detaches it.
    listeners: Vec<(web_sys::Element, EventListener)>,
}

impl WebRenderer {
    pub fn new(document: web_sys::Document) -> Self {
        Self {
            document,
            listeners: Vec::new(),
        }
    }

    /// Wraps an existing element, such as the page's tree container, in a handle.
    pub fn handle(element: web_sys::Element) -> NativeHandle {
        Box::new(WebNativeHandle { element })
    }
}

impl Renderer for WebRenderer {
    fn create_element(&mut self, tag: Tag) -> NativeHandle {
        let element = self
            .document
            .create_element(intern(tag.name()))
            .expect("WebRenderer: element creation failed from syntax error.");
        Self::handle(element)
    }

    fn duplicate_handle(&self, handle: &NativeHandle) -> NativeHandle {
        Self::handle(element(handle).clone())
    }

    fn set_text_content(&mut self, handle: &NativeHandle, text: &str) {
        element(handle).set_text_content(Some(text));
    }

    fn add_class(&mut self, handle: &NativeHandle, class: &'static str) {
        if let Err(err) = element(handle).class_list().add_1(intern(class)) {
            warn!(class, error = %describe(&err), "failed to add class");
        }
    }

    fn append_child(&mut self, parent_handle: &NativeHandle, child_handle: &NativeHandle) {
        if let Err(err) = element(parent_handle).append_child(element(child_handle)) {
            warn!(error = %describe(&err), "failed to append child");
        }
    }

    fn clear_children(&mut self, parent_handle: &NativeHandle) {
        let parent = element(parent_handle);
        self.listeners
            .retain(|(target, _)| target == parent || !parent.contains(Some(&**target)));
        parent.set_inner_html("");
    }

    fn add_click_listener(&mut self, handle: &NativeHandle, listener: ClickListener) {
        let target = element(handle).clone();
        let click = EventListener::new(&target, "click", move |event| {
            listener(&mut WebEventContext::new(event));
        });
        self.listeners.push((target, click));
    }
}

/// Renders a thrown JavaScript value as a message.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", value),
    }
}

pub(crate) fn js_error(value: JsValue) -> Error {
    Error::Js(describe(&value))
}
