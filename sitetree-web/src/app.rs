use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use sitetree::config::ViewerConfig;
use sitetree::handlers::{Notifier, StopHandler, SubmitHandler};
use sitetree::shared::Shared;
use sitetree::view::CrawlView;
use sitetree::{Error, Result};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlFormElement, Window};

use crate::{describe, form_fields, FetchTransport, WebRenderer};

/// Attribute of the document element holding a JSON [`ViewerConfig`].
const CONFIG_ATTRIBUTE: &str = "data-sitetree-config";

/// Notifies with the window's blocking `alert`.
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            warn!(error = %describe(&err), "alert failed");
        }
    }
}

/// A crawl form, stop button and tree container wired to the crawl server.
///
/// The listeners stay attached for as long as the `CrawlApp` is alive.
pub struct CrawlApp {
    _on_submit: EventListener,
    _on_stop: EventListener,
}

impl CrawlApp {
    /// Wires the given elements. Submitting `form` starts a crawl whose tree replaces the content
    /// of `container`; clicking `stop_button` asks the server to stop crawling.
    pub fn new(
        window: &Window,
        document: Document,
        form: HtmlFormElement,
        stop_button: Element,
        container: Element,
        config: &ViewerConfig,
    ) -> Self {
        let view = CrawlView::new(
            Box::new(WebRenderer::new(document)),
            WebRenderer::handle(container),
            config.max_depth,
        );
        debug!(max_depth = view.max_depth(), "crawl view ready");
        let submit = SubmitHandler::new(
            FetchTransport::new(window.clone()),
            config.crawl_endpoint.clone(),
            Shared::new(view),
        );
        let stop = StopHandler::new(
            FetchTransport::new(window.clone()),
            config.stop_endpoint.clone(),
            Rc::new(AlertNotifier::new(window.clone())),
            config.stop_message.clone(),
        );

        let form_target = form.clone();
        let on_submit = EventListener::new_with_options(
            &form_target,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                match form_fields(&form) {
                    Ok(fields) => {
                        let pending = submit.submit(fields);
                        spawn_local(async move {
                            // Failures are already shown in the container.
                            let _ = pending.await;
                        });
                    }
                    Err(error) => {
                        warn!(%error, "could not read crawl form");
                        submit.view().exec_mut(|view| view.show_error(&error));
                    }
                }
            },
        );

        let on_stop = EventListener::new(&stop_button, "click", move |_| {
            let pending = stop.stop();
            spawn_local(async move {
                // Failures are already reported to the user.
                let _ = pending.await;
            });
        });

        Self {
            _on_submit: on_submit,
            _on_stop: on_stop,
        }
    }

    /// Looks up the elements named by `config` in the window's document and wires them.
    pub fn mount(window: &Window, config: &ViewerConfig) -> Result<Self> {
        let document = document(window)?;
        let form = find(&document, &config.form_id)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| Error::Js(format!("#{} is not a form", config.form_id)))?;
        let stop_button = find(&document, &config.stop_button_id)?;
        let container = find(&document, &config.container_id)?;
        info!(
            crawl = %config.crawl_endpoint,
            stop = %config.stop_endpoint,
            "crawl viewer mounted"
        );
        Ok(Self::new(window, document, form, stop_button, container, config))
    }

    /// Reads the configuration from the document element's `data-sitetree-config` attribute,
    /// falling back to the defaults when there is none.
    pub fn page_config(window: &Window) -> Result<ViewerConfig> {
        let config = document(window)?
            .document_element()
            .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
        match config {
            Some(json) => ViewerConfig::from_json(&json),
            None => Ok(ViewerConfig::default()),
        }
    }

    /// Keeps the listeners attached for the rest of the page's lifetime.
    pub fn leak(self) -> &'static CrawlApp {
        Box::leak(Box::new(self))
    }
}

fn document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| Error::Js("window has no document".to_string()))
}

fn find(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(id.to_string()))
}
