use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use tracing::{debug, info, warn};

use crate::request::{FormFields, HttpRequest, HttpResponse, StopAck};
use crate::shared::Shared;
use crate::transport::Transport;
use crate::view::CrawlView;
use crate::Result;

/// Shows a message the user has to acknowledge.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Starts a crawl from submitted form fields and shows the result.
pub struct SubmitHandler<T> {
    transport: T,
    endpoint: String,
    view: Shared<CrawlView>,
}

impl<T: Transport> SubmitHandler<T> {
    pub fn new(transport: T, endpoint: impl Into<String>, view: Shared<CrawlView>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            view,
        }
    }

    /// Posts `fields` to the crawl endpoint. The request is issued immediately; the returned
    /// future completes once the view shows either the crawled tree or the reason it failed.
    pub fn submit(&self, fields: FormFields) -> LocalBoxFuture<'static, Result<()>> {
        debug!(url = %self.endpoint, fields = fields.len(), "submitting crawl");
        let response = self
            .transport
            .send(HttpRequest::post_form(self.endpoint.clone(), fields));
        let view = self.view.clone();

        async move {
            let result = match response.await.and_then(HttpResponse::into_tree) {
                Ok(tree) => view.exec_mut(|view| view.show_tree(&tree)),
                Err(error) => Err(error),
            };
            if let Err(error) = &result {
                warn!(%error, "crawl failed");
                view.exec_mut(|view| view.show_error(error));
            }
            result
        }
        .boxed_local()
    }

    pub fn view(&self) -> &Shared<CrawlView> {
        &self.view
    }
}

/// Asks the server to stop the running crawl and tells the user how that went.
pub struct StopHandler<T> {
    transport: T,
    endpoint: String,
    notifier: Rc<dyn Notifier>,
    message: String,
}

impl<T: Transport> StopHandler<T> {
    /// `message` is shown once the server acknowledges the stop.
    pub fn new(
        transport: T,
        endpoint: impl Into<String>,
        notifier: Rc<dyn Notifier>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            notifier,
            message: message.into(),
        }
    }

    /// Posts an empty request to the stop endpoint. The request is issued immediately; the
    /// returned future completes after the user has been notified of the outcome.
    pub fn stop(&self) -> LocalBoxFuture<'static, Result<StopAck>> {
        debug!(url = %self.endpoint, "requesting crawl stop");
        let response = self
            .transport
            .send(HttpRequest::post_empty(self.endpoint.clone()));
        let notifier = self.notifier.clone();
        let message = self.message.clone();

        async move {
            let result = response.await.and_then(HttpResponse::into_stop_ack);
            match &result {
                Ok(ack) => {
                    info!(status = ?ack.status, "crawl stop acknowledged");
                    notifier.notify(&message);
                }
                Err(error) => {
                    warn!(%error, "stop failed");
                    notifier.notify(&format!("Stop failed: {}", error));
                }
            }
            result
        }
        .boxed_local()
    }
}
