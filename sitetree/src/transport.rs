use futures::future::LocalBoxFuture;

use crate::request::{HttpRequest, HttpResponse};
use crate::Result;

/// Sends requests to the crawl server.
///
/// Futures are not required to be `Send`, as browser fetches are tied to the UI thread.
/// Implementations report any response that arrived as `Ok`, whatever its status; `Err` is
/// reserved for requests that produced no response at all.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse>>;
}

impl<T: Transport + ?Sized> Transport for std::rc::Rc<T> {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse>> {
        (**self).send(request)
    }
}
