use futures::future::LocalBoxFuture;
use futures::FutureExt;
use js_sys::Promise;
use sitetree::request::{HttpRequest, HttpResponse, RequestBody};
use sitetree::transport::Transport;
use sitetree::{Error, Result};
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response, Window};

use crate::{describe, js_error};

/// Sends requests with the window's `fetch`.
#[derive(Clone)]
pub struct FetchTransport {
    window: Window,
}

impl FetchTransport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Transport for FetchTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse>> {
        // Started here rather than on first poll, so the request goes out even if the
        // future is polled late.
        let started = start(&self.window, &request);
        let url = request.url;
        async move {
            let response = JsFuture::from(started?)
                .await
                .map_err(|err| Error::Transport(describe(&err)))?;
            let response: Response = response.dyn_into().map_err(js_error)?;
            let status = response.status();
            let body = JsFuture::from(response.text().map_err(js_error)?)
                .await
                .map_err(|err| Error::Transport(describe(&err)))?;
            debug!(%url, status, "response received");
            Ok(HttpResponse::new(status, body.as_string().unwrap_or_default()))
        }
        .boxed_local()
    }
}

fn start(window: &Window, request: &HttpRequest) -> Result<Promise> {
    let init = RequestInit::new();
    init.set_method(request.method.as_str());

    let headers = Headers::new().map_err(js_error)?;
    if let Some(content_type) = request.body.content_type() {
        headers
            .set("Content-Type", content_type)
            .map_err(js_error)?;
    }
    init.set_headers(&headers);

    if let RequestBody::Form(fields) = &request.body {
        init.set_body(&JsValue::from_str(&fields.encode()));
    }

    let request = Request::new_with_str_and_init(&request.url, &init).map_err(js_error)?;
    Ok(window.fetch_with_request(&request))
}
