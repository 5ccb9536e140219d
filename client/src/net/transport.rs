//! HTTP transport seam for the REST client.
//!
//! Client-side (hydrate): [`FetchTransport`] issues real `fetch` calls via
//! `gloo-net` and enforces the per-request timeout with an abortable race.
//! Server-side (SSR): the same type reports a network error, since these
//! endpoints are only meaningful in the browser.
//!
//! TRADE-OFFS
//! ==========
//! The trait uses `async fn` without `Send` bounds; browser futures are
//! single-threaded and the client is always used generically, never boxed.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};

/// HTTP verbs used by the auth API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }
}

/// A fully built request, ready for the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Deadline after which the transport must give up and abort.
    pub timeout: Duration,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status code and undecoded body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
}

/// Sends one request and resolves to exactly one reply or failure.
///
/// Implementations must not retry.
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            fetch_with_timeout(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Network("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_with_timeout(request: HttpRequest) -> Result<HttpReply, TransportError> {
    use gloo_net::http::{Method as GlooMethod, RequestBuilder};

    let js_err = |e: wasm_bindgen::JsValue| TransportError::Network(format!("{e:?}"));
    let controller = web_sys::AbortController::new().map_err(js_err)?;
    let signal = controller.signal();

    let method = match request.method {
        Method::Get => GlooMethod::GET,
        Method::Post => GlooMethod::POST,
        Method::Patch => GlooMethod::PATCH,
    };
    let mut builder = RequestBuilder::new(&request.url).method(method).abort_signal(Some(&signal));
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let built = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| TransportError::Network(e.to_string()))?;

    let millis = u32::try_from(request.timeout.as_millis()).unwrap_or(u32::MAX);
    // The deadline covers the body as well as the headers.
    let exchange = async move {
        let resp = built.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(HttpReply { status, body })
    };
    let timer = gloo_timers::future::TimeoutFuture::new(millis);

    let result = within_deadline(exchange, timer, request.timeout).await;
    if matches!(result, Err(TransportError::Timeout(_))) {
        controller.abort();
        log::warn!("{} {} timed out", request.method.as_str(), request.url);
    }
    result
}

/// Resolve `exchange` unless `deadline` fires first, in which case the
/// exchange is dropped and [`TransportError::Timeout`] reports `timeout`.
///
/// `exchange` must cover the whole round trip, body included.
pub(crate) async fn within_deadline<E, D>(exchange: E, deadline: D, timeout: Duration) -> Result<HttpReply, TransportError>
where
    E: Future<Output = Result<HttpReply, TransportError>>,
    D: Future<Output = ()>,
{
    match select(pin!(exchange), pin!(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(TransportError::Timeout(timeout)),
    }
}
