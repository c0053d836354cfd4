//! The I/O seam: something that can execute one `HttpRequest`.
//!
//! Everything above this trait is deterministic. Tests plug in scripted
//! transports; `ReqwestTransport` talks to a real server.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use tracing::debug;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes a request and returns the response as data, whatever its status.
///
/// Only failures to obtain a response at all are errors. Futures are not
/// required to be `Send`: the page runs on a single UI thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `reqwest`-backed transport with a session cookie jar.
///
/// Requests flagged `with_credentials` go through a client that reads and
/// stores cookies in the jar; all other requests go out without cookies.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    plain: reqwest::Client,
    credentialed: reqwest::Client,
    jar: Arc<Jar>,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let jar = Arc::new(Jar::default());
        let credentialed = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()?;
        let plain = reqwest::Client::builder().build()?;
        Ok(Self {
            plain,
            credentialed,
            jar,
        })
    }

    /// The cookie jar shared by credentialed requests.
    pub fn cookie_jar(&self) -> &Arc<Jar> {
        &self.jar
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let client = if request.with_credentials {
            &self.credentialed
        } else {
            &self.plain
        };

        let mut builder = client.request(to_reqwest_method(request.method), &request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;
        debug!(status, "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
