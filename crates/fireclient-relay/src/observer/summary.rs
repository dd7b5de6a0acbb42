//! Request/response summary published once per exchange.

use std::time::Duration;

use http::header::{HOST, LOCATION};
use http::{Request, Response};
use serde_json::{json, Value};

/// Reason phrase reported when the exchange produced no response.
pub const NO_RESPONSE: &str = "No Response";

/// Final URL after redirects, attached to `Response::extensions` by clients
/// that follow redirects themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveUrl(pub String);

#[derive(Debug, Clone, PartialEq)]
pub struct RequestSummary {
    pub method: String,
    pub url: String,
    pub status: u16,
    pub phrase: String,
    pub host: String,
    pub protocol: String,
    pub request_preview: String,
    pub response_preview: String,
    /// Final URL, when it differs from the requested one.
    pub effective_url: Option<String>,
    /// Redirect target of an unfollowed 3xx response.
    pub location: Option<String>,
    pub elapsed: Duration,
}

impl RequestSummary {
    pub fn capture<Q, S>(
        request: &Request<Q>,
        response: Option<&Response<S>>,
        elapsed: Duration,
        preview_length: usize,
    ) -> Self
    where
        Q: AsRef<[u8]>,
        S: AsRef<[u8]>,
    {
        let uri = request.uri();
        let host = uri
            .host()
            .map(str::to_string)
            .or_else(|| {
                request
                    .headers()
                    .get(HOST)
                    .and_then(|h| h.to_str().ok())
                    .map(str::to_string)
            })
            .unwrap_or_default();

        let url = uri.to_string();
        let effective_url = response
            .and_then(|r| r.extensions().get::<EffectiveUrl>())
            .map(|e| e.0.clone())
            .filter(|e| *e != url);

        let (status, phrase, response_preview, location) = match response {
            Some(r) => {
                let status = r.status();
                let location = status
                    .is_redirection()
                    .then(|| r.headers().get(LOCATION))
                    .flatten()
                    .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
                (
                    status.as_u16(),
                    status.canonical_reason().unwrap_or_default().to_string(),
                    preview(r.body().as_ref(), preview_length),
                    location,
                )
            }
            None => (0, NO_RESPONSE.to_string(), String::new(), None),
        };

        Self {
            method: request.method().to_string(),
            url,
            status,
            phrase,
            host,
            protocol: uri.scheme_str().unwrap_or_default().to_string(),
            request_preview: preview(request.body().as_ref(), preview_length),
            response_preview,
            effective_url,
            location,
            elapsed,
        }
    }

    /// `<prefix> <METHOD> (<status>) <url> (<seconds>)s`
    pub fn label(&self, prefix: &str) -> String {
        format!(
            "{prefix} <{}> ({}) {} ({:.4})s",
            self.method,
            self.status,
            self.url,
            self.elapsed.as_secs_f64()
        )
    }

    pub fn rows(&self) -> Vec<Value> {
        let mut rows = vec![
            json!(["Key", "Value"]),
            json!(["Phrase", self.phrase]),
            json!(["Host", self.host]),
            json!(["Protocol", self.protocol]),
            json!(["Request", self.request_preview]),
            json!(["Response", self.response_preview]),
        ];
        if let Some(effective_url) = &self.effective_url {
            rows.push(json!(["Effective URL", effective_url]));
        }
        if let Some(location) = &self.location {
            rows.push(json!(["Location", location]));
        }
        rows
    }
}

fn preview(body: &[u8], limit: usize) -> String {
    let end = body.len().min(limit);
    String::from_utf8_lossy(&body[..end]).into_owned()
}
