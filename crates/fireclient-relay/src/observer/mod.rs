//! Hooks an HTTP client calls around each exchange.
//!
//! - `on_before_send`: advertise the FirePHP client so the server emits
//!   Wildfire headers.
//! - `on_response_received`: relay the response's Wildfire headers.
//! - `on_complete`: publish a request summary table, then relay headers. A
//!   failed exchange (no response) still gets its summary.

pub mod summary;

use std::sync::Arc;
use std::time::Duration;

use http::header::{HeaderValue, USER_AGENT};
use http::{HeaderMap, Request, Response};

use fireclient_core::error::{FireClientError, Result};

use crate::adapter;
use crate::config::FireClientConfig;
use crate::console::{Console, TableKind};
use crate::dispatch::MessageDispatcher;
use crate::scanner::{ResponseScanner, ScanSummary};

pub struct ResponseObserver {
    scanner: ResponseScanner,
    user_agent: HeaderValue,
    preview_length: usize,
}

impl ResponseObserver {
    /// Build an observer writing to `console`.
    pub fn new(cfg: &FireClientConfig, console: Arc<dyn Console>) -> Result<Self> {
        cfg.validate()?;

        let user_agent = HeaderValue::from_str(&format!("FirePHP/{}", cfg.relay.client_version))
            .map_err(|e| FireClientError::InvalidConfig(format!("client_version: {e}")))?;

        let dispatcher = MessageDispatcher::new(cfg.relay.remote_prefix.clone());
        Ok(Self {
            scanner: ResponseScanner::new(dispatcher, console),
            user_agent,
            preview_length: cfg.relay.preview_length,
        })
    }

    pub fn scanner(&self) -> &ResponseScanner {
        &self.scanner
    }

    /// Append the FirePHP `User-Agent` to outgoing request headers.
    pub fn on_before_send(&self, headers: &mut HeaderMap) {
        headers.append(USER_AGENT, self.user_agent.clone());
    }

    pub fn on_response_received<B>(&self, response: &Response<B>) -> ScanSummary {
        adapter::http::scan_header_map(&self.scanner, response.headers())
    }

    pub fn on_complete<Q, S>(
        &self,
        request: &Request<Q>,
        response: Option<&Response<S>>,
        elapsed: Duration,
    ) -> ScanSummary
    where
        Q: AsRef<[u8]>,
        S: AsRef<[u8]>,
    {
        self.publish_request(request, response, elapsed);

        match response {
            Some(response) => self.on_response_received(response),
            None => ScanSummary::default(),
        }
    }

    /// Announce the exchange as a `Key`/`Value` table.
    pub fn publish_request<Q, S>(
        &self,
        request: &Request<Q>,
        response: Option<&Response<S>>,
        elapsed: Duration,
    ) where
        Q: AsRef<[u8]>,
        S: AsRef<[u8]>,
    {
        let prefix = self.scanner.dispatcher().remote_prefix();
        let summary = summary::RequestSummary::capture(request, response, elapsed, self.preview_length);

        self.scanner
            .console()
            .table(TableKind::Request, &summary.label(prefix), &summary.rows());
    }
}
