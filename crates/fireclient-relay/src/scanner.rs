//! Response header scanner.
//!
//! Filters headers by the Wildfire marker and runs each qualifying value
//! through decode -> dispatch. Parse errors are relayed to the console as a
//! single warning and the scan moves on; a bad frame never fails the scan.

use std::sync::Arc;

use fireclient_core::protocol::{decode_frame, is_wildfire_header};
use fireclient_core::ParseError;

use crate::console::Console;
use crate::dispatch::MessageDispatcher;

/// Outcome counts for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Header values that carried the Wildfire marker.
    pub candidates: usize,
    /// Values that were decoded and dispatched.
    pub relayed: usize,
    /// Values reported as parse errors.
    pub failed: usize,
}

/// Header scanner bound to one console.
///
/// Holds no per-response state: scanning the same headers twice produces two
/// identical, independent sets of console calls.
#[derive(Clone)]
pub struct ResponseScanner {
    dispatcher: MessageDispatcher,
    console: Arc<dyn Console>,
}

impl ResponseScanner {
    pub fn new(dispatcher: MessageDispatcher, console: Arc<dyn Console>) -> Self {
        Self {
            dispatcher,
            console,
        }
    }

    pub fn console(&self) -> &Arc<dyn Console> {
        &self.console
    }

    pub fn dispatcher(&self) -> &MessageDispatcher {
        &self.dispatcher
    }

    /// Scan header name/value pairs in iteration order.
    ///
    /// Repeated header names are passed as repeated pairs.
    pub fn scan<I, N, V>(&self, headers: I) -> ScanSummary
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let mut summary = ScanSummary::default();

        for (name, value) in headers {
            let name = name.as_ref();
            if !is_wildfire_header(name) {
                continue;
            }

            summary.candidates += 1;
            match self.relay(value.as_ref()) {
                Ok(()) => summary.relayed += 1,
                Err(e) => {
                    tracing::debug!(header = %name, code = e.code().as_str(), "wildfire frame rejected");
                    summary.failed += 1;
                }
            }
        }

        if summary.candidates > 0 {
            tracing::debug!(
                candidates = summary.candidates,
                relayed = summary.relayed,
                failed = summary.failed,
                "wildfire headers scanned"
            );
        }
        summary
    }

    /// Decode and dispatch one header value, reporting any parse error.
    pub fn relay(&self, raw: &str) -> Result<(), ParseError> {
        let result =
            decode_frame(raw).and_then(|frame| self.dispatcher.dispatch(self.console.as_ref(), &frame));

        if let Err(e) = &result {
            self.report_parse_error(e);
        }
        result
    }

    fn report_parse_error(&self, err: &ParseError) {
        self.console
            .warn(&format!("{} {err}", self.dispatcher.remote_prefix()));
    }
}
