use std::borrow::Cow;

use http::HeaderMap;

use crate::scanner::{ResponseScanner, ScanSummary};

/// Header pairs of a `HeaderMap`, one per value, values decoded lossily.
pub fn header_pairs(headers: &HeaderMap) -> impl Iterator<Item = (&str, Cow<'_, str>)> {
    headers
        .iter()
        .map(|(name, value)| (name.as_str(), String::from_utf8_lossy(value.as_bytes())))
}

pub fn scan_header_map(scanner: &ResponseScanner, headers: &HeaderMap) -> ScanSummary {
    scanner.scan(header_pairs(headers))
}
