use fireclient_core::error::{FireClientError, Result};

use crate::scanner::{ResponseScanner, ScanSummary};

// One header per Wildfire message: start small, grow on demand.
const INITIAL_HEADERS: usize = 128;
const MAX_HEADERS: usize = 16 * 1024;

/// Parsed response head.
#[derive(Debug, Clone)]
pub struct RawResponseHead {
    pub status_code: u16,
    pub reason: String,
    /// Header pairs in wire order, repeated names kept.
    pub headers: Vec<(String, String)>,
}

/// Parse an HTTP/1.x response head from bytes.
///
/// The header buffer doubles on `TooManyHeaders` up to `MAX_HEADERS`.
pub fn parse_response_head(data: &[u8]) -> Result<RawResponseHead> {
    let mut capacity = INITIAL_HEADERS;
    loop {
        let mut headers = vec![httparse::EMPTY_HEADER; capacity];
        let mut resp = httparse::Response::new(&mut headers);

        match resp.parse(data) {
            Ok(httparse::Status::Complete(_)) => return head_from(&resp),
            Ok(httparse::Status::Partial) => {
                return Err(FireClientError::BadResponse("incomplete response head".into()))
            }
            Err(httparse::Error::TooManyHeaders) if capacity < MAX_HEADERS => {
                capacity = (capacity * 2).min(MAX_HEADERS);
                tracing::debug!(capacity, "response head exceeds header buffer, growing");
            }
            Err(e) => {
                return Err(FireClientError::BadResponse(format!("invalid response head: {e}")))
            }
        }
    }
}

fn head_from(resp: &httparse::Response<'_, '_>) -> Result<RawResponseHead> {
    let status_code = resp
        .code
        .ok_or_else(|| FireClientError::BadResponse("missing status code".into()))?;

    Ok(RawResponseHead {
        status_code,
        reason: resp.reason.unwrap_or_default().to_string(),
        headers: resp
            .headers
            .iter()
            .map(|h| {
                (
                    h.name.to_string(),
                    String::from_utf8_lossy(h.value).into_owned(),
                )
            })
            .collect(),
    })
}

/// Parse a raw response and scan its headers.
pub fn scan_raw_response(scanner: &ResponseScanner, data: &[u8]) -> Result<ScanSummary> {
    let head = parse_response_head(data)?;
    Ok(scanner.scan(head.headers.iter().map(|(n, v)| (n.as_str(), v.as_str()))))
}
