//! Thin shims from HTTP representations to header pairs.
//!
//! - `http`: typed `http::HeaderMap` (any client built on the `http` crate).
//! - `raw`: HTTP/1.x response heads as raw bytes, parsed with `httparse`.

pub mod http;
pub mod raw;
