//! FireClient relay library entry.
//!
//! Wires the Wildfire frame decoder from `fireclient-core` to a console sink:
//! the scanner filters response headers, the dispatcher routes each decoded
//! frame to plain, table or trace output, and the observer exposes the hooks
//! an HTTP client calls around each exchange.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod adapter;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod format;
pub mod observer;
pub mod scanner;

pub use console::{Console, Severity, TableKind};
pub use dispatch::MessageDispatcher;
pub use observer::ResponseObserver;
pub use scanner::{ResponseScanner, ScanSummary};
