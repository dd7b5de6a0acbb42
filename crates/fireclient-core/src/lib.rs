//! FireClient core: Wildfire frame decoding primitives and error types.
//!
//! This crate defines the wire-level contract for Wildfire header values and
//! the error surface shared by the relay and its adapters. It carries no HTTP
//! or console dependencies so it can be reused wherever header values are
//! available as text.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Header values arrive from a remote peer; every malformed frame must surface
//! as a [`ParseError`] instead of crashing the host process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{FireClientError, ParseError, ParseErrorCode, Result};
