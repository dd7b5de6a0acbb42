//! Top-level facade crate for FireClient.
//!
//! Re-exports the Wildfire decoder and the relay so users can depend on a single crate.

pub mod core {
    pub use fireclient_core::*;
}

pub mod relay {
    pub use fireclient_relay::*;
}
