//! fireclient-replay
//!
//! Replays Wildfire frames captured in raw HTTP/1.x response dumps
//! (`curl -si ... > dump.http`) onto the local tracing console.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use fireclient_relay::adapter::raw::scan_raw_response;
use fireclient_relay::config::{self, FireClientConfig};
use fireclient_relay::console::TracingConsole;
use fireclient_relay::{MessageDispatcher, ResponseScanner};

#[derive(Debug, Parser)]
#[command(name = "fireclient-replay", version, about = "Replay Wildfire headers from HTTP response dumps")]
struct Args {
    /// YAML config (defaults apply when omitted).
    #[arg(long, env = "FIRECLIENT_CONFIG")]
    config: Option<String>,

    /// Raw HTTP response dumps.
    #[arg(required = true)]
    dumps: Vec<PathBuf>,
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let cfg = match args.config.as_deref() {
        Some(path) => match config::load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::error!(%path, error = %e, "config load failed");
                return ExitCode::FAILURE;
            }
        },
        None => FireClientConfig::default(),
    };

    let dispatcher = MessageDispatcher::new(cfg.relay.remote_prefix.clone());
    let scanner = ResponseScanner::new(dispatcher, Arc::new(TracingConsole::new()));

    let mut failed = false;
    for path in &args.dumps {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "read dump failed");
                failed = true;
                continue;
            }
        };

        match scan_raw_response(&scanner, &data) {
            Ok(summary) => tracing::info!(
                path = %path.display(),
                candidates = summary.candidates,
                relayed = summary.relayed,
                failed = summary.failed,
                "dump replayed"
            ),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "dump is not an http response");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
