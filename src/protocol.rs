//! Shared plumbing for the JSON-lines helper binaries.

use std::io::{self, Write};

use serde::Serialize;

/// Writes `msg` as a single JSON line and flushes so the driver sees it immediately.
pub fn emit<W: Write, T: Serialize>(writer: &mut W, msg: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *writer, msg)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Logger for binaries whose stdout is reserved for protocol output.
pub fn init_stderr_logger(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}
