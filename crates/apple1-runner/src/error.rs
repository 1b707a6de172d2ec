//! Errors that can occur while assembling the machine, talking to the host
//! terminal, or running it. All of them unwind back through `main`, so the
//! `RawModeGuard` in `main.rs` always gets a chance to restore the
//! terminal before the process exits.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Setup(#[from] machine_apple1::SetupError),

    #[error("host terminal I/O error: {0}")]
    HostIo(#[from] std::io::Error),

    #[error(transparent)]
    Cpu(#[from] cpu_6502::CpuError),
}
