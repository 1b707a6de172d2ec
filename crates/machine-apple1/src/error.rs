//! Setup-time errors: anything that can go wrong before the machine runs.

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("data of {len} bytes starting at ${start:04X} overflows the 64 KiB address space")]
    ProgramTooLarge { start: u16, len: usize },
}
