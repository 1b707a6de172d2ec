//! Errors the interpreter can raise.

/// A fatal condition raised by [`crate::Mos6502::step`].
///
/// Unlike a bad memory access (which the bus silently tolerates), an
/// illegal opcode has no defined behavior to fall back on, so execution
/// cannot continue. The caller decides what to do with it: report it,
/// dump state, exit.
#[derive(Debug, thiserror::Error)]
pub enum CpuError {
    #[error("illegal opcode ${opcode:02X} at ${pc:04X}")]
    IllegalOpcode { opcode: u8, pc: u16 },
}
