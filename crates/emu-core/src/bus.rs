//! Memory and I/O bus interface.

/// The address space a CPU executes against.
///
/// A `Bus` implementation owns RAM/ROM storage and any memory-mapped
/// peripherals; the CPU never touches memory directly, only through this
/// trait. This keeps the interpreter free of any knowledge of ROM windows,
/// I/O hooks, or what device (if any) lives behind a given address.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);

    /// Prepare the reset vector at $FFFC/$FFFD. Called by the CPU at the
    /// start of `reset()`, before it reads that vector into PC, so a bus
    /// with a notion of where its ROM starts gets to install its own
    /// vector without the caller having to know to do it first.
    ///
    /// Buses with no such notion (a flat test harness that pokes the
    /// vector directly, say) can leave this as a no-op.
    fn reset_vector(&mut self) {}
}
