//! Shared traits used to decouple the CPU from the machine it runs in.

mod bus;

pub use bus::Bus;
