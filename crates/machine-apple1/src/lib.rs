//! The Apple 1 machine: a 64 KiB memory fabric, a 40-column teletype video
//! sink, and a non-blocking keyboard source, wired together at the
//! $D010/$D011/$D012 magic addresses.

mod error;
mod keyboard;
mod memory;
mod video;

pub use error::SetupError;
pub use keyboard::Keyboard;
pub use memory::Memory;
pub use video::{install as install_video, SCREEN_COLS};
