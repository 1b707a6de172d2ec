//! The Apple 1's keyboard source: a non-blocking latch mapped at $D010
//! (data) and $D011 (status), fed by polling the host terminal once per
//! CPU step.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::memory::Memory;

#[derive(Default)]
struct KeyboardState {
    key: u8,
    ctrl: u8,
}

/// Non-blocking keyboard source. Cloning the internal state handle (via
/// `install`) lets the $D010/$D011 hooks and the host-facing `poll` share
/// one latch without the CPU ever touching the host terminal directly.
pub struct Keyboard {
    state: Rc<RefCell<KeyboardState>>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(KeyboardState::default())),
        }
    }

    /// Register the $D010 (data) and $D011 (status) reader hooks on
    /// `memory`. Reading $D010 returns the latched key with bit 7 set and
    /// clears the latch; reading $D011 returns the status byte verbatim.
    pub fn install(&self, memory: &mut Memory) {
        let data_state = self.state.clone();
        memory.map_io(
            0xD010,
            Some(Box::new(move || {
                let mut state = data_state.borrow_mut();
                let byte = state.key | 0x80;
                state.key = 0;
                state.ctrl &= !0x80;
                byte
            })),
            None,
        );

        let status_state = self.state.clone();
        memory.map_io(0xD011, Some(Box::new(move || status_state.borrow().ctrl)), None);
    }

    /// Check the host terminal for a pending keystroke without blocking.
    /// Returns `Ok(true)` if the host requested a shutdown (Ctrl-C).
    pub fn poll(&self) -> std::io::Result<bool> {
        if !event::poll(Duration::from_secs(0))? {
            return Ok(false);
        }
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read()?
        else {
            return Ok(false);
        };
        if kind != KeyEventKind::Press {
            return Ok(false);
        }
        if modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            return Ok(true);
        }
        let Some(byte) = Self::byte_for(code) else {
            return Ok(false);
        };
        let byte = if byte == 0x0A { 0x0D } else { byte };
        let mut state = self.state.borrow_mut();
        state.key = byte & 0x7F;
        state.ctrl |= 0x80;
        Ok(false)
    }

    fn byte_for(code: KeyCode) -> Option<u8> {
        match code {
            KeyCode::Char(c) if c.is_ascii() => Some(c as u8),
            KeyCode::Enter => Some(0x0D),
            KeyCode::Backspace => Some(0x08),
            KeyCode::Esc => Some(0x1B),
            KeyCode::Tab => Some(0x09),
            _ => None,
        }
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_key_pending_reads_high_bit_only() {
        let mut memory = Memory::new(0xF000);
        let keyboard = Keyboard::new();
        keyboard.install(&mut memory);

        assert_eq!(memory.read(0xD010), 0x80);
        assert_eq!(memory.read(0xD011), 0x00);
    }

    #[test]
    fn latched_key_is_returned_once_then_cleared() {
        let mut memory = Memory::new(0xF000);
        let keyboard = Keyboard::new();
        keyboard.install(&mut memory);
        {
            let mut state = keyboard.state.borrow_mut();
            state.key = b'A' & 0x7F;
            state.ctrl = 0x80;
        }

        assert_eq!(memory.read(0xD011), 0x80);
        assert_eq!(memory.read(0xD010), b'A' | 0x80);
        assert_eq!(memory.read(0xD011), 0x00, "reading $D010 clears the status bit");
        assert_eq!(memory.read(0xD010), 0x80, "the key does not repeat");
    }
}
