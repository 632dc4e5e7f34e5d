use crate::constants::KEY_COUNT;
use crate::error::{Error, Result};

/// # Keypad
/// Chip-8 input is generated with a hexadecimal keypad.
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
/// Only key indices are tracked here; mapping physical keys onto them is up to the driver.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Keypad {
    pressed: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pressed status of a key
    ///
    /// # Arguments
    /// * `key` the keypad index, 0x0..=0xF
    /// * `pressed` true on press, false on release
    pub fn set_key(&mut self, key: u8, pressed: bool) -> Result<()> {
        let slot = self
            .pressed
            .get_mut(key as usize)
            .ok_or(Error::InvalidKey { key })?;
        *slot = pressed;
        Ok(())
    }

    /// Only the low nibble of `key` is used, so any register value names a key
    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed[(key & 0xF) as usize]
    }

    /// The lowest-numbered key currently held down
    pub fn any_pressed(&self) -> Option<u8> {
        self.pressed.iter().position(|p| *p).map(|key| key as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keypad = Keypad::new();
        keypad.set_key(0xE, true).unwrap();
        assert!(keypad.is_pressed(0xE));
        keypad.set_key(0xE, false).unwrap();
        assert!(!keypad.is_pressed(0xE));
    }

    #[test]
    fn test_rejects_keys_off_the_pad() {
        let mut keypad = Keypad::new();
        assert!(matches!(
            keypad.set_key(0x10, true),
            Err(Error::InvalidKey { key: 0x10 })
        ));
        assert_eq!(keypad.any_pressed(), None);
    }

    #[test]
    fn test_any_pressed_reports_lowest_key() {
        let mut keypad = Keypad::new();
        assert_eq!(keypad.any_pressed(), None);
        keypad.set_key(0x9, true).unwrap();
        keypad.set_key(0x7, true).unwrap();
        assert_eq!(keypad.any_pressed(), Some(0x7));
    }

    #[test]
    fn test_is_pressed_masks_to_low_nibble() {
        let mut keypad = Keypad::new();
        keypad.set_key(0x3, true).unwrap();
        assert!(keypad.is_pressed(0x13));
    }
}
