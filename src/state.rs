use std::ops::Range;

use crate::constants::{
    FONT_START, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, STACK_SIZE,
};
use crate::display::Display;
use crate::error::{Error, Result};
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::timers::Timers;

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag and is clobbered by those instructions
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) the number of return addresses on the stack
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the font sprite sheet
///     - 0x200.. holds the ROM
///
/// ## Peripherals
/// - delay and sound timers
/// - the 64x32 display
/// - the 16 key keypad
///
/// Instructions produce a new State from an old one, so a failed instruction leaves
/// the previous State intact.
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub timers: Timers,
    pub display: Display,
    pub keypad: Keypad,
    /// Set by the last instruction if it changed the display
    pub draw_flag: bool,
    /// Set while an Fx0A instruction is waiting for a key to be stored in Vx
    pub register_needing_key: Option<u8>,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let font = FONT_START as usize;
        memory[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; STACK_SIZE],
            memory,
            timers: Timers::new(),
            display: Display::new(),
            keypad: Keypad::new(),
            draw_flag: false,
            register_needing_key: None,
        }
    }

    /// Zeroes everything and reinstalls the sprite sheet
    pub fn reset(&mut self) {
        *self = State::new();
    }

    /// Resets, then copies `rom` into memory at 0x200.
    /// A ROM that doesn't fit is refused without touching the current state.
    pub fn load(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max_size: MAX_ROM_SIZE,
            });
        }
        self.reset();
        let start = PROGRAM_START as usize;
        self.memory[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    /// The index range `addr..addr + len`, if all of it lies inside memory
    pub fn span(&self, addr: usize, len: usize) -> Result<Range<usize>> {
        match addr.checked_add(len) {
            Some(end) if end <= MEMORY_SIZE => Ok(addr..end),
            _ => Err(Error::OutOfBounds {
                address: addr.max(MEMORY_SIZE),
            }),
        }
    }

    pub fn read_byte(&self, addr: usize) -> Result<u8> {
        self.memory
            .get(addr)
            .copied()
            .ok_or(Error::OutOfBounds { address: addr })
    }

    pub fn write_byte(&mut self, addr: usize, value: u8) -> Result<()> {
        let cell = self
            .memory
            .get_mut(addr)
            .ok_or(Error::OutOfBounds { address: addr })?;
        *cell = value;
        Ok(())
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn fetch(&self) -> Result<u16> {
        let at = self.span(self.pc as usize, 2)?;
        Ok(u16::from_bytes(self.memory[at.start], self.memory[at.start + 1]))
    }

    /// Saves a return address
    pub fn push(&mut self, addr: u16) -> Result<()> {
        let slot = self
            .stack
            .get_mut(self.sp as usize)
            .ok_or(Error::StackOverflow { address: self.pc })?;
        *slot = addr;
        self.sp += 1;
        Ok(())
    }

    /// Removes and returns the most recent return address
    pub fn pop(&mut self) -> Result<u16> {
        let top = self
            .sp
            .checked_sub(1)
            .ok_or(Error::StackUnderflow { address: self.pc })?;
        let addr = *self
            .stack
            .get(top as usize)
            .ok_or(Error::StackOverflow { address: self.pc })?;
        self.sp = top;
        Ok(addr)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
