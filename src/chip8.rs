use std::io::Read;

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::constants::MAX_ROM_SIZE;
use crate::display::FrameBuffer;
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::state::State;

/// What a single call to `Chip8::step` did
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    /// An instruction ran and left the display alone
    Executed,
    /// An instruction changed the display; it should be redrawn
    Drew,
    /// Fx0A is waiting for a key; the pc didn't move
    WaitingForKey,
}

impl Step {
    pub fn drew(&self) -> bool {
        *self == Step::Drew
    }
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the `config` it was built with
///  - the random source used by Cxkk
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one instruction at a time
/// - advancing its timers, which the driver does at 60Hz
/// - inspecting its frame buffer and sound status for some display and speaker
///
/// It never sleeps, blocks or does I/O of its own: the driver owns the clock.
pub struct Chip8 {
    state: State,
    config: Config,
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Chip8 {
            state: State::new(),
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Like `with_config`, but Cxkk produces the same bytes on every run
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Chip8 {
            state: State::new(),
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A read-only view of registers, memory and peripherals
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the machine to its power-on state with no ROM loaded
    pub fn reset(&mut self) {
        debug!("resetting machine");
        self.state.reset();
    }

    /// Resets the machine and loads a rom at 0x200
    ///
    /// # Arguments
    /// * `rom` the raw ROM contents; at most 3584 bytes
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        self.state.load(rom)?;
        debug!("loaded {} byte ROM", rom.len());
        Ok(())
    }

    /// Load a rom from a source
    ///
    /// # Arguments
    /// * `reader` a reader that contains a ROM; read until it is exhausted
    ///
    /// Reading stops one byte past the largest ROM, so an oversized source is
    /// reported as `MAX_ROM_SIZE + 1` bytes.
    pub fn load_reader(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut rom = Vec::new();
        reader
            .take(MAX_ROM_SIZE as u64 + 1)
            .read_to_end(&mut rom)?;
        self.load_rom(&rom)
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the keypad index, 0x0..=0xF
    /// * `pressed` true on press, false on release
    pub fn set_key(&mut self, key: u8, pressed: bool) -> Result<()> {
        self.state.keypad.set_key(key, pressed)
    }

    /// Advances the CPU by a single instruction
    /// - fetches the opcode at the pc
    /// - decodes and executes it
    ///
    /// On error nothing about the machine changes, the pc included.
    pub fn step(&mut self) -> Result<Step> {
        let pc = self.state.pc;
        let op = self.state.fetch()?;
        let instruction = Instruction::decode(op).ok_or(Error::UnknownOpcode {
            opcode: op,
            address: pc,
        })?;
        trace!(
            "{:04X} {:04X} {:<14} v{:02X?} i{:04X}",
            pc,
            op,
            instruction.to_string(),
            self.state.v,
            self.state.i
        );

        let current = State {
            draw_flag: false,
            ..self.state
        };
        self.state = instruction.execute(&current, &self.config.quirks, &mut self.rng)?;

        Ok(if self.state.register_needing_key.is_some() {
            Step::WaitingForKey
        } else if self.state.draw_flag {
            Step::Drew
        } else {
            Step::Executed
        })
    }

    /// Moves the pc past the current instruction without running it.
    /// Lets a driver carry on after an `Error::UnknownOpcode`.
    pub fn skip_instruction(&mut self) {
        warn!("skipping instruction at {:04X}", self.state.pc);
        self.state.pc = self.state.pc.wrapping_add(0x2);
    }

    /// Decrements the delay and sound timers; call at 60Hz
    pub fn tick(&mut self) {
        self.state.timers.tick();
    }

    /// Runs one 60Hz frame: `Config::cycles_per_frame` instructions then a timer tick.
    /// Returns whether the display should be redrawn.
    pub fn run_frame(&mut self) -> Result<bool> {
        let mut drew = false;
        for _ in 0..self.config.cycles_per_frame() {
            drew |= self.step()?.drew();
        }
        self.tick();
        Ok(drew)
    }

    /// The current contents of the display
    pub fn frame(&self) -> &FrameBuffer {
        self.state.display.frame()
    }

    /// Whether the speaker should be beeping
    pub fn sound_active(&self) -> bool {
        self.state.timers.sound_active()
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
