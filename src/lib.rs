//! A CHIP-8 interpreter core.
//!
//! The driver owns a [`Chip8`], loads a ROM into it, then calls [`Chip8::step`]
//! at the CPU rate and [`Chip8::tick`] at 60Hz, pushing key changes in with
//! [`Chip8::set_key`] and reading [`Chip8::frame`] and [`Chip8::sound_active`] back out.
pub use chip8::{Chip8, Step};
pub use config::{Config, Quirks};
pub use display::{Display, FrameBuffer};
pub use error::{Error, Result};
pub use instruction::Instruction;
pub use keypad::Keypad;
pub use state::State;
pub use timers::Timers;

mod chip8;
mod config;
pub mod constants;
mod display;
mod error;
mod instruction;
mod keypad;
mod opcode;
mod operations;
mod state;
mod timers;
