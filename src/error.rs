use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading or running a ROM.
///
/// None of these are transient: they are either malformed ROM data or a caller
/// breaking a precondition, so nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("memory access out of bounds at address {address:#06X}")]
    OutOfBounds { address: usize },

    #[error("stack overflow: call at {address:#06X} exceeds the maximum call depth")]
    StackOverflow { address: u16 },

    #[error("stack underflow: return at {address:#06X} with an empty call stack")]
    StackUnderflow { address: u16 },

    #[error("unknown opcode {opcode:#06X} at {address:#06X}")]
    UnknownOpcode { opcode: u16, address: u16 },

    #[error("key {key:#04X} is not on the keypad (0x0..=0xF)")]
    InvalidKey { key: u8 },

    #[error("unable to read ROM: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether execution must stop.
    /// An unknown opcode can be skipped and a bad key index is just ignored.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::UnknownOpcode { .. } | Error::InvalidKey { .. })
    }
}
