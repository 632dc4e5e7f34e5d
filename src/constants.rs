/// Addressable memory in bytes
pub const MEMORY_SIZE: usize = 4096;

/// ROMs are copied into memory starting here and the PC is reset to it
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// The font sprites occupy 0x000..0x050
pub const FONT_START: u16 = 0x000;

/// Bytes per font glyph
pub const FONT_GLYPH_SIZE: u16 = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Maximum call depth
pub const STACK_SIZE: usize = 16;

/// Keys 0x0..=0xF on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

/// Delay and sound timers count down at this rate regardless of CPU speed
pub const TIMER_HZ: u32 = 60;

/// Instructions executed per second when no rate is configured
pub const DEFAULT_CPU_HZ: u32 = 600;

/// # Sprite Sheet
/// Hexadecimal digits 0..F, each 5 rows tall and 4 pixels wide (high nibble).
///
/// ```text
/// 0: F0 90 90 90 F0   ####
///                     #  #
///                     #  #
///                     #  #
///                     ####
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
