use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// The FrameBuffer is indexed as [y][x]
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
///
/// Sprites are XORed onto it: drawing a lit sprite pixel over a lit screen pixel
/// turns it off, which is reported as a collision.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Display {
    frame_buffer: FrameBuffer,
}

impl Display {
    pub fn new() -> Self {
        Display {
            frame_buffer: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    /// Turns every pixel off
    pub fn clear(&mut self) {
        self.frame_buffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// XORs an 8-pixel-wide sprite onto the display with its top left corner at (x, y).
    /// Rows and columns that run off an edge wrap around to the opposite one.
    ///
    /// Returns true if any pixel was turned off.
    ///
    /// # Arguments
    /// * `x` the horizontal position; wrapped to the display width
    /// * `y` the vertical position; wrapped to the display height
    /// * `sprite` one byte per row, most significant bit leftmost
    pub fn draw_sprite(&mut self, x: usize, y: usize, sprite: &[u8]) -> bool {
        self.blit(x, y, sprite, false)
    }

    /// Like `draw_sprite`, except pixels past the right or bottom edge are dropped.
    /// The starting position still wraps.
    pub fn draw_sprite_clipped(&mut self, x: usize, y: usize, sprite: &[u8]) -> bool {
        self.blit(x, y, sprite, true)
    }

    fn blit(&mut self, x: usize, y: usize, sprite: &[u8], clip: bool) -> bool {
        let (x, y) = (x % DISPLAY_WIDTH, y % DISPLAY_HEIGHT);
        let mut collision = false;

        for (row, byte) in sprite.iter().enumerate() {
            if clip && y + row >= DISPLAY_HEIGHT {
                break;
            }
            let py = (y + row) % DISPLAY_HEIGHT;
            for bit in 0..8 {
                if clip && x + bit >= DISPLAY_WIDTH {
                    break;
                }
                let px = (x + bit) % DISPLAY_WIDTH;
                let pixel = (byte >> (7 - bit)) & 1 == 1;
                collision |= pixel && self.frame_buffer[py][px];
                self.frame_buffer[py][px] ^= pixel;
            }
        }

        collision
    }

    /// Whether the pixel at (x, y) is lit
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.frame_buffer[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    /// A read-only view of every pixel for rendering
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame_buffer
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
