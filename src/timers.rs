/// # Timers
/// The delay and sound timers count down once per `tick` until they reach zero.
///
/// The driver ticks them at 60Hz no matter how fast instructions are executed.
/// Sound plays for as long as the sound timer is nonzero.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Timers {
    delay: u8,
    sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decrements both timers, stopping at zero
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn delay(&self) -> u8 {
        self.delay
    }

    pub fn sound(&self) -> u8 {
        self.sound
    }

    pub fn set_delay(&mut self, value: u8) {
        self.delay = value;
    }

    pub fn set_sound(&mut self, value: u8) {
        self.sound = value;
    }

    pub fn sound_active(&self) -> bool {
        self.sound != 0
    }
}
