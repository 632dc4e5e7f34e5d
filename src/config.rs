use crate::constants::{DEFAULT_CPU_HZ, TIMER_HZ};

/// # Quirks
/// Historical interpreters disagree on a handful of instructions and ROMs are
/// written against one behaviour or the other.
///
/// Every toggle defaults to `false`, which is the behaviour most modern ROMs expect.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Quirks {
    /// 8xy1/8xy2/8xy3 (OR/AND/XOR) also set VF to 0
    pub vf_reset: bool,
    /// 8xy6/8xyE shift Vy and store the result in Vx, instead of shifting Vx in place
    pub shift_uses_vy: bool,
    /// Fx55/Fx65 leave I pointing just past the last register stored or loaded
    pub increment_index: bool,
    /// Sprites are clipped at the right and bottom edges instead of wrapping around
    pub clip_sprites: bool,
}

impl Quirks {
    /// The behaviour of the original COSMAC VIP interpreter
    pub fn cosmac_vip() -> Self {
        Quirks {
            vf_reset: true,
            shift_uses_vy: true,
            increment_index: true,
            clip_sprites: true,
        }
    }
}

/// How the interpreter should be clocked and which quirks it follows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// Instructions executed per second of wall-clock time
    pub cpu_hz: u32,
    pub quirks: Quirks,
}

impl Config {
    /// How many instructions to execute between two 60Hz timer ticks
    pub fn cycles_per_frame(&self) -> u32 {
        (self.cpu_hz / TIMER_HZ).max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cpu_hz: DEFAULT_CPU_HZ,
            quirks: Quirks::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_ten_cycles_per_frame() {
        assert_eq!(Config::default().cycles_per_frame(), 10);
    }

    #[test]
    fn test_slow_clock_still_runs_one_cycle_per_frame() {
        let config = Config {
            cpu_hz: 30,
            ..Config::default()
        };
        assert_eq!(config.cycles_per_frame(), 1);
    }

    #[test]
    fn test_default_quirks_are_off() {
        let quirks = Quirks::default();
        assert!(!quirks.vf_reset);
        assert!(!quirks.shift_uses_vy);
        assert!(!quirks.increment_index);
        assert!(!quirks.clip_sprites);
        assert!(Quirks::cosmac_vip().clip_sprites);
    }
}
