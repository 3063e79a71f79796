//! Tick scheduler - decides which frames run a game step
//!
//! `tick` counts frames and wraps to zero at `next_game_tick`. The frame in
//! which it reads zero runs one game step. Levelling up lowers the threshold,
//! but it never drops below 1 so the modulo stays defined.

/// Frame counter with a level-dependent wrap threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickClock {
    tick: u32,
    next_game_tick: u32,
    init_next_game_tick: u32,
}

impl TickClock {
    /// Create a clock wrapping every `init_next_game_tick` frames.
    ///
    /// A zero threshold is clamped to 1; `GameConfig::validate` rejects it
    /// before it gets here.
    pub fn new(init_next_game_tick: u32) -> Self {
        let init = init_next_game_tick.max(1);
        Self {
            tick: 0,
            next_game_tick: init,
            init_next_game_tick: init,
        }
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn next_game_tick(&self) -> u32 {
        self.next_game_tick
    }

    pub fn init_next_game_tick(&self) -> u32 {
        self.init_next_game_tick
    }

    /// True on the frame the counter wrapped
    pub fn is_step_due(&self) -> bool {
        self.tick == 0
    }

    /// Count one frame
    pub fn advance(&mut self) {
        self.tick = (self.tick + 1) % self.next_game_tick;
    }

    /// Restart counting from zero (new game)
    pub fn reset_tick(&mut self) {
        self.tick = 0;
    }

    /// Make the current frame run a game step
    pub fn force_step(&mut self) {
        self.tick = 0;
    }

    /// Apply one level-up worth of speed increase
    pub fn speed_up(&mut self) {
        self.next_game_tick = next_game_tick_after_level_up(self.next_game_tick);
        // Keep the counter inside [0, next_game_tick).
        self.tick %= self.next_game_tick;
    }

    /// Back to level 0 speed
    pub fn reset_speed(&mut self) {
        self.next_game_tick = self.init_next_game_tick;
    }
}

/// Tiered threshold decrease applied on level-up.
///
/// | current | result |
/// |---------|--------|
/// | 1 | 1 |
/// | 2..=10 | current - 1 |
/// | 11..=20 | current - 2 |
/// | otherwise | current - 10 |
///
/// # Examples
///
/// ```
/// use stetris_core::next_game_tick_after_level_up;
///
/// assert_eq!(next_game_tick_after_level_up(50), 40);
/// assert_eq!(next_game_tick_after_level_up(15), 13);
/// assert_eq!(next_game_tick_after_level_up(1), 1);
/// ```
pub fn next_game_tick_after_level_up(current: u32) -> u32 {
    match current {
        0 | 1 => 1,
        2..=10 => current - 1,
        11..=20 => current - 2,
        _ => current - 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_up_policy_table() {
        assert_eq!(next_game_tick_after_level_up(1), 1);
        assert_eq!(next_game_tick_after_level_up(5), 4);
        assert_eq!(next_game_tick_after_level_up(15), 13);
        assert_eq!(next_game_tick_after_level_up(30), 20);
        assert_eq!(next_game_tick_after_level_up(21), 11);
        assert_eq!(next_game_tick_after_level_up(11), 9);
        assert_eq!(next_game_tick_after_level_up(2), 1);
    }

    #[test]
    fn test_speed_curve_from_default_never_reaches_zero() {
        let mut clock = TickClock::new(50);
        let mut seen = Vec::new();
        for _ in 0..40 {
            clock.speed_up();
            seen.push(clock.next_game_tick());
        }
        assert_eq!(&seen[..6], &[40, 30, 20, 18, 16, 14]);
        assert!(seen.iter().all(|&t| t >= 1));
        assert_eq!(clock.next_game_tick(), 1);
    }

    #[test]
    fn test_wraps_at_threshold() {
        let mut clock = TickClock::new(3);
        assert!(clock.is_step_due());
        clock.advance();
        clock.advance();
        assert_eq!(clock.tick(), 2);
        clock.advance();
        assert!(clock.is_step_due());
    }

    #[test]
    fn test_speed_up_keeps_tick_in_range() {
        let mut clock = TickClock::new(12);
        for _ in 0..11 {
            clock.advance();
        }
        assert_eq!(clock.tick(), 11);
        clock.speed_up();
        assert_eq!(clock.next_game_tick(), 10);
        assert!(clock.tick() < clock.next_game_tick());
    }

    #[test]
    fn test_reset_speed() {
        let mut clock = TickClock::new(50);
        clock.speed_up();
        clock.speed_up();
        clock.reset_speed();
        assert_eq!(clock.next_game_tick(), 50);
    }

    #[test]
    fn test_zero_threshold_is_clamped() {
        let mut clock = TickClock::new(0);
        assert_eq!(clock.next_game_tick(), 1);
        clock.advance();
        assert!(clock.is_step_due());
    }
}
