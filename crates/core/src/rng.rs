//! RNG module - block color selection
//!
//! Colors are drawn from the 6-entry block palette with a small LCG so a
//! seeded game always paints the same colors. A fixed-color policy skips the
//! RNG entirely.

use crate::config::BlockColors;
use crate::types::{Color, BLOCK_PALETTE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG cycle with short periods; use the high half.
        (self.next_u32() >> 16) % max
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Hands out the color for each newly spawned block
#[derive(Debug, Clone)]
pub struct ColorPicker {
    policy: BlockColors,
    rng: SimpleRng,
}

impl ColorPicker {
    pub fn new(policy: BlockColors, seed: u32) -> Self {
        Self {
            policy,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn policy(&self) -> BlockColors {
        self.policy
    }

    /// Color for the next block
    pub fn next_color(&mut self) -> Color {
        match self.policy {
            BlockColors::Fixed(color) => color,
            BlockColors::Random => {
                let i = self.rng.next_range(BLOCK_PALETTE.len() as u32) as usize;
                BLOCK_PALETTE[i]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_random_policy_uses_whole_palette() {
        let mut picker = ColorPicker::new(BlockColors::Random, 7);
        let mut seen = Vec::new();
        for _ in 0..500 {
            let c = picker.next_color();
            assert!(BLOCK_PALETTE.contains(&c), "{c:?} is not a block color");
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        assert_eq!(seen.len(), BLOCK_PALETTE.len());
    }

    #[test]
    fn test_fixed_policy() {
        let mut picker = ColorPicker::new(BlockColors::Fixed(Color::Red), 99);
        assert!((0..20).all(|_| picker.next_color() == Color::Red));
    }
}
