// Index selection for discover_message
//
// Selection is a pure function of board state and the current slot, so any
// observer can predict it. It is a browsing aid, not a source of randomness.

use anchor_lang::prelude::*;
use crate::errors::BoardError;

pub trait IndexSelector {
    // Pick an index in 0..total for the given slot
    fn select(&mut self, height: u64, total: u64) -> Result<u64>;
}

// Seed-chain selector backed by Board::random_seed
pub struct SeedSelector<'a> {
    seed: &'a mut u64,
}

impl<'a> SeedSelector<'a> {
    pub fn new(seed: &'a mut u64) -> Self {
        SeedSelector { seed }
    }

    // Index the next call will return, without advancing the seed
    pub fn peek(seed: u64, total: u64) -> Option<u64> {
        seed.checked_rem(total)
    }
}

impl IndexSelector for SeedSelector<'_> {
    fn select(&mut self, height: u64, total: u64) -> Result<u64> {
        // Checked before touching the seed so an empty board leaves it unchanged
        let index = Self::peek(*self.seed, total).ok_or(BoardError::MessageMissing)?;
        *self.seed = self.seed.wrapping_add(height);
        Ok(index)
    }
}
