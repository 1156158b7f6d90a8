use anchor_lang::prelude::*;
use crate::errors::BoardError;

// Board account
// Global singletons of one message board: admin, pause flag, id counter, discovery seed
#[account]
#[derive(InitSpace)]
pub struct Board {
    // Fixed at initialization, never reassigned
    pub admin: Pubkey,

    // When true, every mutating instruction except disable and toggle_pause is rejected
    pub paused: bool,

    // Next message id; existing ids are exactly 0..message_count
    pub message_count: u64,

    // Advanced by the clock on every discovery
    pub random_seed: u64,

    // PDA bump seed
    pub bump: u8,
}

impl Board {
    pub fn is_admin(&self, key: &Pubkey) -> bool {
        key == &self.admin
    }

    // Gate for mutating instructions
    pub fn ensure_not_paused(&self) -> Result<()> {
        require!(!self.paused, BoardError::NetworkPaused);
        Ok(())
    }

    // Flip the pause flag, returning the new state
    pub fn toggle_pause(&mut self, caller: &Pubkey) -> Result<bool> {
        require!(self.is_admin(caller), BoardError::NotAdmin);
        self.paused = !self.paused;
        Ok(self.paused)
    }

    // Hand out the next id and bump the counter
    pub fn allocate_message_id(&mut self) -> Result<u64> {
        let id = self.message_count;
        self.message_count = id.checked_add(1).ok_or(BoardError::Overflow)?;
        Ok(id)
    }

    pub fn contains(&self, message_id: u64) -> bool {
        message_id < self.message_count
    }
}
