use anchor_lang::prelude::*;
use crate::errors::BoardError;

// Upvote record, one PDA per (message, voter)
// Created on the first upvote and never closed
#[account]
#[derive(InitSpace)]
pub struct UpvoteRecord {
    pub message: Pubkey,
    pub voter: Pubkey,

    // Set once; a set record blocks any further upvote by this voter
    pub upvoted: bool,

    // Slot of the vote
    pub slot: u64,

    // PDA bump seed
    pub bump: u8,
}

impl UpvoteRecord {
    pub fn record(&mut self, message: Pubkey, voter: Pubkey, slot: u64, bump: u8) -> Result<()> {
        require!(!self.upvoted, BoardError::AlreadyProcessed);

        self.message = message;
        self.voter = voter;
        self.upvoted = true;
        self.slot = slot;
        self.bump = bump;
        Ok(())
    }
}
