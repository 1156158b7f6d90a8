use anchor_lang::prelude::*;
use crate::errors::BoardError;

// Participation event counted against a user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    Posted,
    Claimed,
    Upvoted,
}

// Per-user counters, created on the user's first interaction
#[account]
#[derive(InitSpace)]
pub struct UserActivity {
    pub user: Pubkey,
    pub messages_posted: u64,
    pub messages_claimed: u64,
    pub upvotes_given: u64,

    // PDA bump seed
    pub bump: u8,
}

// Read-side copy of the counters; zeroed for users with no activity
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub messages_posted: u64,
    pub messages_claimed: u64,
    pub upvotes_given: u64,
}

impl UserActivity {
    // Fill in identity on a freshly created account
    pub fn bind(&mut self, user: Pubkey, bump: u8) {
        if self.user == Pubkey::default() {
            self.user = user;
            self.bump = bump;
        }
    }

    pub fn record(&mut self, activity: Activity) -> Result<()> {
        let counter = match activity {
            Activity::Posted => &mut self.messages_posted,
            Activity::Claimed => &mut self.messages_claimed,
            Activity::Upvoted => &mut self.upvotes_given,
        };
        *counter = counter.checked_add(1).ok_or(BoardError::Overflow)?;
        Ok(())
    }

    pub fn stats(&self) -> UserStats {
        UserStats {
            messages_posted: self.messages_posted,
            messages_claimed: self.messages_claimed,
            upvotes_given: self.upvotes_given,
        }
    }
}
