use anchor_lang::prelude::*;
use crate::errors::BoardError;

// Message payload kind
// Travels as a raw u8 so unknown values surface as InvalidType
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum MessageType {
    Text,
    Image,
    Voice,
}

impl TryFrom<u8> for MessageType {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(MessageType::Text),
            1 => Ok(MessageType::Image),
            2 => Ok(MessageType::Voice),
            _ => err!(BoardError::InvalidType),
        }
    }
}

// Message account
// Canonical record plus the mutable lifecycle flags and vote counters
#[account]
#[derive(InitSpace, Debug)]
pub struct Message {
    // Board this message belongs to
    pub board: Pubkey,

    // Sequential id within the board
    pub id: u64,

    pub author: Pubkey,

    #[max_len(256)]
    pub content_hash: String,

    // Slot from which the message can be read, claimed and upvoted
    pub activation_point: u64,

    pub is_private: bool,

    // Only reader allowed to claim a private message
    pub target_user: Option<Pubkey>,

    // One-way flags: false -> true only
    pub is_processed: bool,
    pub is_disabled: bool,

    pub upvotes: u64,

    // One per report call, not deduplicated per reporter
    pub downvotes: u64,

    pub msg_type: MessageType,

    // PDA bump seed
    pub bump: u8,
}

impl Message {
    pub fn is_active(&self, height: u64) -> bool {
        height >= self.activation_point
    }

    pub fn ensure_enabled(&self) -> Result<()> {
        require!(!self.is_disabled, BoardError::Disabled);
        Ok(())
    }

    // Enabled and past the activation point
    pub fn ensure_visible(&self, height: u64) -> Result<()> {
        self.ensure_enabled()?;
        require!(self.is_active(height), BoardError::StillPending);
        Ok(())
    }

    // Public messages are open to everyone, private ones only to their target
    pub fn can_be_claimed_by(&self, caller: &Pubkey) -> bool {
        match self.target_user {
            Some(target) => &target == caller,
            None => true,
        }
    }

    // One-time claim by an eligible reader
    pub fn claim(&mut self, caller: &Pubkey, height: u64) -> Result<()> {
        self.ensure_visible(height)?;
        require!(!self.is_processed, BoardError::AlreadyProcessed);
        require!(self.can_be_claimed_by(caller), BoardError::InvalidTarget);

        self.is_processed = true;
        Ok(())
    }

    // Duplicate votes are filtered by the upvote record, not here
    pub fn add_upvote(&mut self, height: u64) -> Result<()> {
        self.ensure_visible(height)?;
        self.upvotes = self.upvotes.checked_add(1).ok_or(BoardError::Overflow)?;
        Ok(())
    }

    // Reports skip the activation gate and may repeat
    pub fn add_report(&mut self) -> Result<()> {
        self.ensure_enabled()?;
        self.downvotes = self.downvotes.checked_add(1).ok_or(BoardError::Overflow)?;
        Ok(())
    }

    // Author or admin only; disabling twice is a no-op
    pub fn disable(&mut self, caller: &Pubkey, admin: &Pubkey) -> Result<()> {
        require!(
            caller == &self.author || caller == admin,
            BoardError::NotAdmin
        );
        self.is_disabled = true;
        Ok(())
    }
}
