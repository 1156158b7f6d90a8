use anchor_lang::prelude::*;
use crate::{
    state::*,
    constants::*,
    helpers::{load_message, store_message},
};

// Disable Message Instruction
//
// Author or board admin can disable a message. There is no way back.
// Not gated by pause, so moderation keeps working while the board is paused.

#[derive(Accounts)]
#[instruction(message_id: u64)]
pub struct DisableMessage<'info> {
    // Author of the message or the board admin
    pub moderator: Signer<'info>,

    #[account(
        seeds = [BOARD, board.admin.as_ref()],
        bump = board.bump,
    )]
    pub board: Account<'info, Board>,

    /// CHECK: PDA enforced by seeds, loaded and written back in the handler
    #[account(
        mut,
        seeds = [MESSAGE, board.key().as_ref(), &message_id.to_le_bytes()],
        bump,
    )]
    pub message: UncheckedAccount<'info>,
}

impl<'info> DisableMessage<'info> {
    pub fn disable_message(&mut self, message_id: u64) -> Result<bool> {
        let info = self.message.to_account_info();
        let mut message = load_message(&info, &self.board.key(), message_id)?;
        let was_disabled = message.is_disabled;
        message.disable(&self.moderator.key(), &self.board.admin)?;
        store_message(&info, &message)?;

        if !was_disabled {
            msg!("Message {} disabled by {}", message_id, self.moderator.key());
        }
        Ok(true)
    }
}
