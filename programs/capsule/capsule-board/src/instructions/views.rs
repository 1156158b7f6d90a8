use anchor_lang::prelude::*;
use crate::{
    state::*,
    errors::*,
    constants::*,
    helpers::{load_message, load_program_account},
};

// Read-only instructions
//
// None of these write or check the pause flag. Results travel as Anchor
// return data, so clients call them through transaction simulation.
// Accounts that may legitimately be absent are passed unchecked and
// validated by their PDA seeds.

// Joined view of a message and its details
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct MessageInfo {
    pub message: Message,
    pub details: MessageDetails,
}

#[derive(Accounts)]
#[instruction(message_id: u64)]
pub struct GetMessageInfo<'info> {
    #[account(
        seeds = [BOARD, board.admin.as_ref()],
        bump = board.bump,
    )]
    pub board: Account<'info, Board>,

    /// CHECK: PDA enforced by seeds, contents loaded in the handler
    #[account(
        seeds = [MESSAGE, board.key().as_ref(), &message_id.to_le_bytes()],
        bump,
    )]
    pub message: UncheckedAccount<'info>,

    /// CHECK: PDA enforced by seeds, contents loaded in the handler
    #[account(
        seeds = [DETAILS, board.key().as_ref(), &message_id.to_le_bytes()],
        bump,
    )]
    pub details: UncheckedAccount<'info>,

    pub clock: Sysvar<'info, Clock>,
}

impl<'info> GetMessageInfo<'info> {
    // Fails when missing, disabled or not yet active, in that order
    pub fn get_message_info(&self, message_id: u64) -> Result<MessageInfo> {
        let message = load_message(
            &self.message.to_account_info(),
            &self.board.key(),
            message_id,
        )?;
        message.ensure_visible(self.clock.slot)?;

        let details = load_program_account::<MessageDetails>(&self.details.to_account_info())
            .ok_or(BoardError::MessageMissing)?;

        Ok(MessageInfo { message, details })
    }
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct GetUserStats<'info> {
    #[account(
        seeds = [BOARD, board.admin.as_ref()],
        bump = board.bump,
    )]
    pub board: Account<'info, Board>,

    /// CHECK: PDA enforced by seeds; may not exist yet
    #[account(
        seeds = [ACTIVITY, board.key().as_ref(), user.as_ref()],
        bump,
    )]
    pub activity: UncheckedAccount<'info>,
}

impl<'info> GetUserStats<'info> {
    // Zeroed stats for users who never interacted
    pub fn get_user_stats(&self) -> Result<UserStats> {
        Ok(load_program_account::<UserActivity>(&self.activity.to_account_info())
            .map(|activity| activity.stats())
            .unwrap_or_default())
    }
}

#[derive(Accounts)]
pub struct GetTotalMessages<'info> {
    #[account(
        seeds = [BOARD, board.admin.as_ref()],
        bump = board.bump,
    )]
    pub board: Account<'info, Board>,
}

impl<'info> GetTotalMessages<'info> {
    pub fn get_total_messages(&self) -> Result<u64> {
        Ok(self.board.message_count)
    }
}

#[derive(Accounts)]
#[instruction(message_id: u64, user: Pubkey)]
pub struct IsMessageUpvotedByUser<'info> {
    #[account(
        seeds = [BOARD, board.admin.as_ref()],
        bump = board.bump,
    )]
    pub board: Account<'info, Board>,

    /// CHECK: Only its address is used, as an upvote seed
    #[account(
        seeds = [MESSAGE, board.key().as_ref(), &message_id.to_le_bytes()],
        bump,
    )]
    pub message: UncheckedAccount<'info>,

    /// CHECK: PDA enforced by seeds; absent if the user never upvoted
    #[account(
        seeds = [UPVOTE, message.key().as_ref(), user.as_ref()],
        bump,
    )]
    pub upvote_record: UncheckedAccount<'info>,
}

impl<'info> IsMessageUpvotedByUser<'info> {
    pub fn is_message_upvoted_by_user(&self) -> Result<bool> {
        Ok(load_program_account::<UpvoteRecord>(&self.upvote_record.to_account_info())
            .map(|record| record.upvoted)
            .unwrap_or(false))
    }
}
