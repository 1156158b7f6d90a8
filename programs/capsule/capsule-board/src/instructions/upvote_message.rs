use anchor_lang::prelude::*;
use crate::{
    state::*,
    constants::*,
    helpers::{load_message, store_message},
};

// Upvote Message Instruction
//
// Each user can upvote an active message at most once.
// The (message, voter) record PDA is the uniqueness guard.
// Upvoting your own message is allowed.

#[derive(Accounts)]
#[instruction(message_id: u64)]
pub struct UpvoteMessage<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

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

    // Upvote record
    // Seeds: ["upvote", message, voter]
    // init_if_needed so a repeat vote reaches the AlreadyProcessed check
    #[account(
        init_if_needed,
        payer = voter,
        space = ANCHOR_DISCRIMINATOR + UpvoteRecord::INIT_SPACE,
        seeds = [UPVOTE, message.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub upvote_record: Account<'info, UpvoteRecord>,

    #[account(
        init_if_needed,
        payer = voter,
        space = ANCHOR_DISCRIMINATOR + UserActivity::INIT_SPACE,
        seeds = [ACTIVITY, board.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub activity: Account<'info, UserActivity>,

    pub clock: Sysvar<'info, Clock>,

    pub system_program: Program<'info, System>,
}

impl<'info> UpvoteMessage<'info> {
    pub fn upvote_message(&mut self, message_id: u64, bumps: &UpvoteMessageBumps) -> Result<bool> {
        // 1. Pause Check
        self.board.ensure_not_paused()?;

        let voter = self.voter.key();
        let height = self.clock.slot;

        // 2. Lifecycle Checks
        let info = self.message.to_account_info();
        let mut message = load_message(&info, &self.board.key(), message_id)?;
        message.ensure_visible(height)?;

        // 3. Double Vote Check
        // A set record means this voter already upvoted this message
        self.upvote_record
            .record(self.message.key(), voter, height, bumps.upvote_record)?;
        message.add_upvote(height)?;
        store_message(&info, &message)?;

        // 4. Activity
        self.activity.bind(voter, bumps.activity);
        self.activity.record(Activity::Upvoted)?;

        msg!("Message {} upvoted by {}", message_id, voter);
        Ok(true)
    }
}
