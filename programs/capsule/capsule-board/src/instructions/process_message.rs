use anchor_lang::prelude::*;
use crate::{
    state::*,
    constants::*,
    helpers::{load_message, store_message},
};

// Process Message Instruction
//
// One-time claim of an active message.
// Any user may claim a public message; a private one only by its target.
// Once processed, every further claim fails.

#[derive(Accounts)]
#[instruction(message_id: u64)]
pub struct ProcessMessage<'info> {
    // Reader claiming the message
    #[account(mut)]
    pub claimer: Signer<'info>,

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

    // Claimer's activity counters
    #[account(
        init_if_needed,
        payer = claimer,
        space = ANCHOR_DISCRIMINATOR + UserActivity::INIT_SPACE,
        seeds = [ACTIVITY, board.key().as_ref(), claimer.key().as_ref()],
        bump,
    )]
    pub activity: Account<'info, UserActivity>,

    pub clock: Sysvar<'info, Clock>,

    pub system_program: Program<'info, System>,
}

impl<'info> ProcessMessage<'info> {
    pub fn process_message(&mut self, message_id: u64, bumps: &ProcessMessageBumps) -> Result<bool> {
        // 1. Pause Check
        self.board.ensure_not_paused()?;

        // 2. Lifecycle + Target Checks
        // missing -> disabled -> pending -> already processed -> wrong target
        let info = self.message.to_account_info();
        let mut message = load_message(&info, &self.board.key(), message_id)?;
        let claimer = self.claimer.key();
        message.claim(&claimer, self.clock.slot)?;
        store_message(&info, &message)?;

        // 3. Activity
        self.activity.bind(claimer, bumps.activity);
        self.activity.record(Activity::Claimed)?;

        msg!("Message {} processed by {}", message_id, claimer);
        Ok(true)
    }
}
