use anchor_lang::prelude::*;
use crate::{
    state::*,
    constants::*,
    helpers::{load_message, store_message},
};

// Report Message Instruction
//
// Adds one downvote per call. Reports are open before activation and are not
// deduplicated, so the same reporter may report repeatedly.

#[derive(Accounts)]
#[instruction(message_id: u64)]
pub struct ReportMessage<'info> {
    pub reporter: Signer<'info>,

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

impl<'info> ReportMessage<'info> {
    pub fn report_message(&mut self, message_id: u64) -> Result<bool> {
        self.board.ensure_not_paused()?;

        let info = self.message.to_account_info();
        let mut message = load_message(&info, &self.board.key(), message_id)?;
        message.add_report()?;
        store_message(&info, &message)?;

        msg!(
            "Message {} reported by {} ({} reports)",
            message_id,
            self.reporter.key(),
            message.downvotes
        );
        Ok(true)
    }
}
