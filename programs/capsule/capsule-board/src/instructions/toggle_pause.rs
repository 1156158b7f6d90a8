use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

// Toggle Pause Instruction
//
// Allows the board admin to pause/unpause the board.
// While paused: post, process, upvote, report and discover are rejected.
// Reads, disable and toggle_pause itself keep working.
// Returns the new pause state.

#[derive(Accounts)]
pub struct TogglePause<'info> {
    // Must be the board admin
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [BOARD, board.admin.as_ref()],
        bump = board.bump,
    )]
    pub board: Account<'info, Board>,
}

impl<'info> TogglePause<'info> {
    pub fn toggle_pause(&mut self) -> Result<bool> {
        // Admin check happens inside, before the flag flips
        let paused = self.board.toggle_pause(&self.admin.key())?;

        msg!(
            "Board {} by {}",
            if paused { "paused" } else { "unpaused" },
            self.admin.key()
        );
        Ok(paused)
    }
}
