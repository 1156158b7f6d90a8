use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

// Initialize Board Instruction
//
// Creates the board singleton for the signing admin:
// - admin identity is fixed here and never changes
// - board starts unpaused with no messages and a zero discovery seed

#[derive(Accounts)]
pub struct InitializeBoard<'info> {
    // Admin of the new board, pays for the account
    #[account(mut)]
    pub admin: Signer<'info>,

    // Board PDA
    // Seeds: ["board", admin]
    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + Board::INIT_SPACE,
        seeds = [BOARD, admin.key().as_ref()],
        bump,
    )]
    pub board: Account<'info, Board>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeBoard<'info> {
    pub fn initialize_board(&mut self, bumps: &InitializeBoardBumps) -> Result<()> {
        self.board.set_inner(Board {
            admin: self.admin.key(),
            paused: false,
            message_count: 0,
            random_seed: 0,
            bump: bumps.board,
        });

        msg!("Board initialized by {}", self.admin.key());
        Ok(())
    }
}
