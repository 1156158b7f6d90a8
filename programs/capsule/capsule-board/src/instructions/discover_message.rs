use anchor_lang::prelude::*;
use crate::{
    state::*,
    constants::*,
    helpers::load_message,
    selector::{IndexSelector, SeedSelector},
};

// Discover Message Instruction
//
// Returns the message picked by the board's seed chain:
//   index = random_seed % message_count, then random_seed += current slot
//
// The index is predictable from public state, so the client derives the
// candidate message PDA ahead of time (see SeedSelector::peek) and passes it
// in. A candidate that is not the selected message fails with MessageMissing.

#[derive(Accounts)]
pub struct DiscoverMessage<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [BOARD, board.admin.as_ref()],
        bump = board.bump,
    )]
    pub board: Account<'info, Board>,

    /// CHECK: Deserialized and matched against the selected id in the handler
    pub candidate: UncheckedAccount<'info>,

    pub clock: Sysvar<'info, Clock>,
}

impl<'info> DiscoverMessage<'info> {
    pub fn discover_message(&mut self) -> Result<Message> {
        // 1. Pause Check
        self.board.ensure_not_paused()?;

        // 2. Select
        // Fails on an empty board before the seed moves
        let total = self.board.message_count;
        let index = SeedSelector::new(&mut self.board.random_seed)
            .select(self.clock.slot, total)?;

        // 3. Candidate Check
        let message = load_message(
            &self.candidate.to_account_info(),
            &self.board.key(),
            index,
        )?;

        msg!("Discovered message {} for {}", index, self.caller.key());
        Ok(message)
    }
}
