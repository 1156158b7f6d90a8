use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, validation::PostParams};

// Post Message Instruction
//
// Creates the next message on the board together with its details.
// The message becomes visible at activation_point = current slot + timeout.
// Returns the new message id.

#[derive(Accounts)]
pub struct PostMessage<'info> {
    // Author of the message, pays for the new accounts
    #[account(mut)]
    pub author: Signer<'info>,

    #[account(
        mut,
        seeds = [BOARD, board.admin.as_ref()],
        bump = board.bump,
    )]
    pub board: Account<'info, Board>,

    // Message PDA for the next id
    // Seeds: ["message", board, message_count]
    #[account(
        init,
        payer = author,
        space = ANCHOR_DISCRIMINATOR + Message::INIT_SPACE,
        seeds = [
            MESSAGE,
            board.key().as_ref(),
            &board.message_count.to_le_bytes(),
        ],
        bump,
    )]
    pub message: Account<'info, Message>,

    // Details PDA, same id
    // Seeds: ["details", board, message_count]
    #[account(
        init,
        payer = author,
        space = ANCHOR_DISCRIMINATOR + MessageDetails::INIT_SPACE,
        seeds = [
            DETAILS,
            board.key().as_ref(),
            &board.message_count.to_le_bytes(),
        ],
        bump,
    )]
    pub details: Account<'info, MessageDetails>,

    // Author's activity counters
    // Seeds: ["activity", board, author]
    #[account(
        init_if_needed,
        payer = author,
        space = ANCHOR_DISCRIMINATOR + UserActivity::INIT_SPACE,
        seeds = [ACTIVITY, board.key().as_ref(), author.key().as_ref()],
        bump,
    )]
    pub activity: Account<'info, UserActivity>,

    pub clock: Sysvar<'info, Clock>,

    pub system_program: Program<'info, System>,
}

impl<'info> PostMessage<'info> {
    pub fn post_message(&mut self, params: PostParams, bumps: &PostMessageBumps) -> Result<u64> {
        // 1. Pause Check
        self.board.ensure_not_paused()?;

        // 2. Input Validation
        // All length, range and type guards run before any write
        let checked = params.validate()?;

        let height = self.clock.slot;
        let activation_point = height
            .checked_add(params.timeout)
            .ok_or(BoardError::Overflow)?;

        // 3. Allocate Id
        // Matches the seed used for the message and details PDAs
        let board_key = self.board.key();
        let message_id = self.board.allocate_message_id()?;

        self.message.set_inner(Message {
            board: board_key,
            id: message_id,
            author: self.author.key(),
            content_hash: params.content_hash,
            activation_point,
            is_private: checked.is_private,
            target_user: checked.target_user,
            is_processed: false,
            is_disabled: false,
            upvotes: 0,
            downvotes: 0,
            msg_type: checked.msg_type,
            bump: bumps.message,
        });

        self.details.set_inner(MessageDetails {
            message_id,
            subject: params.subject,
            content: params.content,
            creation_block: height,
            last_update: height,
            tags: params.tags,
            bump: bumps.details,
        });

        // 4. Activity
        self.activity.bind(self.author.key(), bumps.activity);
        self.activity.record(Activity::Posted)?;

        msg!(
            "Message {} posted by {}, active at slot {}",
            message_id,
            self.author.key(),
            activation_point
        );
        Ok(message_id)
    }
}
