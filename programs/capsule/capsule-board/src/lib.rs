// Capsule Board Program
//
// A ledger of time-delayed, moderated messages. A message becomes readable
// once the slot reaches its activation point; readers can claim it once,
// upvote it once each, and report it any number of times. Authors and the
// board admin can disable messages, and the admin can pause the board.
//
// Time is always the slot of the supplied Clock sysvar and the caller is
// always the instruction signer. There is no other source of time or
// randomness.

use anchor_lang::prelude::*;
pub mod constants;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod selector;
pub mod state;
pub mod validation;


pub use errors::*;
pub use instructions::*;
pub use state::*;
pub use validation::PostParams;

declare_id!("CapBrdQm7dWv8ZzVtV4W3vM1s5bHKcVhM6dGkYqoRzfx");

#[program]
pub mod capsule_board {
    use super::*;

    // Create the board; the signer becomes its admin for good
    pub fn initialize_board(ctx: Context<InitializeBoard>) -> Result<()> {
        ctx.accounts.initialize_board(&ctx.bumps)
    }

    // Post the next message; visible from current slot + timeout
    // Returns the new message id
    pub fn post_message(ctx: Context<PostMessage>, params: PostParams) -> Result<u64> {
        ctx.accounts.post_message(params, &ctx.bumps)
    }

    // Claim an active message, once per message
    // Private messages can only be claimed by their target
    pub fn process_message(ctx: Context<ProcessMessage>, message_id: u64) -> Result<bool> {
        ctx.accounts.process_message(message_id, &ctx.bumps)
    }

    // Upvote an active message, once per user
    pub fn upvote_message(ctx: Context<UpvoteMessage>, message_id: u64) -> Result<bool> {
        ctx.accounts.upvote_message(message_id, &ctx.bumps)
    }

    // Report a message; anyone, any time, repeatedly
    pub fn report_message(ctx: Context<ReportMessage>, message_id: u64) -> Result<bool> {
        ctx.accounts.report_message(message_id)
    }

    // Permanently disable a message (author or admin)
    pub fn disable_message(ctx: Context<DisableMessage>, message_id: u64) -> Result<bool> {
        ctx.accounts.disable_message(message_id)
    }

    // Flip the pause flag (admin only); returns the new state
    pub fn toggle_pause(ctx: Context<TogglePause>) -> Result<bool> {
        ctx.accounts.toggle_pause()
    }

    // Return the message selected by the board's seed chain
    pub fn discover_message(ctx: Context<DiscoverMessage>) -> Result<Message> {
        ctx.accounts.discover_message()
    }

    // Read-only views

    pub fn get_message_info(ctx: Context<GetMessageInfo>, message_id: u64) -> Result<MessageInfo> {
        ctx.accounts.get_message_info(message_id)
    }

    pub fn get_user_stats(ctx: Context<GetUserStats>, _user: Pubkey) -> Result<UserStats> {
        ctx.accounts.get_user_stats()
    }

    pub fn get_total_messages(ctx: Context<GetTotalMessages>) -> Result<u64> {
        ctx.accounts.get_total_messages()
    }

    pub fn is_message_upvoted_by_user(
        ctx: Context<IsMessageUpvotedByUser>,
        _message_id: u64,
        _user: Pubkey,
    ) -> Result<bool> {
        ctx.accounts.is_message_upvoted_by_user()
    }
}
