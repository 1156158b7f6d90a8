// Helpers for accounts that are passed unchecked because they may not exist yet
//
// Instructions that address a message by id take its PDA as UncheckedAccount
// so a missing account can be reported with a board error (or a default value)
// instead of failing account validation.

use anchor_lang::prelude::*;

use crate::{errors::BoardError, state::Message};

// Deserialize a program-owned account, None if absent or of another type
pub fn load_program_account<T: AccountDeserialize>(info: &AccountInfo) -> Option<T> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return None;
    }
    let data = info.try_borrow_data().ok()?;
    T::try_deserialize(&mut &data[..]).ok()
}

// Load the message with the given id on the given board
pub fn load_message(info: &AccountInfo, board: &Pubkey, message_id: u64) -> Result<Message> {
    let message = load_program_account::<Message>(info).ok_or(BoardError::MessageMissing)?;
    require!(
        &message.board == board && message.id == message_id,
        BoardError::MessageMissing
    );
    Ok(message)
}

// Write a loaded message back into its account
// The account must come from load_message, so it is program owned and sized
pub fn store_message(info: &AccountInfo, message: &Message) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    message.try_serialize(&mut &mut data[..])
}
