use anchor_lang::prelude::*;

// Descriptive metadata, written once alongside its Message
#[account]
#[derive(InitSpace, Debug)]
pub struct MessageDetails {
    pub message_id: u64,

    #[max_len(64)]
    pub subject: String,

    #[max_len(256)]
    pub content: String,

    pub creation_block: u64,

    // Equal to creation_block until details become editable
    pub last_update: u64,

    #[max_len(5, 32)]
    pub tags: Vec<String>,

    // PDA bump seed
    pub bump: u8,
}
