use anchor_lang::prelude::*;

// Variant order fixes the numeric codes (6000 + index)
// Integrators match on these numbers, so only append new variants
#[error_code]
pub enum BoardError {
    // Access control
    #[msg("Only the board admin can perform this action")]
    NotAdmin,

    // Lifecycle errors
    #[msg("Message has already been processed")]
    AlreadyProcessed,

    #[msg("Message is still pending activation")]
    StillPending,

    #[msg("Message does not exist")]
    MessageMissing,

    #[msg("Message is locked")]
    Locked,

    // Input validation errors
    #[msg("Timeout must be between 1 and 52560 slots")]
    InvalidTimeout,

    #[msg("Subject exceeds 64 bytes")]
    InvalidSubjectLength,

    #[msg("Content exceeds 256 bytes")]
    InvalidContentLength,

    #[msg("Unknown message type")]
    InvalidType,

    // Moderation errors
    #[msg("Message has been disabled")]
    Disabled,

    #[msg("Cannot interact with your own message")]
    SelfInteraction,

    // State errors
    #[msg("Board is paused - only admin can unpause")]
    NetworkPaused,

    #[msg("At most 5 tags of up to 32 bytes each")]
    InvalidTags,

    #[msg("Content hash exceeds 256 bytes")]
    InvalidHash,

    #[msg("Target user does not match message visibility")]
    InvalidTarget,

    #[msg("Private flag must be 0 or 1")]
    InvalidPrivateFlag,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    Overflow,
}
