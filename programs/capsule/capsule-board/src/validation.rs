// Input validation for post_message
//
// Every guard runs before the first account write. Lengths are measured
// in bytes, which is what the account space reserves for each field.

use anchor_lang::prelude::*;
use crate::{constants::*, errors::BoardError, state::MessageType};

// Arguments of post_message as they arrive on the wire
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct PostParams {
    pub content_hash: String,
    pub subject: String,
    pub content: String,
    pub msg_type: u8,
    pub timeout: u64,
    pub is_private: u8,
    pub target_user: Option<Pubkey>,
    pub tags: Vec<String>,
}

// Typed view of PostParams once every guard has passed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckedPost {
    pub msg_type: MessageType,
    pub is_private: bool,
    pub target_user: Option<Pubkey>,
}

impl PostParams {
    pub fn validate(&self) -> Result<CheckedPost> {
        require!(
            self.content_hash.len() <= MAX_HASH_LEN,
            BoardError::InvalidHash
        );
        require!(
            self.subject.len() <= MAX_SUBJECT_LEN,
            BoardError::InvalidSubjectLength
        );
        require!(
            self.content.len() <= MAX_CONTENT_LEN,
            BoardError::InvalidContentLength
        );
        let msg_type = MessageType::try_from(self.msg_type)?;
        validate_timeout(self.timeout)?;
        validate_tags(&self.tags)?;
        let is_private = parse_private_flag(self.is_private)?;
        validate_target(is_private, self.target_user.as_ref())?;

        Ok(CheckedPost {
            msg_type,
            is_private,
            target_user: self.target_user,
        })
    }
}

pub fn validate_timeout(timeout: u64) -> Result<()> {
    require!(
        (MIN_TIMEOUT..=MAX_TIMEOUT).contains(&timeout),
        BoardError::InvalidTimeout
    );
    Ok(())
}

pub fn validate_tags(tags: &[String]) -> Result<()> {
    require!(tags.len() <= MAX_TAGS, BoardError::InvalidTags);
    require!(
        tags.iter().all(|tag| tag.len() <= MAX_TAG_LEN),
        BoardError::InvalidTags
    );
    Ok(())
}

// Explicit boolean guard on the raw flag byte
pub fn parse_private_flag(flag: u8) -> Result<bool> {
    match flag {
        0 => Ok(false),
        1 => Ok(true),
        _ => err!(BoardError::InvalidPrivateFlag),
    }
}

// A target is required for private messages and forbidden otherwise
pub fn validate_target(is_private: bool, target_user: Option<&Pubkey>) -> Result<()> {
    require!(
        is_private == target_user.is_some(),
        BoardError::InvalidTarget
    );
    Ok(())
}
