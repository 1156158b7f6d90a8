pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["board", admin]
pub const BOARD: &[u8] = b"board";

// Seeds for PDA derivation: ["message", board, message_id]
pub const MESSAGE: &[u8] = b"message";

// Seeds for PDA derivation: ["details", board, message_id]
pub const DETAILS: &[u8] = b"details";

// Seeds for PDA derivation: ["upvote", message, voter]
pub const UPVOTE: &[u8] = b"upvote";

// Seeds for PDA derivation: ["activity", board, user]
pub const ACTIVITY: &[u8] = b"activity";

// Field limits, in UTF-8 bytes rather than chars
// Accounts are allocated from these (see #[max_len] on Message and
// MessageDetails) and get_message_info must fit in 1024 bytes of return data,
// so a multi-byte subject hits the limit with fewer than 64 chars
pub const MAX_HASH_LEN: usize = 256;
pub const MAX_SUBJECT_LEN: usize = 64;
pub const MAX_CONTENT_LEN: usize = 256;
pub const MAX_TAGS: usize = 5;
pub const MAX_TAG_LEN: usize = 32;

// Timeout bounds in slots
// Upper bound is one year of ten-minute blocks
pub const MIN_TIMEOUT: u64 = 1;
pub const MAX_TIMEOUT: u64 = 52_560;
