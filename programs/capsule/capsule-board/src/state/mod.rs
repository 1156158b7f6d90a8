pub mod board;
pub mod message;
pub mod message_details;
pub mod upvote_record;
pub mod user_activity;

pub use board::*;
pub use message::*;
pub use message_details::*;
pub use upvote_record::*;
pub use user_activity::*;
