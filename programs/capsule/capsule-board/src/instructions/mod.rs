// Instructions module
// - initialize_board (admin becomes the signer)
// - post_message
// - process_message (one-time claim)
// - upvote_message (once per user)
// - report_message
// - disable_message (author or admin)
// - toggle_pause (admin only)
// - discover_message
// - views: get_message_info, get_user_stats, get_total_messages, is_message_upvoted_by_user

pub mod disable_message;
pub mod discover_message;
pub mod initialize_board;
pub mod post_message;
pub mod process_message;
pub mod report_message;
pub mod toggle_pause;
pub mod upvote_message;
pub mod views;

pub use disable_message::*;
pub use discover_message::*;
pub use initialize_board::*;
pub use post_message::*;
pub use process_message::*;
pub use report_message::*;
pub use toggle_pause::*;
pub use upvote_message::*;
pub use views::*;
