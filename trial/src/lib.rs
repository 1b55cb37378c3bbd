//! Terminal scene for the Trial Dungeon.
//!
//! Collects the player's lines, keeps the transcript, and shows the spirit's
//! replies. All talking to the model goes through [`spirit::Chatter`].

pub mod chat;
pub mod conversation;
pub mod logging;

pub use chat::run_chat;
pub use conversation::Conversation;
pub use logging::init_logging;
