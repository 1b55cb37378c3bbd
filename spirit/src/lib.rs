//! Conversation adapter for the dungeon's ancient spirit.
//!
//! The crate turns a player's message plus the prior transcript into a single
//! request against Google's Gemini `generateContent` endpoint and hands back
//! an in-character reply. Remote failures never reach the caller: they are
//! logged and replaced by [`FALLBACK_REPLY`]. Only a missing credential is
//! reported, as [`ConfigurationError`].

pub mod clean;
pub mod config;
pub mod error;
pub mod gemini;
pub mod guide;
pub mod persona;
pub mod types;

pub use crate::clean::clean_reply;
pub use crate::config::GeminiConfig;
pub use crate::error::{ConfigurationError, ReplyError};
pub use crate::guide::DungeonGuide;
pub use crate::persona::{FALLBACK_REPLY, Persona};
pub use crate::types::{Chatter, Role, Turn};
