use anyhow::{Context, Result};
use spirit::{Chatter, FALLBACK_REPLY};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::conversation::Conversation;

pub const TITLE: &str = "THE TRIAL DUNGEON";
pub const GREETING: &str =
    "A cold whisper stirs the torchlight. Speak, adventurer, and the ancient spirit may answer.";

const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

/// Read player lines from `input` and print the spirit's replies to `output`.
///
/// Ends at end of input or on `/quit`. Exchanges answered with the fallback
/// line are not recorded, so the player can simply ask again.
///
/// # Errors
///
/// Returns an error if the chatter is misconfigured or if `output` cannot be
/// written. The conversation is left as it was before the failing line.
pub async fn run_chat<R, W>(
    chatter: &dyn Chatter,
    conversation: &mut Conversation,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output
        .write_all(format!("{TITLE}\n\n{GREETING}\n").as_bytes())
        .await?;
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.contains(&message) {
            info!("player left the dungeon");
            break;
        }

        let reply = chatter
            .send(message, conversation.turns())
            .await
            .context("the spirit cannot be summoned")?;
        if reply == FALLBACK_REPLY {
            debug!("fallback reply; exchange not recorded");
        } else {
            conversation.record(message, &reply);
        }
        output
            .write_all(format!("Spirit: {reply}\n").as_bytes())
            .await?;
        output.flush().await?;
    }
    Ok(())
}
