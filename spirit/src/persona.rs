//! The spirit's character: the preamble prepended to every request and the
//! line spoken when the other realm cannot be reached.

/// Instructions establishing the dungeon guide's voice.
pub const DUNGEON_GUIDE_PROMPT: &str = include_str!("persona.txt");

/// Reply the model is primed to have given to [`DUNGEON_GUIDE_PROMPT`].
pub const DUNGEON_GUIDE_ACKNOWLEDGMENT: &str =
    "I understand. I will guide adventurers through these ancient halls with cryptic wisdom.";

/// Returned in place of any remote or transport failure.
pub const FALLBACK_REPLY: &str = "The ancient spirit seems distant... Perhaps the connection to the other realm is weakened. Try again when the mystical energies align.";

/// Instruction and acknowledgment pair sent ahead of the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Persona {
    instruction: String,
    acknowledgment: String,
}

impl Persona {
    pub fn new(instruction: impl Into<String>, acknowledgment: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            acknowledgment: acknowledgment.into(),
        }
    }

    /// The mysterious dungeon guide.
    pub fn dungeon_guide() -> Self {
        Self::new(DUNGEON_GUIDE_PROMPT.trim_end(), DUNGEON_GUIDE_ACKNOWLEDGMENT)
    }

    /// Sent with the user wire role.
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Sent with the model wire role.
    pub fn acknowledgment(&self) -> &str {
        &self.acknowledgment
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::dungeon_guide()
    }
}
