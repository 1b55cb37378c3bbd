use spirit::Turn;

/// Transcript of the current session, capped at `max_turns`.
///
/// Older turns are dropped first so the request sent to the model stays
/// within a predictable size.
#[derive(Clone, Debug)]
pub struct Conversation {
    turns: Vec<Turn>,
    max_turns: usize,
}

impl Conversation {
    pub fn new(max_turns: usize) -> Self {
        Self {
            turns: Vec::new(),
            max_turns,
        }
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
        if self.turns.len() > self.max_turns {
            let excess = self.turns.len() - self.max_turns;
            self.turns.drain(0..excess);
        }
    }

    /// Record a completed exchange.
    pub fn record(&mut self, message: &str, reply: &str) {
        self.push(Turn::user(message));
        self.push(Turn::assistant(reply));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
