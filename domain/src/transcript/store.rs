//! Append-only transcript for one chat session.

use super::entities::Message;
use crate::endpoint::target::SessionIdentity;

/// Acknowledgment text of the second seed entry.
pub const SEED_ACKNOWLEDGMENT: &str = "Understood";

/// Number of seed entries at the head of every transcript.
pub const SEED_LEN: usize = 2;

/// Ordered, append-only sequence of messages (Entity)
///
/// The first [`SEED_LEN`] entries are a fixed seed pair that primes the
/// upstream context; they are never rendered. Entries are never removed.
#[derive(Debug, Clone)]
pub struct Transcript {
    identity: SessionIdentity,
    entries: Vec<Message>,
}

impl Transcript {
    /// Create an empty transcript owned by the given session.
    pub fn new(identity: SessionIdentity) -> Self {
        Self {
            identity,
            entries: Vec::new(),
        }
    }

    /// Create a transcript that already holds the seed pair.
    pub fn seeded(identity: SessionIdentity) -> Self {
        let mut transcript = Self::new(identity);
        transcript.seed();
        transcript
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    /// Write the seed pair. Does nothing unless the transcript is empty.
    pub fn seed(&mut self) {
        if !self.entries.is_empty() {
            return;
        }
        self.entries.push(Message::user(""));
        self.entries.push(Message::assistant(SEED_ACKNOWLEDGMENT));
    }

    /// Append a message, seeding first if needed.
    pub fn append(&mut self, message: Message) {
        self.seed();
        self.entries.push(message);
    }

    /// All entries including the seed pair.
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    /// Entries after the seed pair.
    pub fn visible(&self) -> &[Message] {
        self.entries.get(SEED_LEN..).unwrap_or(&[])
    }

    /// Visible entries whose content is textual.
    pub fn renderable(&self) -> impl Iterator<Item = &Message> {
        self.visible().iter().filter(|m| m.text().is_some())
    }

    /// Number of visible entries.
    pub fn len(&self) -> usize {
        self.visible().len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::entities::Role;

    fn identity() -> SessionIdentity {
        SessionIdentity::new("user-1", "chat-1")
    }

    #[test]
    fn seed_writes_fixed_pair() {
        let transcript = Transcript::seeded(identity());
        let entries = transcript.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], Message::user(""));
        assert_eq!(entries[1], Message::assistant("Understood"));
    }

    #[test]
    fn seed_is_idempotent() {
        let mut transcript = Transcript::new(identity());
        transcript.seed();
        transcript.seed();
        assert_eq!(transcript.entries().len(), 2);

        transcript.append(Message::user("Hi"));
        transcript.seed();
        assert_eq!(transcript.entries().len(), 3);
    }

    #[test]
    fn append_on_empty_store_seeds_first() {
        let mut transcript = Transcript::new(identity());
        transcript.append(Message::user("Hi"));
        assert_eq!(transcript.entries().len(), 3);
        assert_eq!(transcript.visible(), &[Message::user("Hi")]);
    }

    #[test]
    fn visible_excludes_seed_pair() {
        let mut transcript = Transcript::seeded(identity());
        assert!(transcript.visible().is_empty());
        assert!(transcript.is_empty());

        for turn in 0..5 {
            transcript.append(Message::user(format!("q{turn}")));
            transcript.append(Message::assistant(format!("a{turn}")));
        }

        assert_eq!(transcript.len(), 10);
        assert_eq!(transcript.visible()[0], Message::user("q0"));
        assert!(
            transcript
                .visible()
                .iter()
                .all(|m| m.text() != Some(SEED_ACKNOWLEDGMENT))
        );
    }

    #[test]
    fn renderable_skips_structured_content() {
        let mut transcript = Transcript::seeded(identity());
        transcript.append(Message::user("look this up"));
        transcript.append(Message::structured(
            Role::Assistant,
            serde_json::json!({"type": "tool_use"}),
        ));
        transcript.append(Message::assistant("found it"));

        let rendered: Vec<_> = transcript.renderable().filter_map(|m| m.text()).collect();
        assert_eq!(rendered, vec!["look this up", "found it"]);
        assert_eq!(transcript.len(), 3);
    }
}
