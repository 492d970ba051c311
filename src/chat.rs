use crate::models::{ChatMessage, ChatRole};

pub const SCRIPTED_REPLY: &str = "I understand! Let me adjust your study plan based on that feedback. I'll optimize for your preferences.";

/// Study assistant transcript. Every appended message gets the next
/// sequence number, so order is by `seq` regardless of reply timing.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_seq: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Transcript {
    pub fn new(opening: Vec<ChatMessage>) -> Self {
        let next_seq = opening.iter().map(|m| m.seq).max().unwrap_or(0) + 1;
        let mut messages = opening;
        messages.sort_by_key(|m| m.seq);
        Self { messages, next_seq }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, role: ChatRole, content: String) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.messages.push(ChatMessage { seq, role, content });
        seq
    }

    /// Send a student message followed by the scripted reply. Blank input
    /// is ignored and returns `None`.
    pub fn send(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let seq = self.push(ChatRole::Student, text.to_string());
        self.push_reply(SCRIPTED_REPLY);
        tracing::debug!(seq, "chat message sent");
        Some(seq)
    }

    pub fn push_reply(&mut self, content: &str) -> u64 {
        self.push(ChatRole::Assistant, content.to_string())
    }
}
