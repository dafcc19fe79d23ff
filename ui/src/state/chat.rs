//! Simulated chat session with one agent
//!
//! Every accepted user message schedules exactly one canned assistant reply
//! after a fixed delay. Replies are delivered in the order they were
//! scheduled. Time is supplied by the caller in milliseconds, which keeps the
//! session independent of the browser clock.

use std::collections::VecDeque;

/// Delay between a user message and its simulated reply
pub const REPLY_DELAY_MS: u64 = 1000;

pub const CANNED_REPLY: &str =
    "I'm a simulated response. The actual AI integration will be implemented in the next phase.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Handle for one scheduled reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyTicket(u64);

#[derive(Debug, Clone)]
struct PendingReply {
    ticket: ReplyTicket,
    due_at_ms: u64,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    agent_name: String,
    input: String,
    messages: Vec<Message>,
    pending: VecDeque<PendingReply>,
    reply_delay_ms: u64,
    next_ticket: u64,
}

impl ChatSession {
    pub fn new(agent_name: impl Into<String>) -> Self {
        Self::with_reply_delay(agent_name, REPLY_DELAY_MS)
    }

    pub fn with_reply_delay(agent_name: impl Into<String>, reply_delay_ms: u64) -> Self {
        Self {
            agent_name: agent_name.into(),
            input: String::new(),
            messages: Vec::new(),
            pending: VecDeque::new(),
            reply_delay_ms,
            next_ticket: 0,
        }
    }

    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn reply_delay_ms(&self) -> u64 {
        self.reply_delay_ms
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, ticket: ReplyTicket) -> bool {
        self.pending.iter().any(|p| p.ticket == ticket)
    }

    /// Sends the current input. Blank input is ignored.
    ///
    /// The user message is appended as typed, the input is cleared and one
    /// reply is scheduled `reply_delay_ms` after `now_ms`.
    pub fn submit(&mut self, now_ms: u64) -> Option<ReplyTicket> {
        if self.input.trim().is_empty() {
            return None;
        }

        let content = std::mem::take(&mut self.input);
        self.messages.push(Message::user(content));

        let ticket = ReplyTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.push_back(PendingReply {
            ticket,
            due_at_ms: now_ms + self.reply_delay_ms,
        });
        Some(ticket)
    }

    /// Delivers every reply that is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> usize {
        let mut delivered = 0;
        while self.pending.front().is_some_and(|p| p.due_at_ms <= now_ms) {
            self.pending.pop_front();
            self.messages.push(Message::assistant(CANNED_REPLY));
            delivered += 1;
        }
        delivered
    }

    /// Delivers the reply for `ticket` along with any reply scheduled ahead
    /// of it. Tickets that are unknown or already delivered are ignored.
    pub fn deliver(&mut self, ticket: ReplyTicket) -> usize {
        let Some(position) = self.pending.iter().position(|p| p.ticket == ticket) else {
            return 0;
        };

        for _ in 0..=position {
            self.pending.pop_front();
            self.messages.push(Message::assistant(CANNED_REPLY));
        }
        position + 1
    }

    /// Drops every scheduled reply. Returns how many were dropped.
    pub fn cancel_pending(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }
}
