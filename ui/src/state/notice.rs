//! Transient user-facing notices
//!
//! Notices are non-blocking status messages with a title, a description and
//! an optional destructive severity. The queue keeps at most `limit` entries;
//! the oldest one is evicted when a new notice would exceed it. Each entry
//! records when it was pushed, and `expire` drops entries that have outlived
//! the notice lifetime. Time is supplied by the caller in milliseconds.

use std::collections::VecDeque;

use super::draft::DraftError;

/// Maximum number of notices shown at once
pub const NOTICE_LIMIT: usize = 3;

/// How long a notice stays on screen before it is dismissed automatically
pub const NOTICE_LIFETIME_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn agent_created() -> Self {
        Self::info("Agent Created", "Your new agent has been created successfully.")
    }

    pub fn agent_deleted() -> Self {
        Self::info("Agent Deleted", "The agent has been deleted successfully.")
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

impl From<&DraftError> for Notice {
    fn from(err: &DraftError) -> Self {
        match err {
            DraftError::NameRequired => {
                Self::destructive("Name required", "Please enter a name for your agent")
            }
            DraftError::ContentRequired => {
                Self::destructive("Content required", "Please add at least one file or URL")
            }
            DraftError::InvalidUrl(_) => Self::destructive("Invalid URL", "Please enter a valid URL"),
        }
    }
}

impl From<DraftError> for Notice {
    fn from(err: DraftError) -> Self {
        Self::from(&err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

#[derive(Debug, Clone)]
struct NoticeEntry {
    id: NoticeId,
    notice: Notice,
    pushed_at_ms: u64,
}

#[derive(Debug, Clone)]
pub struct NoticeQueue {
    entries: VecDeque<NoticeEntry>,
    limit: usize,
    lifetime_ms: u64,
    next_id: u64,
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::with_limit(NOTICE_LIMIT)
    }
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
            lifetime_ms: NOTICE_LIFETIME_MS,
            next_id: 0,
        }
    }

    pub fn lifetime_ms(&self) -> u64 {
        self.lifetime_ms
    }

    pub fn push(&mut self, notice: Notice, now_ms: u64) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;

        self.entries.push_back(NoticeEntry {
            id,
            notice,
            pushed_at_ms: now_ms,
        });
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        id
    }

    /// Removes the notice with `id`. Returns false if it is already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() < before
    }

    /// Drops every notice pushed at least `lifetime_ms` before `now_ms`.
    /// Returns how many were dropped.
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let lifetime_ms = self.lifetime_ms;
        let before = self.entries.len();
        self.entries
            .retain(|entry| now_ms.saturating_sub(entry.pushed_at_ms) < lifetime_ms);
        before - self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NoticeId, &Notice)> {
        self.entries.iter().map(|entry| (entry.id, &entry.notice))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
