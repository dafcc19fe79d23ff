//! Browser-independent UI state
//!
//! The components are views over these types. All validation, ordering and
//! timing rules live here so they can be tested without a browser.

pub mod chat;
pub mod draft;
pub mod notice;
pub mod registry;

pub use chat::{ChatSession, Message, ReplyTicket, Role};
pub use draft::{AgentDraft, AgentSubmission, DraftError, SelectedFile};
pub use notice::{Notice, NoticeId, NoticeQueue, NoticeVariant};
pub use registry::{Agent, AgentRegistry, IndexView};
