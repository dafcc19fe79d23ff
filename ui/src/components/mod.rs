pub mod agent_card;
pub mod agent_chat;
pub mod create_agent_dialog;
pub mod index;
pub mod notices;
