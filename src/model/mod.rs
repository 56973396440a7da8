//! Transient domain values passed between the bot layer and the services.
//!
//! Nothing here is persisted. Each value lives for the duration of one message
//! event and is dropped when the handler returns.

pub mod message;
pub mod outcome;
pub mod track;
