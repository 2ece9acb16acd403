// Service exports
pub mod chat;
pub mod roster;
pub mod sessions;

pub use chat::{ChatBook, ChatError, ChatSession};
pub use roster::{Roster, RosterError};
pub use sessions::{Session, SessionError, SessionStore};
