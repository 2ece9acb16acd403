use crate::models::{ChatMessage, Sender};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Errors that can occur with chat operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("Chat with candidate {0} is not open")]
    NotOpen(u32),
}

#[derive(Debug, Default)]
struct Transcript {
    open: bool,
    next_id: u64,
    messages: Vec<ChatMessage>,
    pending_replies: Vec<JoinHandle<()>>,
}

impl Transcript {
    fn push(&mut self, text: String, sender: Sender) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
            sent_at: chrono::Utc::now(),
        });
    }
}

/// A simulated conversation with one candidate
///
/// Every message from the viewer schedules a canned reply. Pending replies
/// are aborted on close, and a reply that fires after close is dropped.
#[derive(Debug, Clone)]
pub struct ChatSession {
    candidate_id: u32,
    transcript: Arc<Mutex<Transcript>>,
}

impl ChatSession {
    /// Open a chat seeded with the candidate's greeting
    pub fn open(candidate_id: u32, greeting: String) -> Self {
        let mut transcript = Transcript {
            open: true,
            ..Transcript::default()
        };
        transcript.push(greeting, Sender::Them);

        Self {
            candidate_id,
            transcript: Arc::new(Mutex::new(transcript)),
        }
    }

    pub fn candidate_id(&self) -> u32 {
        self.candidate_id
    }

    // A poisoned lock only means a reply task panicked mid-push; the
    // transcript itself is still usable.
    fn lock(&self) -> MutexGuard<'_, Transcript> {
        self.transcript.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_open(&self) -> bool {
        self.lock().open
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock().messages.clone()
    }

    pub fn pending_replies(&self) -> usize {
        self.lock()
            .pending_replies
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Send a message and schedule the canned reply
    ///
    /// Whitespace-only text is ignored and returns `Ok(false)`.
    /// Must be called from within a tokio runtime.
    pub fn send(&self, text: &str, reply: String, delay: Duration) -> Result<bool, ChatError> {
        let mut transcript = self.lock();
        if !transcript.open {
            return Err(ChatError::NotOpen(self.candidate_id));
        }
        if text.trim().is_empty() {
            return Ok(false);
        }

        transcript.push(text.to_string(), Sender::Me);

        let shared = Arc::clone(&self.transcript);
        let candidate_id = self.candidate_id;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut transcript = shared.lock().unwrap_or_else(|e| e.into_inner());
            if transcript.open {
                transcript.push(reply, Sender::Them);
            } else {
                tracing::debug!("Discarding reply for closed chat {}", candidate_id);
            }
        });

        transcript.pending_replies.retain(|h| !h.is_finished());
        transcript.pending_replies.push(handle);
        Ok(true)
    }

    /// Close the chat and cancel every pending reply
    pub fn close(&self) {
        let mut transcript = self.lock();
        transcript.open = false;
        let cancelled = transcript.pending_replies.len();
        for handle in transcript.pending_replies.drain(..) {
            handle.abort();
        }
        if cancelled > 0 {
            tracing::debug!(
                "Closed chat {} and cancelled {} pending replies",
                self.candidate_id,
                cancelled
            );
        }
    }
}

/// All chats belonging to one viewer session
#[derive(Debug, Default)]
pub struct ChatBook {
    chats: Mutex<HashMap<u32, ChatSession>>,
}

impl ChatBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u32, ChatSession>> {
        self.chats.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Open a chat, or return the one already open with this candidate
    pub fn open_with<F>(&self, candidate_id: u32, greeting: F) -> ChatSession
    where
        F: FnOnce() -> String,
    {
        let mut chats = self.lock();
        if let Some(existing) = chats.get(&candidate_id).filter(|c| c.is_open()) {
            return existing.clone();
        }

        let chat = ChatSession::open(candidate_id, greeting());
        chats.insert(candidate_id, chat.clone());
        tracing::debug!("Opened chat with candidate {}", candidate_id);
        chat
    }

    pub fn get(&self, candidate_id: u32) -> Result<ChatSession, ChatError> {
        self.lock()
            .get(&candidate_id)
            .cloned()
            .ok_or(ChatError::NotOpen(candidate_id))
    }

    /// Close and forget a chat
    pub fn close(&self, candidate_id: u32) -> Result<(), ChatError> {
        let chat = self
            .lock()
            .remove(&candidate_id)
            .ok_or(ChatError::NotOpen(candidate_id))?;
        chat.close();
        Ok(())
    }

    pub fn close_all(&self) {
        let chats: Vec<ChatSession> = self.lock().drain().map(|(_, chat)| chat).collect();
        for chat in chats {
            chat.close();
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
