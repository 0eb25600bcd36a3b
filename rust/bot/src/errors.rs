use pokerview_engine::RenderError;
use thiserror::Error;

/// Failure reported by a [`Messenger`](crate::messenger::Messenger).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Delivery to chat {chat_id} failed: {reason}")]
    Rejected { chat_id: i64, reason: String },

    #[error("Message {message_id} not found in chat {chat_id}")]
    MessageNotFound { chat_id: i64, message_id: i64 },

    #[error("Media group for chat {chat_id} is empty")]
    EmptyMediaGroup { chat_id: i64 },

    #[error("Outbox I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Outbox serialisation error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
