//! # pokerview-bot: Chat Presentation Layer
//!
//! Turns rendered tables and game values into chat messages. The chat
//! service itself sits behind the [`Messenger`] trait; [`OutboxMessenger`]
//! is a file-backed implementation for local runs.

pub mod errors;
pub mod logging;
pub mod markup;
pub mod messenger;
pub mod outbox;
pub mod viewer;

pub use errors::{BotError, TransportError};
pub use logging::{init_logging, init_test_logging, CapturedEvent, LogCapture};
pub use markup::{
    InlineKeyboardButton, InlineKeyboardMarkup, ReplyKeyboardMarkup, ReplyMarkup, TurnAction,
};
pub use messenger::{ChatId, MessageId, Messenger, ParseMode, Photo, TextMessage};
pub use outbox::{OutboxMessenger, OutboxRecord};
pub use viewer::{PokerBotViewer, TurnSummary};
