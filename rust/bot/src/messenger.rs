//! Chat transport contract.
//!
//! The viewer never talks to a chat service directly; it builds these value
//! types and hands them to a [`Messenger`]. Implementations decide how a
//! message actually leaves the process.

use serde::{Deserialize, Serialize};

use crate::errors::TransportError;
use crate::markup::ReplyMarkup;

pub type ChatId = i64;
pub type MessageId = i64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    #[default]
    Markdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMessage {
    pub chat_id: ChatId,
    pub text: String,
    pub parse_mode: ParseMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<MessageId>,
    pub disable_notification: bool,
    pub disable_web_page_preview: bool,
}

impl TextMessage {
    /// Markdown text delivered without a notification sound.
    pub fn silent(chat_id: ChatId, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            parse_mode: ParseMode::Markdown,
            reply_markup: None,
            reply_to: None,
            disable_notification: true,
            disable_web_page_preview: false,
        }
    }

    pub fn with_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into());
        self
    }

    pub fn replying_to(mut self, message_id: MessageId) -> Self {
        self.reply_to = Some(message_id);
        self
    }
}

/// A single encoded picture. The bytes never appear in serialised form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub chat_id: ChatId,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub parse_mode: ParseMode,
    pub disable_notification: bool,
}

impl Photo {
    pub fn silent(chat_id: ChatId, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            chat_id,
            bytes,
            file_name: file_name.into(),
            caption: None,
            parse_mode: ParseMode::Markdown,
            disable_notification: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMediaPhoto {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaGroup {
    pub chat_id: ChatId,
    pub media: Vec<InputMediaPhoto>,
    pub disable_notification: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dice {
    pub chat_id: ChatId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<MessageId>,
    pub emoji: String,
    pub disable_notification: bool,
}

pub const DEFAULT_DICE_EMOJI: &str = "🎲";

/// Outbound side of a chat service.
///
/// Every send returns the id the service assigned to the new message.
pub trait Messenger {
    fn send_message(&self, message: &TextMessage) -> Result<MessageId, TransportError>;

    fn send_photo(&self, photo: &Photo) -> Result<MessageId, TransportError>;

    /// Returns one id per item of the group, in order.
    fn send_media_group(&self, group: &MediaGroup) -> Result<Vec<MessageId>, TransportError>;

    fn send_dice(&self, dice: &Dice) -> Result<MessageId, TransportError>;

    /// Replaces the markup of an existing message; `None` removes it.
    fn edit_message_reply_markup(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        markup: Option<&ReplyMarkup>,
    ) -> Result<(), TransportError>;

    fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<(), TransportError>;
}

impl<M: Messenger + ?Sized> Messenger for &M {
    fn send_message(&self, message: &TextMessage) -> Result<MessageId, TransportError> {
        (**self).send_message(message)
    }

    fn send_photo(&self, photo: &Photo) -> Result<MessageId, TransportError> {
        (**self).send_photo(photo)
    }

    fn send_media_group(&self, group: &MediaGroup) -> Result<Vec<MessageId>, TransportError> {
        (**self).send_media_group(group)
    }

    fn send_dice(&self, dice: &Dice) -> Result<MessageId, TransportError> {
        (**self).send_dice(dice)
    }

    fn edit_message_reply_markup(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        markup: Option<&ReplyMarkup>,
    ) -> Result<(), TransportError> {
        (**self).edit_message_reply_markup(chat_id, message_id, markup)
    }

    fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<(), TransportError> {
        (**self).delete_message(chat_id, message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_text_defaults() {
        let msg = TextMessage::silent(7, "hello").replying_to(3);
        assert_eq!(msg.parse_mode, ParseMode::Markdown);
        assert!(msg.disable_notification);
        assert!(!msg.disable_web_page_preview);
        assert_eq!(msg.reply_to, Some(3));
        assert!(msg.reply_markup.is_none());
    }

    #[test]
    fn photo_bytes_are_not_serialised() {
        let photo = Photo::silent(1, "table.jpeg", vec![0xFF, 0xD8]);
        let json = serde_json::to_value(&photo).unwrap();
        assert!(json.get("bytes").is_none());
        assert_eq!(json["file_name"], "table.jpeg");
        assert_eq!(json["parse_mode"], "markdown");
        assert!(json.get("caption").is_none());
    }

    #[test]
    fn optional_fields_are_omitted() {
        let json = serde_json::to_value(TextMessage::silent(1, "x")).unwrap();
        assert!(json.get("reply_to").is_none());
        assert!(json.get("reply_markup").is_none());
    }
}
