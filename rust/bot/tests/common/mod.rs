#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use pokerview_bot::markup::ReplyMarkup;
use pokerview_bot::messenger::{
    ChatId, Dice, MediaGroup, MessageId, Messenger, Photo, TextMessage,
};
use pokerview_bot::TransportError;
use pokerview_engine::assets::{MemoryAssets, Typeface};
use pokerview_engine::layout::Point;

#[derive(Debug, Default)]
pub struct BlockTypeface;

impl Typeface for BlockTypeface {
    fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        origin: Point,
        size: f32,
        color: Rgba<u8>,
        text: &str,
    ) {
        let (w, h) = self.text_size(size, text);
        if w > 0 && h > 0 {
            draw_filled_rect_mut(canvas, Rect::at(origin.x, origin.y).of_size(w, h), color);
        }
    }

    fn text_size(&self, size: f32, text: &str) -> (u32, u32) {
        (text.chars().count() as u32 * 8, size.round() as u32)
    }
}

pub fn fixture_assets() -> MemoryAssets {
    MemoryAssets::new(
        RgbaImage::from_pixel(640, 400, Rgba([0, 100, 0, 255])),
        RgbaImage::from_pixel(40, 52, Rgba([0, 0, 200, 255])),
        Arc::new(BlockTypeface),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Message(TextMessage),
    Photo(Photo),
    MediaGroup(MediaGroup),
    Dice(Dice),
    EditMarkup(ChatId, MessageId, Option<ReplyMarkup>),
    Delete(ChatId, MessageId),
}

/// Keeps every call in memory. Ids count up from 100.
#[derive(Debug, Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
    next_id: Mutex<MessageId>,
    reject: bool,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(100),
            ..Self::default()
        }
    }

    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::new()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, chat_id: ChatId, item: Sent) -> Result<MessageId, TransportError> {
        if self.reject {
            return Err(TransportError::Rejected {
                chat_id,
                reason: "chat not found".into(),
            });
        }
        self.sent.lock().unwrap().push(item);
        let mut next = self.next_id.lock().unwrap();
        let id = *next;
        *next += 1;
        Ok(id)
    }
}

impl Messenger for RecordingMessenger {
    fn send_message(&self, message: &TextMessage) -> Result<MessageId, TransportError> {
        self.record(message.chat_id, Sent::Message(message.clone()))
    }

    fn send_photo(&self, photo: &Photo) -> Result<MessageId, TransportError> {
        self.record(photo.chat_id, Sent::Photo(photo.clone()))
    }

    fn send_media_group(&self, group: &MediaGroup) -> Result<Vec<MessageId>, TransportError> {
        let first = self.record(group.chat_id, Sent::MediaGroup(group.clone()))?;
        Ok((0..group.media.len() as i64).map(|i| first + i).collect())
    }

    fn send_dice(&self, dice: &Dice) -> Result<MessageId, TransportError> {
        self.record(dice.chat_id, Sent::Dice(dice.clone()))
    }

    fn edit_message_reply_markup(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        markup: Option<&ReplyMarkup>,
    ) -> Result<(), TransportError> {
        self.record(chat_id, Sent::EditMarkup(chat_id, message_id, markup.cloned()))
            .map(|_| ())
    }

    fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<(), TransportError> {
        self.record(chat_id, Sent::Delete(chat_id, message_id)).map(|_| ())
    }
}
