//! Everything the bot shows in a chat: texts, keyboards, the table picture
//! and the community cards.

use pokerview_engine::assets::AssetProvider;
use pokerview_engine::cards::Card;
use pokerview_engine::compositor::Compositor;
use pokerview_engine::layout::SeatLayout;
use pokerview_engine::table::TableRenderInfo;
use tracing::{info, warn};

use crate::errors::{BotError, TransportError};
use crate::markup::{big_blinds, cards_keyboard, turn_keyboard, ReplyMarkup, TurnAction};
use crate::messenger::{
    ChatId, Dice, InputMediaPhoto, MediaGroup, MessageId, Messenger, Photo, TextMessage,
    DEFAULT_DICE_EMOJI,
};

pub const TABLE_FILE_NAME: &str = "table.jpeg";
pub const DESK_FILE_NAME: &str = "desk.png";

/// Values shown to the player whose turn it is. The caller resolves them
/// from the game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSummary {
    /// Markdown mention of the player.
    pub mention: String,
    pub board: Vec<Card>,
    pub money: u64,
    pub pot: u64,
    /// What this player has put into the pot so far.
    pub in_pot: u64,
    pub round_rate: u64,
    pub max_round_rate: u64,
}

impl TurnSummary {
    pub fn check_or_call(&self) -> TurnAction {
        TurnAction::check_or_call(self.round_rate, self.max_round_rate)
    }

    pub fn text(&self) -> String {
        let board = if self.board.is_empty() {
            "no cards".to_string()
        } else {
            self.board
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        format!(
            "Turn of {}\n{}\nMoney: *{}$* ({} BB)\nPot size: *{}$*\nYour $ in pot: *{}$*\nTap /cards to show cards",
            self.mention,
            board,
            self.money,
            big_blinds(self.money),
            self.pot,
            self.in_pot,
        )
    }
}

pub struct PokerBotViewer<M, A> {
    messenger: M,
    assets: A,
    compositor: Compositor,
    desk_layout: &'static SeatLayout,
}

impl<M: Messenger, A: AssetProvider> PokerBotViewer<M, A> {
    pub fn new(
        messenger: M,
        assets: A,
        compositor: Compositor,
        desk_layout: &'static SeatLayout,
    ) -> Self {
        Self {
            messenger,
            assets,
            compositor,
            desk_layout,
        }
    }

    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    pub fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        reply_markup: Option<ReplyMarkup>,
    ) -> Result<MessageId, BotError> {
        let mut message = TextMessage::silent(chat_id, text);
        message.reply_markup = reply_markup;
        message.disable_web_page_preview = true;
        self.deliver_text(&message)
    }

    pub fn send_photo(
        &self,
        chat_id: ChatId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<MessageId, BotError> {
        let photo = Photo::silent(chat_id, file_name, bytes);
        let id = self
            .messenger
            .send_photo(&photo)
            .inspect_err(|e| warn!(chat_id, error = %e, "photo delivery failed"))?;
        info!(chat_id, message_id = id, file_name, "photo delivered");
        Ok(id)
    }

    /// Rolls a dice in reply to `message_id`; the default emoji is a die.
    pub fn send_dice_reply(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        emoji: Option<&str>,
    ) -> Result<MessageId, BotError> {
        let dice = Dice {
            chat_id,
            reply_to: Some(message_id),
            emoji: emoji.unwrap_or(DEFAULT_DICE_EMOJI).to_string(),
            disable_notification: true,
        };
        let id = self
            .messenger
            .send_dice(&dice)
            .inspect_err(|e| warn!(chat_id, error = %e, "dice delivery failed"))?;
        info!(chat_id, message_id = id, "dice delivered");
        Ok(id)
    }

    pub fn send_message_reply(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        text: &str,
    ) -> Result<MessageId, BotError> {
        self.deliver_text(&TextMessage::silent(chat_id, text).replying_to(message_id))
    }

    /// Posts the community cards as a one-photo media group and returns the
    /// id of the first message of the group.
    pub fn send_desk_cards_img(
        &self,
        chat_id: ChatId,
        cards: &[Card],
        caption: &str,
        disable_notification: bool,
    ) -> Result<MessageId, BotError> {
        let bytes = self
            .compositor
            .render_desk(&self.assets, self.desk_layout, cards)?;
        let group = MediaGroup {
            chat_id,
            media: vec![InputMediaPhoto {
                bytes,
                file_name: DESK_FILE_NAME.to_string(),
                caption: caption.to_string(),
            }],
            disable_notification,
        };
        let ids = self
            .messenger
            .send_media_group(&group)
            .inspect_err(|e| warn!(chat_id, error = %e, "desk delivery failed"))?;
        let first = ids
            .first()
            .copied()
            .ok_or(TransportError::EmptyMediaGroup { chat_id })?;
        info!(chat_id, message_id = first, revealed = cards.len(), "desk delivered");
        Ok(first)
    }

    /// Shows a player their hole cards as a selective reply keyboard.
    pub fn send_cards(
        &self,
        chat_id: ChatId,
        cards: &[Card],
        mention: &str,
        ready_message_id: MessageId,
    ) -> Result<MessageId, BotError> {
        let message = TextMessage::silent(chat_id, format!("Showing cards to {}", mention))
            .with_markup(cards_keyboard(cards))
            .replying_to(ready_message_id);
        self.deliver_text(&message)
    }

    pub fn send_turn_actions(
        &self,
        chat_id: ChatId,
        turn: &TurnSummary,
    ) -> Result<MessageId, BotError> {
        let message = TextMessage::silent(chat_id, turn.text())
            .with_markup(turn_keyboard(turn.check_or_call()));
        self.deliver_text(&message)
    }

    pub fn remove_markup(&self, chat_id: ChatId, message_id: MessageId) -> Result<(), BotError> {
        self.messenger
            .edit_message_reply_markup(chat_id, message_id, None)
            .inspect_err(|e| warn!(chat_id, message_id, error = %e, "markup removal failed"))?;
        Ok(())
    }

    pub fn remove_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<(), BotError> {
        self.messenger
            .delete_message(chat_id, message_id)
            .inspect_err(|e| warn!(chat_id, message_id, error = %e, "message removal failed"))?;
        Ok(())
    }

    /// Renders the table and posts it as a JPEG photo.
    pub fn show_table_with_players(
        &self,
        chat_id: ChatId,
        table: &TableRenderInfo,
    ) -> Result<MessageId, BotError> {
        let jpeg = self
            .compositor
            .render_table(&self.assets, table)
            .inspect_err(|e| warn!(chat_id, error = %e, "table render failed"))?;
        self.send_photo(chat_id, TABLE_FILE_NAME, jpeg)
    }

    fn deliver_text(&self, message: &TextMessage) -> Result<MessageId, BotError> {
        let chat_id = message.chat_id;
        let id = self
            .messenger
            .send_message(message)
            .inspect_err(|e| warn!(chat_id, error = %e, "message delivery failed"))?;
        info!(chat_id, message_id = id, "message delivered");
        Ok(id)
    }
}
