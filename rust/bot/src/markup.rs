//! Keyboards attached to bot messages.

use pokerview_engine::cards::Card;
use serde::{Deserialize, Serialize};

/// Chips in one big blind; bet buttons show their size in these units.
pub const BIG_BLIND: u64 = 10;

/// Bet buttons below the fold/all-in/check row, two per row.
pub const BET_ROWS: [[u64; 2]; 3] = [[BIG_BLIND, 25], [50, 100], [250, 500]];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

impl InlineKeyboardButton {
    pub fn new(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: callback_data.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<String>>,
    pub selective: bool,
    pub resize_keyboard: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyMarkup {
    Inline(InlineKeyboardMarkup),
    Reply(ReplyKeyboardMarkup),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        ReplyMarkup::Inline(markup)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        ReplyMarkup::Reply(markup)
    }
}

/// What a player can answer with on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnAction {
    Check,
    Call,
    Fold,
    AllIn,
    Bet(u64),
}

impl TurnAction {
    /// `Check` when the player has already matched the highest bet of the
    /// round, `Call` otherwise.
    pub fn check_or_call(round_rate: u64, max_round_rate: u64) -> Self {
        if round_rate == max_round_rate {
            TurnAction::Check
        } else {
            TurnAction::Call
        }
    }

    pub fn label(self) -> String {
        match self {
            TurnAction::Check => "check".to_string(),
            TurnAction::Call => "call".to_string(),
            TurnAction::Fold => "fold".to_string(),
            TurnAction::AllIn => "all in".to_string(),
            TurnAction::Bet(amount) => format!("{}$ ({} BB)", amount, big_blinds(amount)),
        }
    }

    pub fn callback_data(self) -> String {
        match self {
            TurnAction::Bet(amount) => amount.to_string(),
            other => other.label(),
        }
    }

    fn button(self) -> InlineKeyboardButton {
        InlineKeyboardButton::new(self.label(), self.callback_data())
    }
}

/// `amount` in big blinds, one decimal with trailing zeros and dot removed:
/// `25` gives `"2.5"`, `10` gives `"1"`.
pub fn big_blinds(amount: u64) -> String {
    let formatted = format!("{:.1}", amount as f64 / BIG_BLIND as f64);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Fold, all-in and check/call on top, then the bet sizes.
pub fn turn_keyboard(check_call: TurnAction) -> InlineKeyboardMarkup {
    let mut inline_keyboard = vec![vec![
        TurnAction::Fold.button(),
        TurnAction::AllIn.button(),
        check_call.button(),
    ]];
    inline_keyboard.extend(BET_ROWS.iter().map(|row| {
        row.iter()
            .map(|&amount| TurnAction::Bet(amount).button())
            .collect()
    }));
    InlineKeyboardMarkup { inline_keyboard }
}

/// One keyboard row holding the player's cards, shown only to them.
pub fn cards_keyboard(cards: &[Card]) -> ReplyKeyboardMarkup {
    ReplyKeyboardMarkup {
        keyboard: vec![cards.iter().map(ToString::to_string).collect()],
        selective: true,
        resize_keyboard: true,
    }
}
