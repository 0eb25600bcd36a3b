use image::RgbaImage;

use crate::errors::{LayoutError, RenderError};
use crate::layout::{Point, SeatLayout, COMMUNITY_SLOTS};

/// What the compositor needs to know about one seated player.
///
/// Avatars are drawn at their own size; callers normalise them first
/// (see [`crate::assets::resize_square`]).
#[derive(Debug, Clone)]
pub struct PlayerRenderInfo {
    pub avatar: RgbaImage,
    pub name: String,
    /// Chip count
    pub money: u64,
    /// Chair the player sits on
    pub seat: usize,
    pub is_current_turn: bool,
}

impl PlayerRenderInfo {
    pub fn new(avatar: RgbaImage, name: impl Into<String>, money: u64, seat: usize) -> Self {
        Self {
            avatar,
            name: name.into(),
            money,
            seat,
            is_current_turn: false,
        }
    }

    pub fn with_current_turn(mut self, is_current_turn: bool) -> Self {
        self.is_current_turn = is_current_turn;
        self
    }

    pub fn avatar_anchor(&self, layout: &SeatLayout) -> Result<Point, LayoutError> {
        layout.avatar_anchor(self.seat)
    }

    pub fn card_anchors(&self, layout: &SeatLayout) -> Result<[Point; 2], LayoutError> {
        layout.card_anchors(self.seat)
    }

    pub fn money_label(&self) -> String {
        format!("{} $", self.money)
    }
}

/// Snapshot of everything drawn for one table render.
///
/// Built fresh per render and never mutated afterwards; every seat has been
/// checked against the layout by the time a value exists.
#[derive(Debug, Clone)]
pub struct TableRenderInfo {
    layout: &'static SeatLayout,
    players: Vec<PlayerRenderInfo>,
}

impl TableRenderInfo {
    pub fn new(
        layout: &'static SeatLayout,
        players: Vec<PlayerRenderInfo>,
    ) -> Result<Self, LayoutError> {
        for player in &players {
            layout.check_seat(player.seat)?;
        }
        Ok(Self { layout, players })
    }

    pub fn layout(&self) -> &'static SeatLayout {
        self.layout
    }

    pub fn players(&self) -> &[PlayerRenderInfo] {
        &self.players
    }

    /// Widest and tallest avatar, taken independently per axis.
    pub fn max_avatar_size(&self) -> Result<(u32, u32), RenderError> {
        if self.players.is_empty() {
            return Err(RenderError::EmptyTable);
        }
        Ok(self.players.iter().fold((0, 0), |(w, h), p| {
            let (pw, ph) = p.avatar.dimensions();
            (w.max(pw), h.max(ph))
        }))
    }

    pub fn community_card_anchors(&self) -> [Point; COMMUNITY_SLOTS] {
        self.layout.community_anchors()
    }
}
