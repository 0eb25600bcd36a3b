//! Fixed pixel layouts for the supported table sizes.
//!
//! The eight-seat table seats four players along the top rail and four along
//! the bottom rail, with the community cards in a single row in the middle:
//!
//! ```text
//!         P0              P1              P2               P3
//! ===================================================================
//! |  [h0 h0]         [h1 h1]         [h2 h2]          [h3 h3]       |
//! |                                                                 |
//! |                    [c0] [c1] [c2] [c3] [c4]                     |
//! |                                                                 |
//! |  [h4 h4]         [h5 h5]         [h6 h6]          [h7 h7]       |
//! ===================================================================
//!         P4              P5              P6               P7
//! ```
//!
//! All coordinates are top-left corners in canvas pixels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::LayoutError;

/// Number of community card slots on every layout.
pub const COMMUNITY_SLOTS: usize = 5;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardSize {
    pub width: u32,
    pub height: u32,
}

/// A named, compile-time seat layout.
#[derive(Debug, PartialEq, Eq)]
pub struct SeatLayout {
    pub name: &'static str,
    avatars: &'static [Point],
    hole_cards: &'static [Point],
    /// Horizontal distance between a seat's two hole cards.
    pub card_spacing: i32,
    community: [Point; COMMUNITY_SLOTS],
    /// Size the blank card is scaled to for community slots.
    pub community_card: CardSize,
    /// Size the blank card is scaled to for hole cards.
    pub hole_card: CardSize,
}

const TOP_ROW: i32 = 100;
const BOTTOM_ROW: i32 = 1150;
const HOLE_ROW_TOP: i32 = 350;
const HOLE_ROW_BOTTOM: i32 = 950;
const HOLE_CARD_SPACING: i32 = 68;

const COMMUNITY: [Point; COMMUNITY_SLOTS] = [
    Point::new(770, 620),
    Point::new(880, 620),
    Point::new(990, 620),
    Point::new(1100, 620),
    Point::new(1210, 620),
];
const COMMUNITY_CARD: CardSize = CardSize {
    width: 100,
    height: 130,
};
const HOLE_CARD: CardSize = CardSize {
    width: 50,
    height: 65,
};

pub static EIGHT_SEAT: SeatLayout = SeatLayout {
    name: "eight",
    avatars: &[
        Point::new(500, TOP_ROW),
        Point::new(800, TOP_ROW),
        Point::new(1100, TOP_ROW),
        Point::new(1400, TOP_ROW),
        Point::new(500, BOTTOM_ROW),
        Point::new(800, BOTTOM_ROW),
        Point::new(1100, BOTTOM_ROW),
        Point::new(1400, BOTTOM_ROW),
    ],
    hole_cards: &[
        Point::new(500, HOLE_ROW_TOP),
        Point::new(800, HOLE_ROW_TOP),
        Point::new(1100, HOLE_ROW_TOP),
        Point::new(1400, HOLE_ROW_TOP),
        Point::new(500, HOLE_ROW_BOTTOM),
        Point::new(800, HOLE_ROW_BOTTOM),
        Point::new(1100, HOLE_ROW_BOTTOM),
        Point::new(1400, HOLE_ROW_BOTTOM),
    ],
    card_spacing: HOLE_CARD_SPACING,
    community: COMMUNITY,
    community_card: COMMUNITY_CARD,
    hole_card: HOLE_CARD,
};

pub static SIX_SEAT: SeatLayout = SeatLayout {
    name: "six",
    avatars: &[
        Point::new(650, TOP_ROW),
        Point::new(950, TOP_ROW),
        Point::new(1250, TOP_ROW),
        Point::new(650, BOTTOM_ROW),
        Point::new(950, BOTTOM_ROW),
        Point::new(1250, BOTTOM_ROW),
    ],
    hole_cards: &[
        Point::new(650, HOLE_ROW_TOP),
        Point::new(950, HOLE_ROW_TOP),
        Point::new(1250, HOLE_ROW_TOP),
        Point::new(650, HOLE_ROW_BOTTOM),
        Point::new(950, HOLE_ROW_BOTTOM),
        Point::new(1250, HOLE_ROW_BOTTOM),
    ],
    card_spacing: HOLE_CARD_SPACING,
    community: COMMUNITY,
    community_card: COMMUNITY_CARD,
    hole_card: HOLE_CARD,
};

impl SeatLayout {
    pub fn seat_count(&self) -> usize {
        self.avatars.len()
    }

    pub fn check_seat(&self, seat: usize) -> Result<(), LayoutError> {
        if seat < self.seat_count() {
            Ok(())
        } else {
            Err(LayoutError::SeatOutOfRange {
                seat,
                seats: self.seat_count(),
            })
        }
    }

    pub fn avatar_anchor(&self, seat: usize) -> Result<Point, LayoutError> {
        self.check_seat(seat)?;
        Ok(self.avatars[seat])
    }

    /// The two hole-card anchors of a seat; the second sits `card_spacing`
    /// pixels to the right of the first.
    pub fn card_anchors(&self, seat: usize) -> Result<[Point; 2], LayoutError> {
        self.check_seat(seat)?;
        let first = self.hole_cards[seat];
        Ok([first, first.offset(self.card_spacing, 0)])
    }

    pub fn community_anchor(&self, slot: usize) -> Result<Point, LayoutError> {
        self.community
            .get(slot)
            .copied()
            .ok_or(LayoutError::SlotOutOfRange { slot })
    }

    pub fn community_anchors(&self) -> [Point; COMMUNITY_SLOTS] {
        self.community
    }
}

/// Selects one of the built-in layouts.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Six,
    #[default]
    Eight,
}

impl LayoutKind {
    pub fn layout(self) -> &'static SeatLayout {
        match self {
            LayoutKind::Six => &SIX_SEAT,
            LayoutKind::Eight => &EIGHT_SEAT,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.layout().name
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "six" | "6" => Ok(LayoutKind::Six),
            "eight" | "8" => Ok(LayoutKind::Eight),
            other => Err(format!("unknown layout '{}' (expected six or eight)", other)),
        }
    }
}
